//! Chess board view - the board with drag-and-drop input and the side panel.

use gpui::{
    AnyElement, Context, Div, Entity, Hsla, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, PathBuilder, Pixels, SharedString, Subscription, Window, canvas, div, point,
    prelude::*, px, rgb, rgba,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use log::debug;

use crate::domain::{Arrow, BoardGeometry, Cell, Side, promotion_choices};
use crate::models::{BoardFrame, BoardState, GameEvent, GameSession};
use crate::ui::board_layout::BoardLayout;
use crate::ui::components::{render_button, render_ghost, render_piece_image, render_square};
use crate::ui::theme::{
    ARROW_COLOR, ARROW_WIDTH, BOARD_MARGIN, BOARD_PADDING, COORDINATE_TEXT, INITIAL_LEFT_PANEL,
    INITIAL_RIGHT_PANEL, OVERLAY_BG, PANEL_BG, TURN_INDICATOR_SCALE, turn_color,
};
use crate::ui::views::{render_move_list_panel, render_toolbar};

/// The main chess board view that observes a GameSession
pub struct ChessBoardView {
    session: Entity<GameSession>,
    layout: BoardLayout,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(session: Entity<GameSession>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&session, |_, _, cx| cx.notify());
        Self {
            session,
            layout: BoardLayout::default(),
            _subscription,
        }
    }
}

pub(crate) fn log_events(events: Vec<GameEvent>) {
    for event in events {
        debug!("{event:?}");
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session.clone();
        let session_down = session.clone();
        let session_move = session.clone();
        let session_up = session.clone();
        let layout = self.layout;
        let view = cx.entity();

        let frame = self.session.read(cx).frame();
        let board = render_board(&frame, &session);

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            // Mouse down: start a drag
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    let point = layout.to_board_point(ev.position);
                    session_down.update(cx, |game, cx| {
                        log_events(game.pointer_down(point));
                        cx.notify();
                    });
                },
            )
            // Mouse move: follow the pointer while dragging
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                let point = layout.to_board_point(ev.position);
                session_move.update(cx, |game, cx| {
                    if matches!(game.board().state(), BoardState::Dragging(_)) {
                        log_events(game.pointer_move(point));
                        cx.notify();
                    }
                });
            })
            // Mouse up: drop the piece
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                let point = layout.to_board_point(ev.position);
                session_up.update(cx, |game, cx| {
                    log_events(game.pointer_up(point));
                    cx.notify();
                });
            });

        // Canvas to measure the board panel
        let session_measure = session.clone();
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view.update(cx, |this, cx| {
                    if this.layout.panel_bounds != bounds {
                        this.layout = BoardLayout::new(bounds);
                        let length = this.layout.board_length();
                        session_measure.update(cx, |game, _| game.set_board_length(length));
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let side_panel = div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(render_toolbar(&session, cx))
            .child(render_move_list_panel(&session, cx));

        // Main resizable layout
        div().size_full().child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(200.)..Pixels::MAX)
                        .child(side_panel),
                ),
        )
    }
}

/// The 9x9 board: squares, coordinates, turn indicator, arrow, ghost piece and
/// the promotion chooser when one is open
fn render_board(frame: &BoardFrame, session: &Entity<GameSession>) -> Div {
    let geometry = frame.geometry;
    let length = geometry.length;
    let square_size = geometry.cell_size();

    let squares = (0..8).flat_map(|rank| {
        (0..8).map(move |file| {
            let cell = Cell::new(file, rank);
            render_square(
                cell,
                geometry.cell_origin(cell),
                frame.piece_at(cell),
                frame.highlight_at(cell),
                square_size,
            )
            .into_any_element()
        })
    });

    let ghost = frame
        .ghost
        .map(|(piece, at)| render_ghost(piece, at, square_size));

    div()
        .relative()
        .flex_shrink_0()
        .size(px(length))
        .rounded_md()
        .bg(rgb(BOARD_MARGIN))
        .children(squares)
        .children(render_coordinates(&geometry))
        .child(render_turn_indicator(&geometry, frame.turn))
        .when_some(frame.arrow, |el, arrow| el.child(render_arrow(arrow)))
        .when_some(ghost, |el, g| el.child(g))
        .when_some(frame.promotion, |el, side| {
            el.child(render_promotion_chooser(side, square_size, session))
        })
}

fn render_coordinates(geometry: &BoardGeometry) -> Vec<AnyElement> {
    let half = geometry.half_cell();
    let cell = geometry.cell_size();
    let mut labels = Vec::with_capacity(16);

    for file in 0..8 {
        let origin = geometry.cell_origin(Cell::new(file, 0));
        let letter = char::from(b'a' + file as u8);
        labels.push(
            coordinate_label(SharedString::from(letter.to_string()))
                .left(px(origin.x))
                .top(px(geometry.length - half))
                .w(px(cell))
                .h(px(half))
                .into_any_element(),
        );
    }
    for rank in 0..8 {
        let origin = geometry.cell_origin(Cell::new(0, rank));
        labels.push(
            coordinate_label(SharedString::from((rank + 1).to_string()))
                .left(px(0.0))
                .top(px(origin.y))
                .w(px(half))
                .h(px(cell))
                .into_any_element(),
        );
    }
    labels
}

fn coordinate_label(text: SharedString) -> Div {
    div()
        .absolute()
        .flex()
        .items_center()
        .justify_center()
        .text_xs()
        .text_color(rgb(COORDINATE_TEXT))
        .child(text)
}

/// Dot in the bottom-right margin corner colored for the side to move
fn render_turn_indicator(geometry: &BoardGeometry, turn: Side) -> impl IntoElement {
    let half = geometry.half_cell();
    let dot = half * TURN_INDICATOR_SCALE * 2.0;
    let offset = geometry.length - half + (half - dot) / 2.0;
    div()
        .absolute()
        .left(px(offset))
        .top(px(offset))
        .size(px(dot))
        .rounded_full()
        .border_1()
        .border_color(rgb(COORDINATE_TEXT))
        .bg(turn_color(turn))
}

fn render_arrow(arrow: Arrow) -> impl IntoElement {
    canvas(
        |_, _, _| {},
        move |bounds, _, window, _| {
            let color: Hsla = rgb(ARROW_COLOR).into();
            for segment in arrow.segments() {
                let mut builder = PathBuilder::stroke(px(ARROW_WIDTH));
                builder.move_to(bounds.origin + point(px(segment.start.x), px(segment.start.y)));
                builder.line_to(bounds.origin + point(px(segment.end.x), px(segment.end.y)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, color);
                }
            }
        },
    )
    .absolute()
    .top_0()
    .left_0()
    .size_full()
}

fn render_promotion_chooser(
    side: Side,
    square_size: f32,
    session: &Entity<GameSession>,
) -> impl IntoElement {
    let choices = promotion_choices(side).map(|(piece, path)| {
        let session = session.clone();
        render_piece_image(path, square_size)
            .id(SharedString::from(format!("promote-{piece:?}")))
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(rgb(0x3a3a3a)))
            .on_click(move |_ev, _window, cx| {
                session.update(cx, |game, cx| {
                    log_events(game.choose_promotion(piece.kind()));
                    cx.notify();
                });
            })
    });

    let session_dismiss = session.clone();
    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_2()
        .bg(rgba(0x000000aa))
        // keep clicks on the chooser away from the board's drag handlers
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .child(
            div()
                .flex()
                .gap_1()
                .p_2()
                .rounded_md()
                .bg(rgb(OVERLAY_BG))
                .children(choices),
        )
        .child(render_button("promotion-cancel", "Cancel", true, move |cx| {
            session_dismiss.update(cx, |game, cx| {
                log_events(game.dismiss_promotion());
                cx.notify();
            });
        }))
}
