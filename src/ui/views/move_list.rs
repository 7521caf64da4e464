//! Move list panel - the game's move history with start/back/forward/end
//! navigation once no game is in progress.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};

use crate::domain::HistoryEntry;
use crate::models::GameSession;
use crate::ui::components::render_button;
use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, TEXT_PRIMARY, TEXT_SECONDARY};

// Colors for move highlighting
const MOVE_HOVER_BG: u32 = 0x3a3a3a;
const MOVE_SELECTED_BG: u32 = 0x4a6da7;

/// Render the move list panel for a given game session.
pub fn render_move_list_panel(session: &Entity<GameSession>, cx: &App) -> Div {
    let game = session.read(cx);
    let history = game.history();
    let browsing = !game.is_game_in_progress() && !history.is_empty();

    let moves_content = if history.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div()
            .flex()
            .flex_wrap()
            .gap_1()
            .children(history.entries().iter().enumerate().map(|(i, &entry)| {
                let label = SharedString::from(history.label(entry));
                match entry {
                    HistoryEntry::MoveNumber(_) => div()
                        .text_color(rgb(TEXT_SECONDARY))
                        .child(label)
                        .into_any_element(),
                    HistoryEntry::MoveButton(index) => render_clickable_move(
                        i,
                        index,
                        label,
                        history.is_highlighted(i),
                        browsing,
                        session.clone(),
                    )
                    .into_any_element(),
                }
            }))
    };

    let mut move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        );

    // Navigation only makes sense while no game is running
    if browsing {
        let session_start = session.clone();
        let session_back = session.clone();
        let session_forward = session.clone();
        let session_end = session.clone();
        move_list = move_list.child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_button("nav-start", "⟨⟨", true, move |cx| {
                    session_start.update(cx, |game, cx| {
                        game.go_to_start();
                        cx.notify();
                    });
                }))
                .child(render_button("nav-back", "⟨", true, move |cx| {
                    session_back.update(cx, |game, cx| {
                        game.go_back();
                        cx.notify();
                    });
                }))
                .child(render_button("nav-forward", "⟩", true, move |cx| {
                    session_forward.update(cx, |game, cx| {
                        game.go_forward();
                        cx.notify();
                    });
                }))
                .child(render_button("nav-end", "⟩⟩", true, move |cx| {
                    session_end.update(cx, |game, cx| {
                        game.go_to_end();
                        cx.notify();
                    });
                })),
        );
    }

    move_list
}

/// A move in the list; clicking shows its position when browsing
fn render_clickable_move(
    entry_index: usize,
    move_index: usize,
    label: SharedString,
    is_selected: bool,
    clickable: bool,
    session: Entity<GameSession>,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("move-{entry_index}")))
        .px_1()
        .rounded(px(3.0))
        .text_color(rgb(TEXT_PRIMARY))
        .when(is_selected, |el| el.bg(rgb(MOVE_SELECTED_BG)))
        .when(clickable && !is_selected, |el| {
            el.hover(|s| s.bg(rgb(MOVE_HOVER_BG)))
        })
        .when(clickable, |el| {
            el.cursor_pointer().on_click(move |_ev, _window, cx| {
                session.update(cx, |game, cx| {
                    game.select_move(move_index);
                    cx.notify();
                });
            })
        })
        .child(label)
}
