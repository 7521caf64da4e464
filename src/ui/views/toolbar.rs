//! Toolbar with the game actions and the status line.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, rgb};
use log::warn;

use crate::domain::{GameOutcome, Side};
use crate::models::{GameEnd, GameSession};
use crate::ui::components::render_button;
use crate::ui::theme::{TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::views::board_view::log_events;

pub fn render_toolbar(session: &Entity<GameSession>, cx: &App) -> Div {
    let game = session.read(cx);
    let in_progress = game.is_game_in_progress();
    let status = status_text(
        game.game_end(),
        game.board().oracle().turn(),
        game.draw_refused(),
    );

    let session_new = session.clone();
    let session_flip = session.clone();
    let session_draw = session.clone();
    let session_stop = session.clone();

    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap_2()
                .child(render_button("new-game", "New game", true, move |cx| {
                    session_new.update(cx, |game, cx| {
                        match game.new_game() {
                            Ok(events) => log_events(events),
                            Err(e) => warn!("cannot start a new game: {e}"),
                        }
                        cx.notify();
                    });
                }))
                .child(render_button("flip-board", "Flip board", true, move |cx| {
                    session_flip.update(cx, |game, cx| {
                        game.flip_orientation();
                        cx.notify();
                    });
                }))
                .child(render_button("claim-draw", "Claim draw", in_progress, move |cx| {
                    session_draw.update(cx, |game, cx| {
                        log_events(game.claim_draw());
                        cx.notify();
                    });
                }))
                .child(render_button("stop-game", "Stop game", in_progress, move |cx| {
                    session_stop.update(cx, |game, cx| {
                        game.stop_game();
                        cx.notify();
                    });
                })),
        )
        .child(
            div()
                .text_color(if in_progress {
                    rgb(TEXT_SECONDARY)
                } else {
                    rgb(TEXT_PRIMARY)
                })
                .child(status),
        )
}

fn status_text(end: Option<GameEnd>, turn: Side, draw_refused: bool) -> SharedString {
    let text = match end {
        None if draw_refused => match turn {
            Side::White => "No draw available, white to move",
            Side::Black => "No draw available, black to move",
        },
        None => match turn {
            Side::White => "White to move",
            Side::Black => "Black to move",
        },
        Some(GameEnd::NotStarted) => "Press New game to start",
        Some(GameEnd::Stopped) => "Game stopped",
        Some(GameEnd::Finished(GameOutcome::WhiteWon)) => "White wins",
        Some(GameEnd::Finished(GameOutcome::BlackWon)) => "Black wins",
        Some(GameEnd::Finished(GameOutcome::Draw)) => "Draw",
        Some(GameEnd::Finished(GameOutcome::InProgress)) => "Game over",
    };
    SharedString::from(text)
}
