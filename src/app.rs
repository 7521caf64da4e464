//! Application setup and window creation.

use anyhow::{Context as _, Result};
use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::config::BoardConfig;
use crate::models::GameSession;
use crate::ui::views::ChessBoardView;

/// Open the main window with a session built from `config`
pub fn run(config: BoardConfig, cx: &mut App) -> Result<()> {
    gpui_component::init(cx);

    let session = cx.new(|_| GameSession::new(config));

    let bounds = Bounds::centered(None, size(px(900.0), px(620.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(session, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the board window")?;
    Ok(())
}
