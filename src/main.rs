use anyhow::Result;
use gpui::{App, Application};

use chessboard_input::BoardConfig;
use chessboard_input::app;
use chessboard_input::ui::FileAssets;

fn main() -> Result<()> {
    // optional path to a JSON board config
    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| {
            if let Err(e) = app::run(config, cx) {
                log::error!("{e:#}");
                cx.quit();
            }
        });
    Ok(())
}
