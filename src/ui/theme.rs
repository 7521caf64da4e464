//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

use crate::domain::{Cell, Side};
use crate::models::CellHighlight;

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const MIN_BOARD_LENGTH: f32 = 270.0;
pub const ARROW_WIDTH: f32 = 4.0;
pub const TURN_INDICATOR_SCALE: f32 = 0.4;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 560.0;
pub const INITIAL_RIGHT_PANEL: f32 = 300.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const BOARD_MARGIN: u32 = 0x3b2f25;
pub const COORDINATE_TEXT: u32 = 0xd8c3a0;
pub const ORIGIN_HIGHLIGHT: u32 = 0x8fb35a;
pub const TARGET_HIGHLIGHT: u32 = 0xd9c94a;
pub const CROSS_LIGHT: u32 = 0xe3dba0;
pub const CROSS_DARK: u32 = 0xb09a5c;
pub const ARROW_COLOR: u32 = 0x3f7fbf;
pub const WHITE_TURN: u32 = 0xf5f5f5;
pub const BLACK_TURN: u32 = 0x111111;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const OVERLAY_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;

/// Color of a board square, a drag highlight taking precedence
pub fn square_color(cell: Cell, highlight: Option<CellHighlight>) -> Rgba {
    let light = (cell.file + cell.rank) % 2 == 1;
    match highlight {
        Some(CellHighlight::Origin) => rgb(ORIGIN_HIGHLIGHT),
        Some(CellHighlight::Target) => rgb(TARGET_HIGHLIGHT),
        Some(CellHighlight::Cross) if light => rgb(CROSS_LIGHT),
        Some(CellHighlight::Cross) => rgb(CROSS_DARK),
        None if light => rgb(LIGHT_SQUARE),
        None => rgb(DARK_SQUARE),
    }
}

pub fn turn_color(side: Side) -> Rgba {
    match side {
        Side::White => rgb(WHITE_TURN),
        Side::Black => rgb(BLACK_TURN),
    }
}
