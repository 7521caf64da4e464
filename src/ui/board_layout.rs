//! Board layout calculations - handles sizing and coordinate transformations.

use gpui::{Bounds, Pixels, point, px, size};

use crate::domain::Point;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, MIN_BOARD_LENGTH};

/// Where the board sits in the window, from the measured board panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_bounds: Bounds<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_bounds: Bounds<Pixels>) -> Self {
        Self { panel_bounds }
    }

    /// Edge length of the drawn board, coordinate margins included
    pub fn board_length(&self) -> f32 {
        let panel_width: f32 = self.panel_bounds.size.width.into();
        let panel_height: f32 = self.panel_bounds.size.height.into();
        let available = panel_width.min(panel_height) - BOARD_PADDING * 2.0;
        available.max(MIN_BOARD_LENGTH)
    }

    /// Convert a window position to board coordinates
    pub fn to_board_point(&self, position: gpui::Point<Pixels>) -> Point {
        let x: f32 = (position.x - self.panel_bounds.origin.x).into();
        let y: f32 = (position.y - self.panel_bounds.origin.y).into();
        Point::new(x - BOARD_PADDING, y - BOARD_PADDING)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Bounds {
            origin: point(px(0.0), px(0.0)),
            size: size(px(INITIAL_LEFT_PANEL), px(INITIAL_LEFT_PANEL)),
        })
    }
}
