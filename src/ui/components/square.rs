//! Square rendering component.

use crate::domain::{Cell, Piece, Point};
use crate::models::CellHighlight;
use crate::ui::components::render_piece;
use crate::ui::theme::square_color;
use gpui::{div, prelude::*, px};

/// Render one board square at its pixel origin inside the board
pub fn render_square(
    cell: Cell,
    origin: Point,
    piece: Option<Piece>,
    highlight: Option<CellHighlight>,
    square_size: f32,
) -> impl IntoElement {
    div()
        .absolute()
        .left(px(origin.x))
        .top(px(origin.y))
        .size(px(square_size))
        .bg(square_color(cell, highlight))
        .when_some(piece, |el, p| el.child(render_piece(p, square_size)))
}
