//! Piece images: on a square, under the pointer, and in the promotion chooser.

use crate::domain::{Piece, Point};
use crate::ui::theme::PIECE_SCALE;
use gpui::{Div, div, img, prelude::*, px};

/// A cell-sized box with the image scaled and centered inside it
pub fn render_piece_image(svg_path: &'static str, square_size: f32) -> Div {
    div()
        .size(px(square_size))
        .flex()
        .items_center()
        .justify_center()
        .child(img(svg_path).size(px(square_size * PIECE_SCALE)))
}

/// Piece standing on a square
pub fn render_piece(piece: Piece, square_size: f32) -> impl IntoElement {
    render_piece_image(piece.svg_path(), square_size)
}

/// Dragged piece drawn with its top-left corner at `at`
pub fn render_ghost(piece: Piece, at: Point, square_size: f32) -> impl IntoElement {
    render_piece_image(piece.svg_path(), square_size)
        .absolute()
        .left(px(at.x))
        .top(px(at.y))
}
