mod button;
mod piece;
mod square;

pub use button::render_button;
pub use piece::{render_ghost, render_piece, render_piece_image};
pub use square::render_square;
