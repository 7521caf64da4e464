//! Domain layer - chess types, board geometry, move resolution and history.
//! Nothing in here knows about the UI or holds game state.

pub mod arrow;
pub mod chess;
pub mod geometry;
pub mod history;
pub mod moves;
pub mod notation;

pub use arrow::{Arrow, Segment, last_move_arrow};
pub use chess::{
    Cell, DrawKind, GameOutcome, Orientation, Piece, PieceKind, PromotionPiece, Side,
    promotion_choices, shakmaty_to_piece,
};
pub use geometry::{BoardGeometry, Point};
pub use history::{Cursor, History, HistoryEntry, MoveRecord};
pub use moves::{MoveCandidate, PromotionConstraint, find_move, is_promotion_drop};
