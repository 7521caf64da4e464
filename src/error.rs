//! Error types surfaced by the board and the rules oracle.

use thiserror::Error;

use crate::domain::{Cell, DrawKind, PieceKind};

/// Errors reported by the library.
///
/// Rejected drags, denied history navigation and refused draw claims are not
/// errors; they show up as `false`, `None` or an empty event list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A FEN string could not be turned into a playable position.
    #[error("malformed position `{fen}`: {reason}")]
    MalformedPosition { fen: String, reason: String },

    /// The oracle was asked to play a move that is not in its legal move list.
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Cell, to: Cell },

    /// A draw was claimed that the position does not allow.
    #[error("{0} draw cannot be claimed in this position")]
    DrawNotEligible(DrawKind),

    /// King or pawn offered as a promotion piece.
    #[error("{0:?} is not a promotion piece")]
    InvalidPromotion(PieceKind),
}
