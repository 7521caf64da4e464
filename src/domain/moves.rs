//! Move resolution - matching a drag's origin/target against the legal moves.

use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Piece, PieceKind, PromotionPiece, Side};

/// Promotion tag of a legal move, or the one a drop asks for
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PromotionConstraint {
    NoPromotion,
    Promote(PromotionPiece),
}

/// One entry of the rules oracle's legal move list.
///
/// Castling is expressed as the king's own two-square move (e1 -> g1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub from: Cell,
    pub to: Cell,
    pub promotion: PromotionConstraint,
}

impl MoveCandidate {
    pub fn new(from: Cell, to: Cell, promotion: PromotionConstraint) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }
}

/// Find the legal move with the given origin, target and promotion tag.
///
/// At most one legal move exists per triple, so the first match is returned.
pub fn find_move(
    legal_moves: &[MoveCandidate],
    from: Cell,
    to: Cell,
    promotion: PromotionConstraint,
) -> Option<MoveCandidate> {
    legal_moves
        .iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
        .copied()
}

/// Farthest rank from `side`'s own starting edge.
pub fn promotion_rank(side: Side) -> i32 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

/// Whether dropping `piece` on `target` is a promotion-eligible drop:
/// (white pawn and rank 8) or (black pawn and rank 1).
pub fn is_promotion_drop(piece: Piece, target: Cell) -> bool {
    piece.kind == PieceKind::Pawn && target.rank == promotion_rank(piece.side)
}
