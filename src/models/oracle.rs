//! Rules oracle - the chess rules engine the board consults.
//!
//! The board never reasons about chess rules itself: it asks the oracle for
//! legal moves, pieces, side to move and outcome, and hands it the one move it
//! decided to play.

use std::collections::HashMap;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Role, Square};

use crate::domain::chess::side_from_color;
use crate::domain::{
    Cell, DrawKind, GameOutcome, MoveCandidate, Piece, PromotionConstraint, PromotionPiece, Side,
    shakmaty_to_piece,
};
use crate::error::BoardError;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub trait RulesOracle {
    /// Every legal move in the current position
    fn legal_moves(&self) -> Vec<MoveCandidate>;

    fn turn(&self) -> Side;

    fn piece_at(&self, cell: Cell) -> Option<Piece>;

    /// Play a move from `legal_moves` and return its SAN, check suffix included.
    fn apply_move(&mut self, mv: &MoveCandidate) -> Result<String, BoardError>;

    fn outcome(&self) -> GameOutcome;

    /// FEN of the current position
    fn position_notation(&self) -> String;

    fn load_position(&mut self, fen: &str) -> Result<(), BoardError>;

    fn eligible_draws(&self) -> Vec<DrawKind>;

    fn claim_draw(&mut self, kind: DrawKind) -> Result<(), BoardError>;
}

/// Rules oracle backed by shakmaty.
///
/// shakmaty positions carry no game history, so repetitions are counted here.
#[derive(Clone, Debug)]
pub struct ShakmatyOracle {
    position: Chess,
    repetitions: HashMap<String, u32>,
    claimed_draw: Option<DrawKind>,
}

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        parse_position(fen).map(Self::from_position)
    }

    fn from_position(position: Chess) -> Self {
        let mut oracle = Self {
            position,
            repetitions: HashMap::new(),
            claimed_draw: None,
        };
        oracle.record_repetition();
        oracle
    }

    fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Placement, turn, castling rights and en passant square
    fn repetition_key(&self) -> String {
        self.fen()
            .split_whitespace()
            .take(4)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn record_repetition(&mut self) {
        *self.repetitions.entry(self.repetition_key()).or_insert(0) += 1;
    }

    fn find_shakmaty_move(&self, mv: &MoveCandidate) -> Option<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .find(|m| to_candidate(m).as_ref() == Some(mv))
    }
}

impl Default for ShakmatyOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_position(fen: &str) -> Result<Chess, BoardError> {
    let malformed = |reason: String| BoardError::MalformedPosition {
        fen: fen.to_string(),
        reason,
    };
    let parsed: Fen = fen.trim().parse().map_err(|e| malformed(format!("{e}")))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| malformed(format!("{e}")))
}

fn promotion_from_role(role: Option<Role>) -> Option<PromotionConstraint> {
    match role {
        None => Some(PromotionConstraint::NoPromotion),
        Some(Role::Queen) => Some(PromotionConstraint::Promote(PromotionPiece::Queen)),
        Some(Role::Rook) => Some(PromotionConstraint::Promote(PromotionPiece::Rook)),
        Some(Role::Bishop) => Some(PromotionConstraint::Promote(PromotionPiece::Bishop)),
        Some(Role::Knight) => Some(PromotionConstraint::Promote(PromotionPiece::Knight)),
        Some(Role::Pawn | Role::King) => None,
    }
}

/// Express a shakmaty move the way a drag produces it.
fn to_candidate(m: &Move) -> Option<MoveCandidate> {
    let (from, to, promotion) = match m {
        Move::Normal {
            from,
            to,
            promotion,
            ..
        } => (*from, *to, promotion_from_role(*promotion)?),
        Move::EnPassant { from, to } => (*from, *to, PromotionConstraint::NoPromotion),
        Move::Castle { king, rook } => {
            // for castling, user drags king to destination (g1/g8 or c1/c8)
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            (*king, king_dest, PromotionConstraint::NoPromotion)
        }
        Move::Put { .. } => return None,
    };
    Some(MoveCandidate::new(
        Cell::from_square(from),
        Cell::from_square(to),
        promotion,
    ))
}

impl RulesOracle for ShakmatyOracle {
    fn legal_moves(&self) -> Vec<MoveCandidate> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(to_candidate)
            .collect()
    }

    fn turn(&self) -> Side {
        side_from_color(self.position.turn())
    }

    fn piece_at(&self, cell: Cell) -> Option<Piece> {
        let sq = cell.to_square()?;
        self.position.board().piece_at(sq).map(shakmaty_to_piece)
    }

    fn apply_move(&mut self, mv: &MoveCandidate) -> Result<String, BoardError> {
        let illegal = || BoardError::IllegalMove {
            from: mv.from,
            to: mv.to,
        };
        let m = self.find_shakmaty_move(mv).ok_or_else(illegal)?;

        let san = San::from_move(&self.position, m.clone()).to_string();
        let next = self.position.clone().play(m).map_err(|_| illegal())?;

        let suffix = if next.is_checkmate() {
            "#"
        } else if next.is_check() {
            "+"
        } else {
            ""
        };

        self.position = next;
        self.record_repetition();
        Ok(format!("{san}{suffix}"))
    }

    fn outcome(&self) -> GameOutcome {
        if self.position.is_checkmate() {
            return match self.turn() {
                Side::White => GameOutcome::BlackWon,
                Side::Black => GameOutcome::WhiteWon,
            };
        }
        if self.claimed_draw.is_some()
            || self.position.is_stalemate()
            || self.position.is_insufficient_material()
        {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    fn position_notation(&self) -> String {
        self.fen()
    }

    fn load_position(&mut self, fen: &str) -> Result<(), BoardError> {
        let position = parse_position(fen)?;
        *self = Self::from_position(position);
        Ok(())
    }

    fn eligible_draws(&self) -> Vec<DrawKind> {
        let mut draws = Vec::new();
        let seen = self
            .repetitions
            .get(&self.repetition_key())
            .copied()
            .unwrap_or(0);
        if seen >= 3 {
            draws.push(DrawKind::ThreefoldRepetition);
        }
        if self.position.halfmoves() >= 100 {
            draws.push(DrawKind::FiftyMoveRule);
        }
        draws
    }

    fn claim_draw(&mut self, kind: DrawKind) -> Result<(), BoardError> {
        if !self.eligible_draws().contains(&kind) {
            return Err(BoardError::DrawNotEligible(kind));
        }
        self.claimed_draw = Some(kind);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted oracle for driving the board without a rules engine.

    use super::*;

    #[derive(Clone, Debug)]
    pub struct MockOracle {
        pub pieces: HashMap<Cell, Piece>,
        pub turn: Side,
        pub legal: Vec<MoveCandidate>,
        pub applied: Vec<MoveCandidate>,
        pub san: String,
        pub fen: String,
        pub fen_after_move: String,
        /// Outcome reported once a move has been applied
        pub outcome_after_move: GameOutcome,
        pub outcome: GameOutcome,
        pub draws: Vec<DrawKind>,
    }

    impl MockOracle {
        pub fn new(turn: Side) -> Self {
            Self {
                pieces: HashMap::new(),
                turn,
                legal: Vec::new(),
                applied: Vec::new(),
                san: "e4".to_string(),
                fen: "start".to_string(),
                fen_after_move: "after".to_string(),
                outcome_after_move: GameOutcome::InProgress,
                outcome: GameOutcome::InProgress,
                draws: Vec::new(),
            }
        }

        pub fn with_piece(mut self, cell: Cell, piece: Piece) -> Self {
            self.pieces.insert(cell, piece);
            self
        }

        pub fn with_move(mut self, mv: MoveCandidate) -> Self {
            self.legal.push(mv);
            self
        }
    }

    impl RulesOracle for MockOracle {
        fn legal_moves(&self) -> Vec<MoveCandidate> {
            self.legal.clone()
        }

        fn turn(&self) -> Side {
            self.turn
        }

        fn piece_at(&self, cell: Cell) -> Option<Piece> {
            self.pieces.get(&cell).copied()
        }

        fn apply_move(&mut self, mv: &MoveCandidate) -> Result<String, BoardError> {
            if !self.legal.contains(mv) {
                return Err(BoardError::IllegalMove {
                    from: mv.from,
                    to: mv.to,
                });
            }
            self.applied.push(*mv);
            if let Some(piece) = self.pieces.remove(&mv.from) {
                self.pieces.insert(mv.to, piece);
            }
            self.turn = self.turn.opponent();
            self.fen = self.fen_after_move.clone();
            self.outcome = self.outcome_after_move;
            Ok(self.san.clone())
        }

        fn outcome(&self) -> GameOutcome {
            self.outcome
        }

        fn position_notation(&self) -> String {
            self.fen.clone()
        }

        fn load_position(&mut self, fen: &str) -> Result<(), BoardError> {
            if fen.is_empty() || fen == "bad" {
                return Err(BoardError::MalformedPosition {
                    fen: fen.to_string(),
                    reason: "unparsable".to_string(),
                });
            }
            self.fen = fen.to_string();
            Ok(())
        }

        fn eligible_draws(&self) -> Vec<DrawKind> {
            self.draws.clone()
        }

        fn claim_draw(&mut self, kind: DrawKind) -> Result<(), BoardError> {
            if !self.draws.contains(&kind) {
                return Err(BoardError::DrawNotEligible(kind));
            }
            self.outcome = GameOutcome::Draw;
            Ok(())
        }
    }
}
