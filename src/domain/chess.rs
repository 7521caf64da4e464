//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::{Color as SColor, File, Rank, Role, Square};

use crate::error::BoardError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.side) {
            (PieceKind::Pawn, Side::White) => "assets/pawn-white.svg",
            (PieceKind::Pawn, Side::Black) => "assets/pawn-black.svg",
            (PieceKind::Rook, Side::White) => "assets/rook-white.svg",
            (PieceKind::Rook, Side::Black) => "assets/rook-black.svg",
            (PieceKind::Knight, Side::White) => "assets/knight-white.svg",
            (PieceKind::Knight, Side::Black) => "assets/knight-black.svg",
            (PieceKind::Bishop, Side::White) => "assets/bishop-white.svg",
            (PieceKind::Bishop, Side::Black) => "assets/bishop-black.svg",
            (PieceKind::Queen, Side::White) => "assets/queen-white.svg",
            (PieceKind::Queen, Side::Black) => "assets/queen-black.svg",
            (PieceKind::King, Side::White) => "assets/king-white.svg",
            (PieceKind::King, Side::Black) => "assets/king-black.svg",
        }
    }
}

/// The pieces a pawn may promote to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// Chooser order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromotionPiece {
    type Error = BoardError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Queen => Ok(PromotionPiece::Queen),
            PieceKind::Rook => Ok(PromotionPiece::Rook),
            PieceKind::Bishop => Ok(PromotionPiece::Bishop),
            PieceKind::Knight => Ok(PromotionPiece::Knight),
            PieceKind::King | PieceKind::Pawn => Err(BoardError::InvalidPromotion(kind)),
        }
    }
}

/// The four chooser entries for `side`, with their image resources.
pub fn promotion_choices(side: Side) -> [(PromotionPiece, &'static str); 4] {
    PromotionPiece::ALL.map(|p| (p, Piece::new(p.kind(), side).svg_path()))
}

/// A board square as (file, rank), both 0..=7 on the board.
///
/// Coordinates outside 0..=7 are kept as they are, so a drag that left the
/// board can still be told apart from one that ended on it. `Cell::NONE` is
/// the "no cell" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub file: i32,
    pub rank: i32,
}

impl Cell {
    pub const NONE: Cell = Cell { file: -1, rank: -1 };

    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn is_on_board(&self) -> bool {
        (0..8).contains(&self.file) && (0..8).contains(&self.rank)
    }

    /// Convert to a shakmaty square, if the cell is on the board
    pub fn to_square(self) -> Option<Square> {
        if !self.is_on_board() {
            return None;
        }
        Some(Square::from_coords(
            File::new(self.file as u32),
            Rank::new(self.rank as u32),
        ))
    }

    pub fn from_square(sq: Square) -> Self {
        Self {
            file: sq.file() as i32,
            rank: sq.rank() as i32,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::NONE
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_square() {
            Some(sq) => write!(f, "{sq}"),
            None => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}

/// Which edge of the screen the black side sits on.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
pub enum Orientation {
    #[default]
    BlackAtTop,
    BlackAtBottom,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::BlackAtTop => Orientation::BlackAtBottom,
            Orientation::BlackAtBottom => Orientation::BlackAtTop,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DrawKind {
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawKind::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawKind::FiftyMoveRule => write!(f, "fifty-move rule"),
        }
    }
}

pub fn side_from_color(color: SColor) -> Side {
    match color {
        SColor::White => Side::White,
        SColor::Black => Side::Black,
    }
}

pub fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    Piece {
        kind: kind_from_role(piece.role),
        side: side_from_color(piece.color),
    }
}
