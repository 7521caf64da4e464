//! Per-frame snapshot of everything the board view draws.

use crate::config::ArrowStyle;
use crate::domain::{
    Arrow, BoardGeometry, Cell, Orientation, Piece, Point, Side, last_move_arrow,
};
use crate::models::board::{Board, BoardState, GameEnd};
use crate::models::oracle::RulesOracle;

/// Highlight drawn under a cell while a piece is dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellHighlight {
    /// Cell the drag started from
    Origin,
    /// Cell currently under the pointer
    Target,
    /// Same file or rank as the target
    Cross,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardFrame {
    pub geometry: BoardGeometry,
    /// Indexed `[rank][file]`
    pieces: [[Option<Piece>; 8]; 8],
    highlights: [[Option<CellHighlight>; 8]; 8],
    /// Dragged piece and the top-left corner of its image
    pub ghost: Option<(Piece, Point)>,
    pub arrow: Option<Arrow>,
    pub turn: Side,
    pub orientation: Orientation,
    /// Side whose promotion chooser is open
    pub promotion: Option<Side>,
}

impl BoardFrame {
    pub fn capture<O: RulesOracle>(board: &Board<O>, board_length: f32, style: &ArrowStyle) -> Self {
        let orientation = board.orientation();
        let geometry = BoardGeometry::new(board_length, orientation);
        let oracle = board.oracle();

        let mut pieces = [[None; 8]; 8];
        if *board.state() != BoardState::GameOver(GameEnd::NotStarted) {
            for (rank, row) in pieces.iter_mut().enumerate() {
                for (file, slot) in row.iter_mut().enumerate() {
                    *slot = oracle.piece_at(Cell::new(file as i32, rank as i32));
                }
            }
        }

        let mut highlights = [[None; 8]; 8];
        let mut ghost = None;
        let mut promotion = None;
        match *board.state() {
            BoardState::Dragging(session) => {
                if let Some(slot) = slot_mut(&mut pieces, session.start) {
                    *slot = None;
                }
                ghost = Some((session.piece, session.ghost));
                fill_highlights(&mut highlights, session.start, session.end);
            }
            BoardState::PendingPromotion(pending) => promotion = Some(pending.side),
            BoardState::Idle | BoardState::GameOver(_) => {}
        }

        let arrow = board
            .last_move()
            .and_then(|(from, to)| last_move_arrow(&geometry, from, to, style));

        Self {
            geometry,
            pieces,
            highlights,
            ghost,
            arrow,
            turn: oracle.turn(),
            orientation,
            promotion,
        }
    }

    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        slot(&self.pieces, cell).flatten()
    }

    pub fn highlight_at(&self, cell: Cell) -> Option<CellHighlight> {
        slot(&self.highlights, cell).flatten()
    }
}

fn slot<T: Copy>(grid: &[[T; 8]; 8], cell: Cell) -> Option<T> {
    cell.is_on_board()
        .then(|| grid[cell.rank as usize][cell.file as usize])
}

fn slot_mut<T>(grid: &mut [[T; 8]; 8], cell: Cell) -> Option<&mut T> {
    if !cell.is_on_board() {
        return None;
    }
    Some(&mut grid[cell.rank as usize][cell.file as usize])
}

/// Target beats origin, origin beats the cross.
fn fill_highlights(grid: &mut [[Option<CellHighlight>; 8]; 8], start: Cell, end: Cell) {
    if end.is_on_board() {
        for i in 0..8 {
            for cell in [Cell::new(end.file, i), Cell::new(i, end.rank)] {
                if let Some(slot) = slot_mut(grid, cell) {
                    *slot = Some(CellHighlight::Cross);
                }
            }
        }
    }
    if let Some(slot) = slot_mut(grid, start) {
        *slot = Some(CellHighlight::Origin);
    }
    if let Some(slot) = slot_mut(grid, end) {
        *slot = Some(CellHighlight::Target);
    }
}
