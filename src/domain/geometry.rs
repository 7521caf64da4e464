//! Board geometry - pointer hit-testing and the inverse cell-to-pixel mapping.
//!
//! The board is drawn on a 9x9 grid of equal cells: the 8x8 playing area plus
//! a half-cell margin on every side for coordinates and the turn indicator.

use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Orientation};

/// Number of grid cells along one edge of the drawn board, margins included.
pub const GRID_CELLS: f32 = 9.0;

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel size and orientation of the drawn board.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardGeometry {
    pub length: f32,
    pub orientation: Orientation,
}

impl BoardGeometry {
    pub fn new(length: f32, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.length / GRID_CELLS
    }

    pub fn half_cell(&self) -> f32 {
        self.cell_size() / 2.0
    }

    /// Raw grid indices (column, row) under the pointer, margin removed.
    ///
    /// The half-cell margin is subtracted before dividing and flooring.
    fn raw_indices(&self, pointer: Point) -> (i32, i32) {
        let cell = self.cell_size();
        let half = self.half_cell();
        let col = ((pointer.x - half) / cell).floor();
        let row = ((pointer.y - half) / cell).floor();
        (clamp_index(col), clamp_index(row))
    }

    fn orient(&self, col: i32, row: i32) -> Cell {
        match self.orientation {
            Orientation::BlackAtTop => Cell::new(col, 7 - row),
            Orientation::BlackAtBottom => Cell::new(7 - col, row),
        }
    }

    /// Resolve a pointer position to a board cell, or `None` when it falls
    /// outside the playing area.
    pub fn resolve(&self, pointer: Point) -> Option<Cell> {
        let (col, row) = self.raw_indices(pointer);
        let in_bounds = (0..8).contains(&col) && (0..8).contains(&row);
        in_bounds.then(|| self.orient(col, row))
    }

    /// Like `resolve`, but keeps off-board results instead of rejecting them.
    /// Used while a drag is in flight so the drop can still be rejected.
    pub fn resolve_unchecked(&self, pointer: Point) -> Cell {
        let (col, row) = self.raw_indices(pointer);
        self.orient(col, row)
    }

    /// Top-left pixel corner of a cell.
    pub fn cell_origin(&self, cell: Cell) -> Point {
        let cell_size = self.cell_size();
        let (col, row) = match self.orientation {
            Orientation::BlackAtTop => (cell.file, 7 - cell.rank),
            Orientation::BlackAtBottom => (7 - cell.file, cell.rank),
        };
        Point::new(
            self.half_cell() + col as f32 * cell_size,
            self.half_cell() + row as f32 * cell_size,
        )
    }

    /// Pixel center of a cell.
    pub fn cell_center(&self, cell: Cell) -> Point {
        let origin = self.cell_origin(cell);
        let half = self.half_cell();
        Point::new(origin.x + half, origin.y + half)
    }

    /// Top-left corner for the dragged piece image so it sits centered under
    /// the pointer.
    pub fn ghost_position(&self, pointer: Point) -> Point {
        let half = self.half_cell();
        Point::new(pointer.x - half, pointer.y - half)
    }
}

/// Anything past the grid collapses onto the margin (-1 or 8), so mirroring
/// an index can never overflow.
fn clamp_index(index: f32) -> i32 {
    if index.is_nan() {
        return -1;
    }
    index.clamp(-1.0, 8.0) as i32
}
