//! Board: the fixed grid of locked cells.
//!
//! The board is a 20x10 grid stored as a flat array for cache locality.
//! Coordinates are `(row, col)` with row 0 at the top. The collision predicate
//! here is the single gatekeeper for every position change: gravity steps,
//! horizontal moves, soft drops, and rotation all validate through it.

use arrayvec::ArrayVec;

use crate::piece::Shape;
use crate::types::{Cell, PieceKind, COLS, ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = ROWS * COLS;

/// The most rows a single lock can complete (a piece spans at most 4 rows).
pub const MAX_CLEARED_ROWS: usize = 4;

/// Fixed 20x10 grid of locked cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLS as i8 {
            return None;
        }
        Some((row as usize) * COLS + (col as usize))
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at `(row, col)`. Returns false when out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `(row, col)` holds a locked block.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Collision test for a shape anchored at `(row, col)`.
    ///
    /// True iff any occupied shape cell would breach the floor, breach either
    /// side wall, or land on an occupied board cell. No side effects. Cells
    /// above the top edge do not collide (pieces anchor at row 0 and only
    /// ever move down).
    pub fn collides(&self, shape: &Shape, row: i8, col: i8) -> bool {
        for (r, c) in shape.occupied() {
            let br = row + r as i8;
            let bc = col + c as i8;
            if br >= ROWS as i8 || bc < 0 || bc >= COLS as i8 {
                return true;
            }
            if self.is_occupied(br, bc) {
                return true;
            }
        }
        false
    }

    /// Write a shape's occupied cells into the board as `kind`.
    ///
    /// Callers have already established this anchor as the final resting
    /// position, so cells are written unconditionally (an overlapping spawn
    /// locks over existing blocks, as the game has no top-out state).
    pub fn lock(&mut self, shape: &Shape, row: i8, col: i8, kind: PieceKind) {
        for (r, c) in shape.occupied() {
            self.set(row + r as i8, col + c as i8, Some(kind));
        }
    }

    /// Whether every cell in `row` is occupied.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLS;
        self.cells[start..start + COLS].iter().all(|c| c.is_some())
    }

    /// Remove `row` and insert a fresh empty row at the top.
    ///
    /// Rows above shift down by one; rows below keep their indices.
    fn remove_row(&mut self, row: usize) {
        for r in (1..=row).rev() {
            let src = (r - 1) * COLS;
            let dst = r * COLS;
            self.cells.copy_within(src..src + COLS, dst);
        }
        for cell in &mut self.cells[..COLS] {
            *cell = None;
        }
    }

    /// Clear every full row in one pass, top to bottom.
    ///
    /// Returns the indices of the cleared rows in scan order. Removing a row
    /// only shifts the rows above it, so indices of still-unscanned rows are
    /// stable and a single top-down scan catches every full row, including
    /// adjacent ones.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        for row in 0..ROWS {
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Flat view of all cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
