//! Piece shapes and rotation.
//!
//! A shape is a small 2-D boolean matrix of occupied cells. The seven template
//! matrices are fixed; rotation produces a new matrix by transposing and then
//! reversing row order, so four rotations return the original matrix.

use crate::types::PieceKind;

/// Largest matrix dimension any shape can reach (the I bar, rotated).
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece, with explicit logical dimensions.
///
/// Storage is a fixed 4x4 grid so shapes are `Copy` and rotation never
/// allocates; only cells inside `height x width` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: usize,
    height: usize,
}

impl Shape {
    /// Build a shape from literal 0/1 rows. All rows must share one length.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(height <= MAX_SHAPE_DIM && width <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == width));

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// The immutable template matrix for a piece kind.
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::L => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        }
    }

    /// Width of the matrix in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the matrix in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the matrix cell at `(row, col)` is occupied.
    ///
    /// Out-of-range coordinates read as unoccupied.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row][col]
    }

    /// Iterate the `(row, col)` coordinates of every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |r| (0..self.width).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }

    /// The matrix rotated a quarter turn: transpose, then reverse row order.
    ///
    /// The result swaps width and height. The original shape is untouched, so
    /// callers can validate the candidate and discard it on collision.
    pub fn rotated(&self) -> Self {
        let mut out = Self {
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
            width: self.height,
            height: self.width,
        };
        for r in 0..out.height {
            for c in 0..out.width {
                out.cells[r][c] = self.cells[c][self.width - 1 - r];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_dimensions() {
        assert_eq!(Shape::template(PieceKind::I).width(), 4);
        assert_eq!(Shape::template(PieceKind::I).height(), 1);
        assert_eq!(Shape::template(PieceKind::O).width(), 2);
        assert_eq!(Shape::template(PieceKind::O).height(), 2);
        for kind in [PieceKind::Z, PieceKind::S, PieceKind::L, PieceKind::J, PieceKind::T] {
            let shape = Shape::template(kind);
            assert_eq!(shape.width(), 3);
            assert_eq!(shape.height(), 2);
        }
    }

    #[test]
    fn every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::template(kind).occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = Shape::template(PieceKind::I);
        let r = i.rotated();
        assert_eq!((r.width(), r.height()), (1, 4));
    }

    #[test]
    fn rotation_of_l_matches_transpose_reverse() {
        // L = [[1,0,0],[1,1,1]]; transpose then reverse rows = [[0,1],[0,1],[1,1]].
        let r = Shape::template(PieceKind::L).rotated();
        assert!(!r.is_set(0, 0) && r.is_set(0, 1));
        assert!(!r.is_set(1, 0) && r.is_set(1, 1));
        assert!(r.is_set(2, 0) && r.is_set(2, 1));
    }

    #[test]
    fn four_rotations_return_the_original() {
        for kind in PieceKind::ALL {
            let shape = Shape::template(kind);
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(shape, back, "{:?}", kind);
        }
    }

    #[test]
    fn o_rotation_is_identity() {
        let o = Shape::template(PieceKind::O);
        assert_eq!(o.rotated(), o);
    }
}
