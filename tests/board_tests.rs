//! Board and collision tests.

use tui_blockfall::core::{Board, Shape};
use tui_blockfall::types::{PieceKind, COLS, ROWS};

/// The collision predicate holds exactly when an occupied shape cell breaches
/// the floor, a side wall, or an occupied board cell. Sweep the O piece over
/// every anchor around all four edges of an empty board and compare against
/// the definition directly.
#[test]
fn collision_boundary_sweep() {
    let board = Board::new();
    let o = Shape::template(PieceKind::O);

    for row in -1..=ROWS as i8 {
        for col in -2..=COLS as i8 {
            // O occupies rows row..row+1, cols col..col+1. The top edge is
            // open; only floor and side breaches collide on an empty board.
            let expected = row + 1 >= ROWS as i8 || col < 0 || col + 1 >= COLS as i8;
            assert_eq!(
                board.collides(&o, row, col),
                expected,
                "anchor ({}, {})",
                row,
                col
            );
        }
    }
}

#[test]
fn collision_with_locked_cells() {
    let mut board = Board::new();
    board.set(10, 5, Some(PieceKind::Z));

    let o = Shape::template(PieceKind::O);
    // Every O anchor whose 2x2 footprint covers (10, 5) collides.
    for row in 9..=10 {
        for col in 4..=5 {
            assert!(board.collides(&o, row, col), "anchor ({}, {})", row, col);
        }
    }
    assert!(!board.collides(&o, 8, 4));
    assert!(!board.collides(&o, 9, 6));
}

#[test]
fn lock_then_clear_single_gap_row() {
    let mut board = Board::new();

    // Row 5 fully occupied except column 3.
    for col in 0..COLS as i8 {
        if col != 3 {
            board.set(5, col, Some(PieceKind::T));
        }
    }
    board.set(4, 0, Some(PieceKind::S)); // marker above

    // A vertical bar filling exactly column 3 through row 5.
    let bar = Shape::template(PieceKind::I).rotated();
    board.lock(&bar, 2, 3, PieceKind::I);
    assert!(board.is_row_full(5));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[5]);

    // A fresh empty row appeared at the top and everything above row 5
    // shifted down one; rows below are untouched.
    assert!((0..COLS as i8).all(|c| board.get(0, c) == Some(None)));
    assert_eq!(board.get(5, 0), Some(Some(PieceKind::S)));
    assert_eq!(board.get(5, 3), Some(Some(PieceKind::I)));
    assert_eq!(board.get(6, 3), Some(None));
}

#[test]
fn clear_pass_reruns_as_a_noop() {
    let mut board = Board::new();
    for col in 0..COLS as i8 {
        board.set(19, col, Some(PieceKind::L));
    }
    board.set(18, 2, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows().len(), 1);
    let settled = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, settled);
}

#[test]
fn four_full_rows_clear_together() {
    let mut board = Board::new();
    for row in 16..20 {
        for col in 0..COLS as i8 {
            board.set(row, col, Some(PieceKind::I));
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert!(board.cells().iter().all(|c| c.is_none()));
}
