//! Game state: board, active piece, score, and the gravity step.
//!
//! `Game` owns all mutable state; there are no process-wide globals. One tick
//! is one gravity step. Rejected moves and rotations are silent no-ops rather
//! than errors; that is intentional game feel, not an oversight.

use crate::board::Board;
use crate::piece::Shape;
use crate::render::{RenderSurface, ScoreSink};
use crate::rng::SimpleRng;
use crate::types::{GameAction, PieceKind, BLOCK_SIZE, COLS, ROWS, SCORE_PER_ROW};

/// The currently falling piece: shape matrix, color identifier, and the
/// `(row, col)` anchor of the matrix's top-left corner on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// A fresh piece of `kind` at the spawn anchor: row 0, centered
    /// horizontally (`cols/2 - width/2`).
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::template(kind);
        Self {
            kind,
            shape,
            row: 0,
            col: (COLS / 2 - shape.width() / 2) as i8,
        }
    }
}

/// Complete engine state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: ActivePiece,
    score: u32,
    rng: SimpleRng,
}

impl Game {
    /// Create a game with the first piece already spawned.
    ///
    /// The same seed reproduces the same piece sequence.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::spawn(random_kind(&mut rng));
        Self {
            board: Board::new(),
            active,
            score: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Mutable board access for setting up test scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with a uniformly random new one at spawn.
    ///
    /// Spawn does not collision-check: the game has no top-out state, so a
    /// blocked spawn simply overlaps until the next tick locks it in place.
    pub fn spawn_piece(&mut self) {
        self.active = ActivePiece::spawn(random_kind(&mut self.rng));
    }

    /// One gravity step.
    ///
    /// If the cell one row down collides, the piece locks where it is, full
    /// rows clear (10 points each), and a new piece spawns. Otherwise the
    /// piece falls one row.
    pub fn tick(&mut self) {
        if self
            .board
            .collides(&self.active.shape, self.active.row + 1, self.active.col)
        {
            self.lock_active();
            self.spawn_piece();
        } else {
            self.active.row += 1;
        }
    }

    fn lock_active(&mut self) {
        self.board.lock(
            &self.active.shape,
            self.active.row,
            self.active.col,
            self.active.kind,
        );
        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32 * SCORE_PER_ROW;
    }

    /// Move the active piece by `(d_col, d_row)` if the target is free.
    ///
    /// Returns whether the move was committed; a colliding move changes
    /// nothing.
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        let row = self.active.row + d_row;
        let col = self.active.col + d_col;
        if self.board.collides(&self.active.shape, row, col) {
            return false;
        }
        self.active.row = row;
        self.active.col = col;
        true
    }

    /// Rotate the active piece a quarter turn at its current anchor.
    ///
    /// No wall kicks: if the rotated matrix does not fit without
    /// repositioning, the original shape is kept and nothing changes.
    pub fn rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated();
        if self.board.collides(&rotated, self.active.row, self.active.col) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Apply an input action. Returns whether the board changed (callers use
    /// this to decide whether a redraw is needed).
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Redraw the whole scene and push the score to its sink.
    ///
    /// Draw order matters: clear, then locked cells, then the active piece on
    /// top. Pixel coordinates are `grid * BLOCK_SIZE`.
    pub fn render<O>(&self, out: &mut O)
    where
        O: RenderSurface + ScoreSink,
    {
        out.clear(COLS as u32 * BLOCK_SIZE, ROWS as u32 * BLOCK_SIZE);

        for row in 0..ROWS as i8 {
            for col in 0..COLS as i8 {
                if let Some(Some(kind)) = self.board.get(row, col) {
                    fill_block(out, row, col, kind);
                }
            }
        }

        for (r, c) in self.active.shape.occupied() {
            let row = self.active.row + r as i8;
            let col = self.active.col + c as i8;
            if row >= 0 && col >= 0 {
                fill_block(out, row, col, self.active.kind);
            }
        }

        out.show_score(self.score);
    }
}

fn fill_block<O: RenderSurface>(out: &mut O, row: i8, col: i8, kind: PieceKind) {
    out.fill_rect(
        col as u32 * BLOCK_SIZE,
        row as u32 * BLOCK_SIZE,
        BLOCK_SIZE,
        BLOCK_SIZE,
        kind.color(),
    );
}

fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}
