//! Shared constants and pure data types.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used from the core logic, the input mapper, and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn anchor**: row 0, horizontally centered per piece width
//!
//! # Timing
//!
//! Gravity advances on a fixed 500ms tick. There is no level progression and
//! no speed curve; the interval is constant for the lifetime of the process.

/// Board height in rows.
pub const ROWS: usize = 20;

/// Board width in columns.
pub const COLS: usize = 10;

/// Edge length of one board cell in render-surface pixels.
pub const BLOCK_SIZE: u32 = 30;

/// Gravity interval in milliseconds.
pub const TICK_MS: u64 = 500;

/// Points awarded per cleared row.
pub const SCORE_PER_ROW: u32 = 10;

/// 24-bit RGB color used by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece templates, in the order they are indexed for spawning.
///
/// Each kind carries a fixed display color:
/// - **I**: red, horizontal bar
/// - **Z**: blue, Z-shaped
/// - **S**: green, S-shaped (mirror of Z)
/// - **O**: yellow, 2x2 square
/// - **L**: cyan, L-shaped
/// - **J**: purple, J-shaped (mirror of L)
/// - **T**: orange, T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    O,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds, in spawn-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// The fixed display color paired with this template.
    pub const fn color(self) -> Color {
        match self {
            PieceKind::I => Color::new(255, 0, 0),
            PieceKind::Z => Color::new(0, 0, 255),
            PieceKind::S => Color::new(0, 128, 0),
            PieceKind::O => Color::new(255, 255, 0),
            PieceKind::L => Color::new(0, 255, 255),
            PieceKind::J => Color::new(128, 0, 128),
            PieceKind::T => Color::new(255, 165, 0),
        }
    }
}

/// A cell on the game board.
///
/// - `None`: empty
/// - `Some(PieceKind)`: locked block, carrying the color identifier of the
///   piece that locked there
pub type Cell = Option<PieceKind>;

/// Actions the engine accepts from the input mapper.
///
/// Every action goes through the same collision-checked mutation path; an
/// action that would collide is silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one column left.
    MoveLeft,
    /// Move the active piece one column right.
    MoveRight,
    /// Move the active piece one row down (single-step soft drop).
    SoftDrop,
    /// Rotate the active piece 90 degrees at its current anchor.
    Rotate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions() {
        assert_eq!(ROWS, 20);
        assert_eq!(COLS, 10);
        assert_eq!(BLOCK_SIZE, 30);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }
}
