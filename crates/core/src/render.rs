//! Interfaces the engine draws through.
//!
//! The engine addresses the drawing surface in pixel space, computing
//! `grid coordinate * BLOCK_SIZE` itself; backends decide what a "pixel" maps
//! to (the terminal backend scales them down to character cells). Keeping
//! these as traits keeps the core free of I/O and lets tests record the exact
//! draw calls.

use crate::types::Color;

/// A drawing surface with canvas-style primitives, addressed in pixels.
pub trait RenderSurface {
    /// Wipe the full drawing area.
    fn clear(&mut self, width_px: u32, height_px: u32);

    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, x_px: u32, y_px: u32, w_px: u32, h_px: u32, color: Color);
}

/// A text sink showing the current score, updated after every redraw.
pub trait ScoreSink {
    fn show_score(&mut self, score: u32);
}
