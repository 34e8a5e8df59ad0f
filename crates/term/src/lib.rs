//! Terminal rendering layer.
//!
//! Renders into a simple framebuffer of styled character cells and flushes it
//! to the terminal with crossterm. [`BoardView`] implements the engine's
//! pixel-space render surface and score sink; [`TerminalRenderer`] owns the
//! raw-mode/alternate-screen lifecycle and the actual output.

pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use surface::BoardView;
