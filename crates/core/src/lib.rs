//! Core game logic - pure, deterministic, and testable.
//!
//! This crate holds the whole game engine: board state, collision detection,
//! piece shapes and rotation, gravity, row clearing, and scoring. It has no
//! dependency on UI or I/O; the terminal layer drives it through the
//! [`render`] traits and the tick loop in the binary.
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid, the collision predicate, locking, row clearing
//! - [`piece`]: the 7 template matrices and quarter-turn rotation
//! - [`game`]: engine state, the gravity tick, input actions, drawing
//! - [`rng`]: seeded LCG for uniform random spawning
//! - [`render`]: the surface and score-sink traits backends implement
//!
//! # Game Rules
//!
//! Deliberately minimal, matching the original game:
//!
//! - Pieces spawn uniformly at random, anchored at row 0 and centered
//! - Gravity is one row per fixed tick; locking, clearing, and respawning
//!   happen within the tick that detects the collision
//! - 10 points per cleared row, nothing else scores
//! - Rotation has no wall kicks, moves have no auto-repeat, and rejected
//!   inputs are silent no-ops
//! - There is no game-over state; play continues indefinitely
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::Game;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = Game::new(12345);
//! game.apply(GameAction::MoveLeft);
//! game.tick(); // one gravity step
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod render;
pub mod rng;

pub use tui_blockfall_types as types;

pub use board::Board;
pub use game::{ActivePiece, Game};
pub use piece::Shape;
pub use render::{RenderSurface, ScoreSink};
pub use rng::SimpleRng;
