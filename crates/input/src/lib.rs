//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Input is
//! discrete: one key press produces at most one action, with no auto-repeat
//! handling of its own (terminal key repeat still arrives as fresh presses).

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
