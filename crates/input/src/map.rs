//! Key mapping from terminal events to engine actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an engine action.
///
/// The engine recognizes exactly four keys; everything else is ignored.
/// Actions are discrete and non-repeating: one key event, one action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        _ => None,
    }
}

/// Whether the key should quit the application.
///
/// Quitting is an application concern, not an engine action, so it sits
/// outside the four-key mapping above.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
