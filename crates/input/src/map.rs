//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::handler::HeldKey;
use crate::types::GameAction;

/// Map a key press to a one-shot game action.
///
/// The arrow keys for movement map here too, but during play they are
/// normally routed through [`crate::HeldKeys`] instead.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCw),

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::HardDrop)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Keys that act while held rather than on press.
pub fn held_key(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Left => Some(HeldKey::Left),
        KeyCode::Right => Some(HeldKey::Right),
        KeyCode::Down => Some(HeldKey::Down),
        _ => None,
    }
}

/// Ctrl+C leaves from any screen.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
