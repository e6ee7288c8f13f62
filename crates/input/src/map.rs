//! Key mapping from terminal events to engine event kinds.

use crate::types::EventKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the event it stands for.
///
/// Unrecognised keys produce `None` and are dropped by the caller.
pub fn event_for_key(key: KeyEvent) -> Option<EventKind> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(EventKind::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') => Some(EventKind::ShiftLeft),
        KeyCode::Right | KeyCode::Char('k') | KeyCode::Char('K') => Some(EventKind::ShiftRight),

        // Drops
        KeyCode::Up | KeyCode::Char(' ') => Some(EventKind::HardDrop),
        KeyCode::Down => Some(EventKind::SoftDrop),

        // Rotation
        KeyCode::Char('x') | KeyCode::Char('X') => Some(EventKind::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(EventKind::RotateCcw),

        // Control
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(EventKind::Pause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(EventKind::NewGame),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(EventKind::Quit),

        _ => None,
    }
}
