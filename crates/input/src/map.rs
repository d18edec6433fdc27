//! Key mapping from terminal events to maze actions.

use crate::types::{Direction, MazeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction bound to a key: arrows, WASD and HJKL.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Direction::North),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Direction::South),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Direction::West),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Direction::East),
        _ => None,
    }
}

/// Map keyboard input to maze actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MazeAction> {
    if let Some(dir) = direction_for_key(key.code) {
        return Some(MazeAction::Move(dir));
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MazeAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(MazeAction::Move(Direction::West))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(MazeAction::Move(Direction::East))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(MazeAction::Move(Direction::North))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(MazeAction::Move(Direction::South))
        );

        assert_eq!(direction_for_key(KeyCode::Char('W')), Some(Direction::North));
        assert_eq!(direction_for_key(KeyCode::Char('h')), Some(Direction::West));
        assert_eq!(direction_for_key(KeyCode::Char('J')), Some(Direction::South));
        assert_eq!(direction_for_key(KeyCode::Char('d')), Some(Direction::East));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(MazeAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
