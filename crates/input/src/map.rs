//! Key mapping from terminal events to game actions.
//!
//! Letter keys are matched case-insensitively, so Caps Lock does not change the layout.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game action.
///
/// Arrows, WASD and vi keys all work. Down drops the piece all the way; there is
/// no soft drop.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Up => GameAction::Rotate,
        KeyCode::Down => GameAction::HardDrop,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' | 'h' => GameAction::MoveLeft,
            'd' | 'l' => GameAction::MoveRight,
            'w' | 'k' => GameAction::Rotate,
            's' | 'j' => GameAction::HardDrop,
            'p' => GameAction::Pause,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// `q`, or Ctrl-C (raw mode swallows SIGINT).
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}

/// Only presses count; terminal auto-repeat and releases are ignored.
pub fn is_press(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_key_table() {
        let table = [
            (KeyCode::Left, GameAction::MoveLeft),
            (KeyCode::Char('a'), GameAction::MoveLeft),
            (KeyCode::Char('H'), GameAction::MoveLeft),
            (KeyCode::Right, GameAction::MoveRight),
            (KeyCode::Char('D'), GameAction::MoveRight),
            (KeyCode::Char('l'), GameAction::MoveRight),
            (KeyCode::Up, GameAction::Rotate),
            (KeyCode::Char('w'), GameAction::Rotate),
            (KeyCode::Char('K'), GameAction::Rotate),
            (KeyCode::Down, GameAction::HardDrop),
            (KeyCode::Char('s'), GameAction::HardDrop),
            (KeyCode::Char('j'), GameAction::HardDrop),
            (KeyCode::Char('P'), GameAction::Pause),
        ];
        for (code, action) in table {
            assert_eq!(handle_key_event(press(code)), Some(action), "{code:?}");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Char('c'),
            KeyCode::Char('z'),
            KeyCode::Enter,
            KeyCode::Esc,
        ] {
            assert_eq!(handle_key_event(press(code)), None, "{code:?}");
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Esc)));
    }

    #[test]
    fn test_only_presses_count() {
        assert!(is_press(press(KeyCode::Left)));

        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert!(!is_press(repeat));

        let release = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!is_press(release));
    }
}
