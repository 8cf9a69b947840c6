//! Input module - keyboard handling for flap and menu controls
//!
//! Raw crossterm key events are translated into semantic [`InputEvent`]s
//! here; nothing else in the crate looks at key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::InputEvent;

/// Map a keyboard event to a semantic input event.
///
/// Only `Press` events count; terminal auto-repeat and release events are
/// dropped so one physical press is one flap.
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char(' ') => Some(InputEvent::Flap),
        KeyCode::Up | KeyCode::Char('k') => Some(InputEvent::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(InputEvent::MenuDown),
        KeyCode::Enter => Some(InputEvent::MenuSelect),
        _ => None,
    }
}

/// Check if the key should quit unconditionally.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_key() {
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::Flap)
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::MenuUp)
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(InputEvent::MenuDown)
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Enter)),
            Some(InputEvent::MenuSelect)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_key(KeyEvent::from(KeyCode::Esc)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(translate_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(translate_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..KeyEvent::from(KeyCode::Char(' '))
        };
        assert_eq!(translate_key(release), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..KeyEvent::from(KeyCode::Char(' '))
        };
        assert_eq!(translate_key(repeat), None);
    }
}
