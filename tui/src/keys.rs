//! Translation from crossterm key events to viewer keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flashdeck_core::Key;

/// Map a key event to a [`Key`] the viewer understands.
///
/// Chords with Ctrl or Alt are left to the application.
pub fn viewer_key(key: KeyEvent) -> Option<Key> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(viewer_key(key(KeyCode::Left)), Some(Key::Left));
        assert_eq!(viewer_key(key(KeyCode::Char(' '))), Some(Key::Space));
        assert_eq!(viewer_key(key(KeyCode::Char('R'))), Some(Key::Char('R')));
        assert_eq!(viewer_key(key(KeyCode::F(1))), None);
    }

    #[test]
    fn test_shift_tab_and_chords() {
        assert_eq!(
            viewer_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Key::BackTab)
        );
        assert_eq!(
            viewer_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
