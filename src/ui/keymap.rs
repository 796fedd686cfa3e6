use crate::ui::Key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Maps a terminal key press to a logical key; unbound keys yield `None`.
pub fn key_for(code: &KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        // Ctrl-C delivered as ETX
        KeyCode::Char('\u{03}') => Some(Key::Quit),
        KeyCode::Char(ch) if modifiers.contains(KeyModifiers::CONTROL) => {
            matches!(ch, 'c' | 'C').then_some(Key::Quit)
        }
        KeyCode::Char('q') => Some(Key::Quit),
        KeyCode::Char('l') => Some(Key::Layout),
        KeyCode::Char('r') => Some(Key::Refresh),
        KeyCode::Char('o') => Some(Key::Open),
        _ => None,
    }
}

/// Footer hints, in display order.
pub const HELP: [(&str, &str); 8] = [
    ("↑/↓", "move"),
    ("←/→", "kind"),
    ("⏎", "select"),
    ("⇥", "switch"),
    ("r", "refresh"),
    ("o", "open"),
    ("l", "layout"),
    ("q", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_arrows_and_letters() {
        let none = KeyModifiers::NONE;
        assert_eq!(key_for(&KeyCode::Up, none), Some(Key::Up));
        assert_eq!(key_for(&KeyCode::Tab, none), Some(Key::Tab));
        assert_eq!(key_for(&KeyCode::Char('r'), none), Some(Key::Refresh));
        assert_eq!(key_for(&KeyCode::Char('o'), none), Some(Key::Open));
        assert_eq!(key_for(&KeyCode::Char('l'), none), Some(Key::Layout));
        assert_eq!(key_for(&KeyCode::Char('x'), none), None);
        assert_eq!(key_for(&KeyCode::Esc, none), None);
    }

    #[test]
    fn quit_bindings() {
        assert_eq!(key_for(&KeyCode::Char('q'), KeyModifiers::NONE), Some(Key::Quit));
        assert_eq!(
            key_for(&KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::Quit)
        );
        assert_eq!(key_for(&KeyCode::Char('\u{03}'), KeyModifiers::NONE), Some(Key::Quit));
        // ctrl+r is not refresh
        assert_eq!(key_for(&KeyCode::Char('r'), KeyModifiers::CONTROL), None);
    }
}
