//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the update logic (and its tests) never touch crossterm types.

/// A single key press, as the application sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+n, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Zero-based sidebar slot for digit keys `1`-`9`
    pub fn nav_slot(self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_nav_slot_digits() {
        assert_eq!(InputKey::Char('1').nav_slot(), Some(0));
        assert_eq!(InputKey::Char('9').nav_slot(), Some(8));
        assert_eq!(InputKey::Char('0').nav_slot(), None);
        assert_eq!(InputKey::Char('a').nav_slot(), None);
        assert_eq!(InputKey::CharCtrl('1').nav_slot(), None);
    }

    #[test]
    fn test_input_key_debug() {
        let debug_str = format!("{:?}", InputKey::CharCtrl('c'));
        assert!(debug_str.contains("CharCtrl"));
    }
}
