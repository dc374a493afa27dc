//! Terminal event polling

use std::time::Duration;

use calmcare_app::message::Message;
use calmcare_app::InputKey;
use calmcare_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Translate one terminal event; only key presses matter
pub fn translate(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Wait up to `tick_rate` for input; a timeout yields [`Message::Tick`]
pub fn poll(tick_rate: Duration) -> Result<Option<Message>> {
    if event::poll(tick_rate)? {
        Ok(translate(event::read()?))
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('n')));
    }

    #[test]
    fn test_arrow_keys() {
        for (code, expected) in [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
        ] {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_translate_ignores_release_and_resize() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
        assert_eq!(translate(Event::Resize(80, 24)), None);

        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            translate(Event::Key(press)),
            Some(Message::Key(InputKey::Enter))
        );
    }
}
