//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use runtime::Key;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the key to the active scene.
    Scene(Key),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into scene keys.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Up => KeyAction::Scene(Key::Up),
            KeyCode::Down => KeyAction::Scene(Key::Down),
            KeyCode::Enter => KeyAction::Scene(Key::Enter),
            KeyCode::Esc => KeyAction::Scene(Key::Esc),
            KeyCode::Backspace => KeyAction::Scene(Key::Backspace),
            KeyCode::Char(ch) => KeyAction::Scene(Key::Char(ch)),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::empty())
    }

    #[test]
    fn maps_navigation_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Up)), KeyAction::Scene(Key::Up));
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Scene(Key::Enter)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Scene(Key::Esc));
    }

    #[test]
    fn printable_chars_reach_scenes() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            KeyAction::Scene(Key::Char('Q'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('2'))),
            KeyAction::Scene(Key::Char('2'))
        );
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
    }
}
