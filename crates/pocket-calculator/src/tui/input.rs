//! Terminal key translation
//!
//! Crossterm key events become the same `KeyboardEvent.key` identifiers the
//! browser delivers, so the terminal shares the calculator's keymap.
//! `n` toggles the sign, which the browser keymap leaves to the ± button.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Action, Command};

/// What a terminal key press means to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward this key identifier to the calculator
    Key(String),
    /// Send a keypad command that has no browser key
    Command(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('n' | 'N') => KeyAction::Command(Command::Action(Action::PlusMinus)),
            KeyCode::Char(c) => KeyAction::Key(c.to_string()),
            KeyCode::Enter => KeyAction::Key("Enter".to_string()),
            KeyCode::Esc => KeyAction::Key("Escape".to_string()),
            KeyCode::Backspace => KeyAction::Key("Backspace".to_string()),
            _ => KeyAction::None,
        }
    }
}
