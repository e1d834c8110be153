//! Keyboard dispatch table
//!
//! Key identifiers follow the browser `KeyboardEvent.key` values
//! (`"7"`, `"Enter"`, `"Escape"`, ...). Front ends that are not browsers
//! translate into these identifiers first.

use crate::core::event::{Action, Command, Digit};

/// Result of looking up a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// What the key does
    pub command: Command,
    /// Whether the platform's default handling must be suppressed
    pub prevent_default: bool,
}

impl KeyBinding {
    const fn new(command: Command) -> Self {
        Self {
            command,
            prevent_default: false,
        }
    }
}

/// Maps a key identifier to a binding; unlisted keys are ignored
#[must_use]
pub fn key_binding(key: &str) -> Option<KeyBinding> {
    let command = match key {
        "." => Command::Action(Action::Decimal),
        "+" => Command::Action(Action::Add),
        "-" => Command::Action(Action::Subtract),
        "*" => Command::Action(Action::Multiply),
        // Browsers open quick-find on '/'
        "/" => {
            return Some(KeyBinding {
                command: Command::Action(Action::Divide),
                prevent_default: true,
            })
        }
        "Enter" | "=" => Command::Action(Action::Equals),
        "Escape" | "c" | "C" => Command::Action(Action::Clear),
        "Backspace" => Command::Action(Action::Backspace),
        "%" => Command::Action(Action::Percent),
        _ => return digit_key(key).map(|d| KeyBinding::new(Command::Digit(d))),
    };
    Some(KeyBinding::new(command))
}

fn digit_key(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::try_from(c).ok(),
        _ => None,
    }
}

/// Every key identifier the table recognizes
#[must_use]
pub fn bound_keys() -> Vec<&'static str> {
    vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "Enter", "=",
        "Escape", "c", "C", "Backspace", "%",
    ]
}
