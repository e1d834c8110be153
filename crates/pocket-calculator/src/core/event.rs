//! Input events and output effects
//!
//! Front ends translate whatever their UI toolkit delivers into an
//! [`InputEvent`], hand it to [`Calculator::dispatch`](crate::core::Calculator::dispatch),
//! and apply the returned [`Effect`]s to their display surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult, Operator};

/// A single decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Every digit, in order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value.to_string()))
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(c.to_string()))
    }
}

impl FromStr for Digit {
    type Err = CalcError;

    /// Parses a `data-number` payload such as `"7"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CalcError::InvalidDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named keypad actions, matching the buttons' `data-action` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Reset everything
    Clear,
    /// Drop the last entered character
    Backspace,
    /// Divide the entry by 100
    Percent,
    /// Negate the entry
    PlusMinus,
    /// Insert a decimal point
    Decimal,
    /// Choose addition
    Add,
    /// Choose subtraction
    Subtract,
    /// Choose multiplication
    Multiply,
    /// Choose division
    Divide,
    /// Finish the pending operation
    Equals,
}

impl Action {
    /// Every action
    pub const ALL: [Self; 10] = [
        Self::Clear,
        Self::Backspace,
        Self::Percent,
        Self::PlusMinus,
        Self::Decimal,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equals,
    ];

    /// Returns the `data-action` name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::Percent => "percent",
            Self::PlusMinus => "plus-minus",
            Self::Decimal => "decimal",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Equals => "equals",
        }
    }

    /// Returns the operator this action selects, if it is an operator action
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Add => Some(Operator::Add),
            Self::Subtract => Some(Operator::Subtract),
            Self::Multiply => Some(Operator::Multiply),
            Self::Divide => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Self::Add,
            Operator::Subtract => Self::Subtract,
            Operator::Multiply => Self::Multiply,
            Operator::Divide => Self::Divide,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| CalcError::UnknownAction(s.to_string()))
    }
}

/// A resolved instruction for the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter a digit
    Digit(Digit),
    /// Perform a named action
    Action(Action),
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// Input event delivered by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit button was activated
    Digit(Digit),
    /// A named action button was activated
    Action(Action),
    /// A key was pressed; the identifier follows `KeyboardEvent.key`
    Key(String),
}

impl InputEvent {
    /// Creates a key event
    #[must_use]
    pub fn key(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Digit(d) => Self::Digit(d),
            Command::Action(a) => Self::Action(a),
        }
    }
}

/// Output instruction for a display surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Replace the display text
    DisplayUpdate(String),
    /// Mark this operator active, or clear the mark
    HighlightUpdate(Option<Operator>),
}

/// Outcome of dispatching one input event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Effects to apply, in order
    pub effects: Vec<Effect>,
    /// Whether the platform's default handling of the event must be suppressed
    pub prevent_default: bool,
}

impl Dispatch {
    /// True when the event was not handled
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.effects.is_empty()
    }

    /// Returns the display text carried by this dispatch, if any
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        self.effects.iter().find_map(|e| match e {
            Effect::DisplayUpdate(text) => Some(text.as_str()),
            Effect::HighlightUpdate(_) => None,
        })
    }

    /// Returns the highlight change carried by this dispatch, if any
    #[must_use]
    pub fn highlight(&self) -> Option<Option<Operator>> {
        self.effects.iter().find_map(|e| match e {
            Effect::HighlightUpdate(op) => Some(*op),
            Effect::DisplayUpdate(_) => None,
        })
    }
}
