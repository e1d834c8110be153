//! Keypad layout for the browser front end
//!
//! Each button carries either a `data-number` or a `data-action`
//! attribute, the same contract the page markup uses, so a click can be
//! resolved from the element alone.
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ± ] [ 0 ] [ . ] [ = ]
//! ```

use super::dom::{DomElement, MockDom, BUTTONS_ID, OPERATOR_CLASS};
use crate::core::{Action, CalcError, CalcResult, Command, Digit, InputEvent};

/// Returns the keypad label for a command
#[must_use]
pub fn button_label(command: Command) -> String {
    match command {
        Command::Digit(d) => d.to_string(),
        Command::Action(action) => match action {
            Action::Clear => "C",
            Action::Backspace => "⌫",
            Action::Percent => "%",
            Action::PlusMinus => "±",
            Action::Decimal => ".",
            Action::Add => "+",
            Action::Subtract => "−",
            Action::Multiply => "×",
            Action::Divide => "÷",
            Action::Equals => "=",
        }
        .to_string(),
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// What the button sends
    pub command: Command,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        let id = match command {
            Command::Digit(d) => format!("btn-{d}"),
            Command::Action(a) => format!("btn-{}", a.name()),
        };
        Self {
            command,
            id,
            row,
            col,
        }
    }

    /// True for the four operator buttons
    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self.command, Command::Action(a) if a.as_operator().is_some())
    }

    /// Builds the button's DOM element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&button_label(self.command))
            .with_class("btn")
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col));
        elem = match self.command {
            Command::Digit(d) => elem.with_class("number").with_attr("data-number", &d.to_string()),
            Command::Action(a) => elem.with_attr("data-action", a.name()),
        };
        if self.is_operator() {
            elem = elem.with_class(OPERATOR_CLASS);
        }
        elem
    }
}

/// Keypad layout definition
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let grid: [[Command; 4]; 5] = [
            [
                action(Action::Clear),
                action(Action::Backspace),
                action(Action::Percent),
                action(Action::Divide),
            ],
            [digit(7), digit(8), digit(9), action(Action::Multiply)],
            [digit(4), digit(5), digit(6), action(Action::Subtract)],
            [digit(1), digit(2), digit(3), action(Action::Add)],
            [
                action(Action::PlusMinus),
                digit(0),
                action(Action::Decimal),
                action(Action::Equals),
            ],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, commands)| {
                commands
                    .iter()
                    .enumerate()
                    .map(move |(col, command)| KeypadButtonDef::new(*command, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolves a click on a button id
    pub fn handle_click(&self, element_id: &str) -> CalcResult<InputEvent> {
        self.find_button_by_id(element_id)
            .map(|btn| InputEvent::from(btn.command))
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))
    }

    /// Resolves a click from the element's data attributes
    ///
    /// Elements without either attribute (padding, the container itself)
    /// yield `Ok(None)`.
    pub fn event_for_element(element: &DomElement) -> CalcResult<Option<InputEvent>> {
        if let Some(number) = element.get_attr("data-number") {
            return Ok(Some(InputEvent::Digit(number.parse()?)));
        }
        if let Some(name) = element.get_attr("data-action") {
            return Ok(Some(InputEvent::Action(name.parse()?)));
        }
        Ok(None)
    }
}

const fn action(action: Action) -> Command {
    Command::Action(action)
}

const fn digit(d: usize) -> Command {
    Command::Digit(Digit::ALL[d])
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad buttons to the calculator DOM
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        for btn in keypad.buttons() {
            self.append_child(BUTTONS_ID, btn.to_element());
        }
    }
}
