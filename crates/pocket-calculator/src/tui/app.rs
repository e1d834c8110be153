//! Terminal application state

use crossterm::event::KeyEvent;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use crate::config::DisplayConfig;
use crate::core::{CalcResult, Dispatch, InputEvent, Operator};
use crate::driver::{CalculatorDriver, SessionDriver, TextSurface};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    session: SessionDriver<TextSurface>,
    input: InputHandler,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_display_config(DisplayConfig::default())
    }

    /// Creates a calculator app with custom display formatting
    #[must_use]
    pub fn with_display_config(config: DisplayConfig) -> Self {
        Self {
            session: SessionDriver::with_display_config(config, TextSurface::default()),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The driven session
    #[must_use]
    pub fn session(&self) -> &SessionDriver<TextSurface> {
        &self.session
    }

    /// Handles a terminal key event
    ///
    /// Returns the calculator's dispatch for keys it was given, `None` for
    /// quit and ignored keys.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Option<Dispatch> {
        match self.input.handle_key(event) {
            KeyAction::Key(key) => Some(self.session.key_down(&key)),
            KeyAction::Command(command) => Some(self.session.dispatch(&InputEvent::from(command))),
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit();
                None
            }
            KeyAction::None => None,
        }
    }
}

impl CalculatorDriver for CalculatorApp {
    fn press_button(&mut self, id: &str) -> CalcResult<()> {
        self.session.press_button(id)
    }

    fn press_key(&mut self, key: &str) {
        self.session.press_key(key);
    }

    fn display(&self) -> String {
        self.session.display()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.session.active_operator()
    }
}
