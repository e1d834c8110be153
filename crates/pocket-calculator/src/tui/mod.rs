//! Terminal front end
//!
//! Crossterm key events are translated to browser key identifiers and fed
//! through the same keymap and state machine as the page.

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, screen_lines};
