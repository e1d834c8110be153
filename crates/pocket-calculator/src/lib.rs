//! Pocket Calculator - four-function keypad state machine
//!
//! The calculator keeps a current entry, a pending operand and a pending
//! operator, and turns button activations and key presses into display
//! updates. Operators chain strictly left to right with no precedence.
//!
//! Front ends live around the core:
//!
//! - [`wasm`]: keypad markup, a mock DOM, and (with the `wasm` feature) the
//!   `wasm-bindgen` entry point
//! - `tui` (default feature): crossterm key translation and rendering
//! - [`driver`]: surfaces, a generic session driver, and shared scenarios
//! - [`typing`]: the cancellable typewriter used by the page tooltip
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["7", "+", "3", "Enter"] {
//!     calc.dispatch(&InputEvent::key(key));
//! }
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero shows 0
//! let dispatch = calc.dispatch(&InputEvent::key("/"));
//! assert!(dispatch.prevent_default);
//! calc.dispatch(&InputEvent::key("0"));
//! calc.dispatch(&InputEvent::key("="));
//! assert_eq!(calc.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod typing;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end - always available for testing
/// (the mock DOM runs without browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, DisplayConfig, TypingConfig};
    pub use crate::core::{
        perform_calculation, Action, CalcError, CalcResult, Calculator, Command, Digit, Dispatch,
        Effect, InputEvent, Operator, Snapshot,
    };
    pub use crate::driver::{CalculatorDriver, DisplaySurface, SessionDriver, TextSurface};
    pub use crate::typing::{TaskHandle, TextTarget, Typewriter};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;

    pub use crate::wasm::{DomDriver, DomElement, DomEvent, Keypad, MockDom};
}
