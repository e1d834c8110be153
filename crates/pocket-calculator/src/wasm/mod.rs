//! Browser front end
//!
//! The keypad markup, a mock DOM that mirrors it, and a driver that runs
//! clicks and key presses through the calculator the way the page does.
//! The `wasm-bindgen` entry point is only built with the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, ACTIVE_CLASS, BUTTONS_ID, DISPLAY_ID, OPERATOR_CLASS,
};
pub use driver::DomDriver;
pub use keypad::{button_label, Keypad, KeypadButtonDef, MockDomKeypadExt};
