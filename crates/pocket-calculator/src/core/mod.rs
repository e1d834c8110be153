//! Calculator core: state machine, arithmetic, formatting and input mapping
//!
//! Nothing in here knows about a UI toolkit. Front ends feed
//! [`InputEvent`]s in and apply [`Effect`]s out.

pub mod display;
mod error;
pub mod event;
pub mod keymap;
pub mod number;
mod operations;
pub mod state;

pub use error::{CalcError, CalcResult};
pub use event::{Action, Command, Digit, Dispatch, Effect, InputEvent};
pub use keymap::{key_binding, KeyBinding};
pub use operations::{perform_calculation, Operator};
pub use state::{Calculator, Snapshot};
