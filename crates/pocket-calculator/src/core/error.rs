//! Error types for the calculator boundary
//!
//! State transitions never fail. Errors only arise where untyped input
//! (action names, button ids, digit payloads, configuration text) crosses
//! into the typed core.

use thiserror::Error;

/// Result type for calculator boundary operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Error)]
pub enum CalcError {
    /// Action name not recognized (e.g. a `data-action` value)
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Digit payload outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    /// No keypad button with this element id
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
