//! Calculator configuration
//!
//! All fields have defaults matching the keypad widget, so an empty JSON
//! object (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::CalcResult;

/// Display formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum characters shown before truncating or switching to exponent form
    pub max_chars: usize,
    /// Magnitude at or above which long values switch to exponent form
    pub exponent_threshold: f64,
    /// Fraction digits in exponent form
    pub exponent_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_chars: 9,
            exponent_threshold: 1e9,
            exponent_digits: 2,
        }
    }
}

impl DisplayConfig {
    /// Create a new config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display width in characters
    #[must_use]
    pub const fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the exponent-form threshold
    #[must_use]
    pub fn with_exponent_threshold(mut self, threshold: f64) -> Self {
        self.exponent_threshold = threshold;
        self
    }

    /// Set the exponent-form fraction digits
    #[must_use]
    pub const fn with_exponent_digits(mut self, digits: usize) -> Self {
        self.exponent_digits = digits;
        self
    }
}

/// Typing-effect configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Milliseconds between characters
    pub interval_ms: u64,
    /// Greeting rendered by the contact tooltip
    pub greeting: String,
    /// Milliseconds between characters for the greeting
    pub greeting_interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            greeting: "Hey! This is the developer here".to_string(),
            greeting_interval_ms: 80,
        }
    }
}

impl TypingConfig {
    /// Default interval as a `Duration`
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Greeting interval as a `Duration`
    #[must_use]
    pub const fn greeting_interval(&self) -> Duration {
        Duration::from_millis(self.greeting_interval_ms)
    }

    /// Set the greeting text
    #[must_use]
    pub fn with_greeting(mut self, greeting: &str) -> Self {
        self.greeting = greeting.to_string();
        self
    }
}

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display formatting
    pub display: DisplayConfig,
    /// Typing effect
    pub typing: TypingConfig,
}

impl CalculatorConfig {
    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the display section
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Replace the typing section
    #[must_use]
    pub fn with_typing(mut self, typing: TypingConfig) -> Self {
        self.typing = typing;
        self
    }
}
