//! Display formatting for the entry string

use crate::config::DisplayConfig;
use crate::core::number::{parse_numeric, to_exponential};

/// Formats the entry for a display `config.max_chars` characters wide
///
/// Long values of large magnitude switch to exponent form; everything else
/// that does not fit is truncated (not rounded).
#[must_use]
pub fn format_display(input: &str, config: &DisplayConfig) -> String {
    if input.chars().count() <= config.max_chars {
        return input.to_string();
    }

    let value = parse_numeric(input);
    if value.abs() >= config.exponent_threshold {
        to_exponential(value, config.exponent_digits)
    } else {
        input.chars().take(config.max_chars).collect()
    }
}
