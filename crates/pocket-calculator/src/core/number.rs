//! Number parsing and rendering for the entry string
//!
//! The entry is kept as text, so every transition round-trips through these
//! two functions. Both follow browser number semantics: parsing takes the
//! longest numeric prefix, rendering uses shortest round-trip digits with
//! an exponent outside `[1e-6, 1e21)`.

/// Parses the longest leading numeric literal of `s`; NaN when there is none
#[must_use]
pub fn parse_numeric(s: &str) -> f64 {
    numeric_prefix(s.trim_start())
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Returns the longest prefix of `s` that forms a decimal literal
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return &s[..end + "Infinity".len()];
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Renders a number the way the entry string stores it
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        format!("{value}")
    } else {
        signed_exponent(&format!("{value:e}"))
    }
}

/// Renders `value` in exponential notation with a fixed number of fraction digits
#[must_use]
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }
    // Exact expansion: an f64 never needs more than 767 significant digits
    let exact = format!("{:.767e}", value.abs());
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exp.parse().unwrap_or(0);

    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let keep = (fraction_digits + 1).min(all.len());
    let mut digits = all[..keep].to_vec();
    // Ties go to the larger magnitude
    if all.get(keep).is_some_and(|&d| d >= b'5') && increment_digits(&mut digits) {
        digits[0] = b'1';
        exponent += 1;
    }

    let mut out = String::with_capacity(keep + 8);
    if value < 0.0 {
        out.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i == 1 {
            out.push('.');
        }
        out.push(char::from(d));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("e{sign}{}", exponent.unsigned_abs()));
    out
}

/// Adds one in the last place; returns true when the carry ran off the front
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// Rewrites Rust's `1.5e7` exponent form as `1.5e+7`
fn signed_exponent(rust_exp: &str) -> String {
    match rust_exp.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => rust_exp.to_string(),
    }
}
