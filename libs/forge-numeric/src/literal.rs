//! Numeric literal parsing
//!
//! Integer literals come in four shapes: plain decimal (optionally
//! negative), and `0x`/`0b`/`0o`-prefixed hex/binary/octal. Prefixed forms
//! never take a sign. Float literals are whatever `f64` accepts, minus the
//! non-finite values.

use crate::error::{NumericError, Result};

/// Parse an integer literal into a 128-bit value
///
/// 128 bits gives headroom over the widest supported encoding width (64),
/// so masking and shifting below never lose bits.
///
/// # Examples
/// ```
/// use forge_numeric::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("42").unwrap(), 42);
/// assert_eq!(parse_integer_literal("-1").unwrap(), -1);
/// assert_eq!(parse_integer_literal("0xFF").unwrap(), 255);
/// assert_eq!(parse_integer_literal("0b1010").unwrap(), 10);
/// assert_eq!(parse_integer_literal("0o377").unwrap(), 255);
/// assert!(parse_integer_literal("0xZZ").is_err());
/// ```
pub fn parse_integer_literal(text: &str) -> Result<i128> {
    let trimmed = text.trim();

    if let Some(radix) = prefix_radix(trimmed) {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return Err(NumericError::parse(format!(
                "integer literal '{}' has a prefix but no digits",
                trimmed
            )));
        }
        // u128 so the full 64-bit unsigned range (and beyond) survives the
        // parse; the cast keeps the low bits, which is all masking reads.
        return u128::from_str_radix(digits, radix)
            .map(|v| v as i128)
            .map_err(|_| {
                NumericError::parse(format!("invalid integer literal '{}'", trimmed))
            });
    }

    if is_decimal(trimmed) {
        return trimmed.parse::<i128>().map_err(|_| {
            NumericError::parse(format!("integer literal '{}' out of range", trimmed))
        });
    }

    Err(NumericError::parse(format!(
        "invalid integer literal '{}'",
        trimmed
    )))
}

/// Parse a float literal into an f64, rejecting non-finite values
///
/// # Examples
/// ```
/// use forge_numeric::parse_float_literal;
///
/// assert_eq!(parse_float_literal("3.14").unwrap(), 3.14);
/// assert_eq!(parse_float_literal("-2").unwrap(), -2.0);
/// assert!(parse_float_literal("NaN").is_err());
/// assert!(parse_float_literal("Infinity").is_err());
/// assert!(parse_float_literal("abc").is_err());
/// ```
pub fn parse_float_literal(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| NumericError::parse(format!("invalid float literal '{}'", trimmed)))?;

    if !value.is_finite() {
        return Err(NumericError::parse(format!(
            "float literal '{}' is not a finite value",
            trimmed
        )));
    }

    Ok(value)
}

fn prefix_radix(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    match bytes[1] {
        b'x' | b'X' => Some(16),
        b'b' | b'B' => Some(2),
        b'o' | b'O' => Some(8),
        _ => None,
    }
}

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
