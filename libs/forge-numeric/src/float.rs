//! IEEE-754 float encoding
//!
//! Encodes a value at binary32 or binary64 precision, renders the canonical
//! big-endian byte sequence (and its byte-order reversal), and splits the
//! pattern into sign / exponent / mantissa fields. The `decimal` field
//! reports the input value itself, not a reconstruction from the rounded
//! bit pattern.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};

/// Float widths the encoder accepts
pub const FLOAT_WIDTHS: [u32; 2] = [32, 64];

/// Bit-level renderings and field decomposition of one IEEE-754 value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatBits {
    /// Selected width in bits
    pub width: u32,
    /// Width-bit binary string, most-significant bit first
    pub binary_be: String,
    /// Byte-swapped binary string (bit order within bytes preserved)
    pub binary_le: String,
    /// Lowercase hex of the big-endian byte sequence
    pub hex_be: String,
    /// Lowercase hex of the little-endian byte sequence
    pub hex_le: String,
    /// Decimal rendering of the input value
    pub decimal: String,
    /// The single leading sign bit, `"0"` or `"1"`
    pub sign: String,
    /// Exponent field bits (8 for binary32, 11 for binary64)
    pub exponent: String,
    /// Unsigned integer value of the exponent field
    pub exponent_value: u32,
    /// Mantissa field bits (23 for binary32, 52 for binary64)
    pub mantissa: String,
}

/// Encode a float into its width-bit IEEE-754 representations
///
/// At width 32 the value is rounded to the nearest single-precision value
/// first; at width 64 the double is encoded exactly.
///
/// # Examples
/// ```
/// use forge_numeric::encode_float;
///
/// let bits = encode_float(1.0, 32).unwrap();
/// assert_eq!(bits.binary_be, "00111111100000000000000000000000");
/// assert_eq!(bits.sign, "0");
/// assert_eq!(bits.exponent_value, 127);
/// assert!(bits.mantissa.bytes().all(|b| b == b'0'));
///
/// assert!(encode_float(1.0, 16).is_err());
/// ```
pub fn encode_float(value: f64, width: u32) -> Result<FloatBits> {
    let (bytes, exponent_bits) = match width {
        32 => ((value as f32).to_be_bytes().to_vec(), 8usize),
        64 => (value.to_be_bytes().to_vec(), 11usize),
        _ => return Err(NumericError::float_width(width)),
    };

    let mut le_bytes = bytes.clone();
    le_bytes.reverse();

    let binary_be = bits_of(&bytes);
    let binary_le = bits_of(&le_bytes);

    let sign = binary_be[..1].to_string();
    let exponent = binary_be[1..1 + exponent_bits].to_string();
    let mantissa = binary_be[1 + exponent_bits..].to_string();
    let exponent_value = exponent
        .bytes()
        .fold(0u32, |acc, b| (acc << 1) | u32::from(b - b'0'));

    Ok(FloatBits {
        width,
        hex_be: hex::encode(&bytes),
        hex_le: hex::encode(&le_bytes),
        binary_be,
        binary_le,
        decimal: value.to_string(),
        sign,
        exponent,
        exponent_value,
        mantissa,
    })
}

fn bits_of(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        let _ = write!(&mut out, "{:08b}", byte);
    }
    out
}
