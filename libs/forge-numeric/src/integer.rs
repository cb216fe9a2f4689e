//! Fixed-width integer encoding
//!
//! Values are masked to the selected width (two's-complement wraparound,
//! the same thing assigning to a fixed-width register does) and rendered in
//! every output base the tool reports. Little-endian strings are byte-order
//! reversals of the big-endian byte sequence; bit order inside each byte
//! never changes.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};

/// Integer widths the encoder accepts
pub const INTEGER_WIDTHS: [u32; 4] = [8, 16, 32, 64];

/// Bit-level renderings of one fixed-width integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerBits {
    /// Selected width in bits
    pub width: u32,
    /// Whether `decimal` uses the two's-complement reading
    pub signed: bool,
    /// Width-bit binary string, most-significant bit first
    pub binary_be: String,
    /// Byte-swapped binary string (bit order within bytes preserved)
    pub binary_le: String,
    /// Lowercase hex of the big-endian byte sequence
    pub hex_be: String,
    /// Lowercase hex of the little-endian byte sequence
    pub hex_le: String,
    /// Octal rendering of the unsigned width-bit magnitude
    pub octal: String,
    /// Decimal value, signed or unsigned per `signed`
    pub decimal: String,
}

/// Encode an integer into its width-bit representations
///
/// Values outside the representable range are masked to `width` bits, not
/// rejected - the wraparound mirrors fixed-width assignment semantics.
///
/// # Examples
/// ```
/// use forge_numeric::encode_integer;
///
/// let bits = encode_integer(255, 8, false).unwrap();
/// assert_eq!(bits.binary_be, "11111111");
/// assert_eq!(bits.hex_be, "ff");
/// assert_eq!(bits.octal, "377");
/// assert_eq!(bits.decimal, "255");
///
/// let bits = encode_integer(-128, 8, true).unwrap();
/// assert_eq!(bits.binary_be, "10000000");
/// assert_eq!(bits.decimal, "-128");
///
/// assert!(encode_integer(1, 7, true).is_err());
/// ```
pub fn encode_integer(value: i128, width: u32, signed: bool) -> Result<IntegerBits> {
    if !INTEGER_WIDTHS.contains(&width) {
        return Err(NumericError::integer_width(width));
    }

    // The i128 -> u128 cast sign-extends, so the low `width` bits already
    // hold the two's-complement pattern of negative inputs.
    let mask = (1u128 << width) - 1;
    let magnitude = (value as u128) & mask;

    let bytes = to_be_byte_vec(magnitude, width);
    let mut le_bytes = bytes.clone();
    le_bytes.reverse();

    let decimal = if signed && (magnitude >> (width - 1)) & 1 == 1 {
        ((magnitude as i128) - (1i128 << width)).to_string()
    } else {
        magnitude.to_string()
    };

    Ok(IntegerBits {
        width,
        signed,
        binary_be: bits_of(&bytes),
        binary_le: bits_of(&le_bytes),
        hex_be: hex::encode(&bytes),
        hex_le: hex::encode(&le_bytes),
        octal: format!("{:o}", magnitude),
        decimal,
    })
}

/// Split a width-bit magnitude into its big-endian bytes
fn to_be_byte_vec(magnitude: u128, width: u32) -> Vec<u8> {
    let count = (width / 8) as usize;
    (0..count)
        .map(|i| (magnitude >> (8 * (count - 1 - i))) as u8)
        .collect()
}

/// Render bytes as a continuous bit string, MSB-first within each byte
fn bits_of(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        // Writing to a String buffer is infallible
        let _ = write!(&mut out, "{:08b}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_all_ones() {
        let bits = encode_integer(255, 8, false).unwrap();
        assert_eq!(bits.binary_be, "11111111");
        assert_eq!(bits.binary_le, "11111111");
        assert_eq!(bits.hex_be, "ff");
        assert_eq!(bits.octal, "377");
        assert_eq!(bits.decimal, "255");
    }

    #[test]
    fn test_i8_min() {
        let bits = encode_integer(-128, 8, true).unwrap();
        assert_eq!(bits.binary_be, "10000000");
        assert_eq!(bits.decimal, "-128");
    }

    #[test]
    fn test_minus_one_signed_every_width() {
        for width in INTEGER_WIDTHS {
            let bits = encode_integer(-1, width, true).unwrap();
            assert_eq!(bits.decimal, "-1", "width {}", width);
            assert_eq!(bits.binary_be.len() as u32, width);
            assert!(bits.binary_be.bytes().all(|b| b == b'1'));
        }
    }

    #[test]
    fn test_minus_one_unsigned_every_width() {
        for width in INTEGER_WIDTHS {
            let bits = encode_integer(-1, width, false).unwrap();
            let expected = ((1u128 << width) - 1).to_string();
            assert_eq!(bits.decimal, expected, "width {}", width);
        }
    }

    #[test]
    fn test_little_endian_is_byte_reversal() {
        let bits = encode_integer(0x1234_5678, 32, false).unwrap();
        assert_eq!(bits.binary_be, format!("{:032b}", 0x1234_5678_u32));
        assert_eq!(bits.hex_be, "12345678");
        assert_eq!(bits.hex_le, "78563412");
        assert_eq!(bits.binary_le, format!("{:032b}", 0x7856_3412_u32));
    }

    #[test]
    fn test_hex_be_reparses_to_same_bits() {
        for (value, width) in [(0i128, 8u32), (-1, 16), (0xDEAD, 32), (i64::MIN as i128, 64)] {
            let bits = encode_integer(value, width, true).unwrap();
            let decoded = hex::decode(&bits.hex_be).unwrap();
            assert_eq!(bits_of(&decoded), bits.binary_be);
        }
    }

    #[test]
    fn test_wraparound_masking() {
        // 256 does not fit in 8 bits; it wraps to 0
        let bits = encode_integer(256, 8, false).unwrap();
        assert_eq!(bits.binary_be, "00000000");
        assert_eq!(bits.decimal, "0");

        // 2^64 + 5 masks down to 5 at width 64
        let bits = encode_integer((1i128 << 64) + 5, 64, false).unwrap();
        assert_eq!(bits.decimal, "5");
    }

    #[test]
    fn test_signed_top_bit_interpretation() {
        // 0xFF signed at width 8 reads as -1, unsigned as 255
        let signed = encode_integer(0xFF, 8, true).unwrap();
        assert_eq!(signed.decimal, "-1");
        let unsigned = encode_integer(0xFF, 8, false).unwrap();
        assert_eq!(unsigned.decimal, "255");
    }

    #[test]
    fn test_octal_has_no_padding() {
        assert_eq!(encode_integer(8, 16, false).unwrap().octal, "10");
        assert_eq!(encode_integer(0, 8, false).unwrap().octal, "0");
    }

    #[test]
    fn test_unsupported_width() {
        assert!(matches!(
            encode_integer(1, 7, true),
            Err(NumericError::Config { .. })
        ));
        assert!(encode_integer(1, 0, false).is_err());
        assert!(encode_integer(1, 128, false).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = encode_integer(-40_000, 32, true).unwrap();
        let b = encode_integer(-40_000, 32, true).unwrap();
        assert_eq!(a, b);
    }
}
