//! forge-numeric - Numeric/bit-level conversion engine for DevForge
//!
//! Converts a textual numeric literal into integer or IEEE-754 bit
//! representations across bases, widths and both byte orders.
//!
//! # Features
//!
//! - **Integer encoding**: two's-complement bit patterns at 8/16/32/64 bits,
//!   rendered as binary, hex (both byte orders), octal and decimal
//! - **Float encoding**: IEEE-754 binary32/binary64 patterns with the
//!   sign / exponent / mantissa decomposition
//! - **Literal parsing**: decimal, `0x` hex, `0b` binary, `0o` octal
//!
//! # Example
//!
//! ```rust
//! use forge_numeric::{convert_integer, ConversionResult};
//!
//! let result = convert_integer("0xFF", 8, false).unwrap();
//! match result {
//!     ConversionResult::Integer(bits) => {
//!         assert_eq!(bits.binary_be, "11111111");
//!         assert_eq!(bits.decimal, "255");
//!     }
//!     ConversionResult::Float(_) => unreachable!(),
//! }
//! ```
//!
//! Every conversion is a pure, synchronous computation: identical inputs
//! yield identical results, and nothing is retained between calls.

pub mod error;
pub mod float;
pub mod integer;
pub mod literal;

// Re-exports for convenience
pub use error::{NumericError, Result};
pub use float::{encode_float, FloatBits, FLOAT_WIDTHS};
pub use integer::{encode_integer, IntegerBits, INTEGER_WIDTHS};
pub use literal::{parse_float_literal, parse_integer_literal};

use serde::{Deserialize, Serialize};

/// Complete output of one conversion, integer or float
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ConversionResult {
    Integer(IntegerBits),
    Float(FloatBits),
}

/// Parse an integer literal and encode it at the selected width
///
/// Fails with [`NumericError::Parse`] on a malformed literal and
/// [`NumericError::Config`] on an unsupported width; there is no partial
/// result.
pub fn convert_integer(literal: &str, width: u32, signed: bool) -> Result<ConversionResult> {
    let value = parse_integer_literal(literal)?;
    tracing::debug!(literal, width, signed, "encoding integer literal");
    encode_integer(value, width, signed).map(ConversionResult::Integer)
}

/// Parse a float literal and encode it at the selected precision
pub fn convert_float(literal: &str, width: u32) -> Result<ConversionResult> {
    let value = parse_float_literal(literal)?;
    tracing::debug!(literal, width, "encoding float literal");
    encode_float(value, width).map(ConversionResult::Float)
}
