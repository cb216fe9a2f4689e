//! Base64 encoding and decoding
//!
//! Standard alphabet with padding. Works on raw bytes; the text helpers
//! layer a UTF-8 check on top so callers get a clean error instead of
//! replacement characters.

use base64::{engine::general_purpose, Engine as _};

use crate::error::{EncodeError, Result};

/// Encode bytes to a standard Base64 string
///
/// # Examples
/// ```
/// use forge_encode::base64::encode_bytes;
///
/// assert_eq!(encode_bytes(b"hello"), "aGVsbG8=");
/// ```
pub fn encode_bytes(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Decode a standard Base64 string to bytes
pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| EncodeError::base64(e.to_string()))
}

/// Encode UTF-8 text to Base64
pub fn encode_text(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Decode Base64 back to UTF-8 text
///
/// Fails on invalid Base64 and on payloads that are not valid UTF-8.
pub fn decode_text(text: &str) -> Result<String> {
    let bytes = decode_bytes(text)?;
    String::from_utf8(bytes).map_err(|e| EncodeError::utf8(e.to_string()))
}
