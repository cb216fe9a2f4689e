//! URL percent-encoding
//!
//! Component-level encoding: everything outside the unreserved set is
//! escaped, so the output is safe inside a query value or path segment.

use crate::error::{EncodeError, Result};

/// Percent-encode a string
///
/// # Examples
/// ```
/// use forge_encode::url::encode;
///
/// assert_eq!(encode("a b&c"), "a%20b%26c");
/// ```
pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode percent-escapes back to a string
///
/// Fails when the decoded bytes are not valid UTF-8.
pub fn decode(text: &str) -> Result<String> {
    urlencoding::decode(text)
        .map(|s| s.into_owned())
        .map_err(|e| EncodeError::url(e.to_string()))
}
