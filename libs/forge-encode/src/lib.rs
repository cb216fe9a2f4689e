//! forge-encode - Text encodings for DevForge
//!
//! # Features
//!
//! - **Base64**: standard-alphabet encode/decode for bytes and UTF-8 text
//! - **URL**: component-level percent-encoding and decoding
//! - **Case**: identifier word splitting and every common case style

pub mod base64;
pub mod case;
pub mod error;
pub mod url;

// Re-exports for convenience
pub use case::{convert_all, split_words, CaseRendering};
pub use error::{EncodeError, Result};
