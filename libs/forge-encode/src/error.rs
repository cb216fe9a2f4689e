//! Error types for forge-encode

use errors::{ErrorCategory, ForgeErrorTrait};
use thiserror::Error;

/// Encoding errors
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Base64 decode error: {0}")]
    Base64Decode(String),

    #[error("Decoded data is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("URL decode error: {0}")]
    UrlDecode(String),
}

impl EncodeError {
    pub fn base64(msg: impl Into<String>) -> Self {
        Self::Base64Decode(msg.into())
    }

    pub fn utf8(msg: impl Into<String>) -> Self {
        Self::Utf8(msg.into())
    }

    pub fn url(msg: impl Into<String>) -> Self {
        Self::UrlDecode(msg.into())
    }
}

impl ForgeErrorTrait for EncodeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Base64Decode(_) => "BASE64_DECODE_ERROR",
            Self::Utf8(_) => "UTF8_ERROR",
            Self::UrlDecode(_) => "URL_DECODE_ERROR",
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Parse
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
