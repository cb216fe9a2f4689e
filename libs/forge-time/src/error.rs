//! Error types for forge-time

use errors::{ErrorCategory, ForgeErrorTrait};
use thiserror::Error;

/// Time tool errors
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl TimeError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}

impl ForgeErrorTrait for TimeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) => ErrorCategory::Parse,
            Self::OutOfRange(_) => ErrorCategory::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimeError>;
