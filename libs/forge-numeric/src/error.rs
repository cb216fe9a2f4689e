//! Error types for forge-numeric

use errors::{ErrorCategory, ForgeErrorTrait};
use thiserror::Error;

/// Conversion errors
///
/// Exactly two kinds: the literal did not match any recognized numeric
/// grammar, or the requested width is outside the supported set. Both are
/// recoverable - the caller re-prompts for corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: unsupported {mode} width {width} (supported: {supported})")]
    Config {
        mode: &'static str,
        width: u32,
        supported: &'static str,
    },
}

impl NumericError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn integer_width(width: u32) -> Self {
        Self::Config {
            mode: "integer",
            width,
            supported: "8, 16, 32, 64",
        }
    }

    pub fn float_width(width: u32) -> Self {
        Self::Config {
            mode: "float",
            width,
            supported: "32, 64",
        }
    }
}

impl ForgeErrorTrait for NumericError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) => ErrorCategory::Parse,
            Self::Config { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            NumericError::parse("bad").error_code(),
            "PARSE_ERROR"
        );
        assert_eq!(
            NumericError::integer_width(7).error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_config_message_names_supported_widths() {
        let msg = NumericError::float_width(16).to_string();
        assert!(msg.contains("float"));
        assert!(msg.contains("16"));
        assert!(msg.contains("32, 64"));
    }
}
