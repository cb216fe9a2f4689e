//! Aggregated error type for the hammer CLI
//!
//! Wraps every tool crate's error plus the CLI-only failure modes, and
//! funnels them through the shared capability trait for exit codes and
//! `--json` error payloads.

use errors::{ErrorCategory, ErrorInfo, ForgeErrorTrait};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HammerError {
    #[error(transparent)]
    Numeric(#[from] forge_numeric::NumericError),

    #[error(transparent)]
    Encode(#[from] forge_encode::EncodeError),

    #[error(transparent)]
    Gen(#[from] forge_gen::GenError),

    #[error(transparent)]
    Time(#[from] forge_time::TimeError),

    #[error(transparent)]
    Inspect(#[from] forge_inspect::InspectError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HammerError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Machine-readable payload for `--json` mode
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            Self::Numeric(e) => e.to_error_info(),
            Self::Encode(e) => e.to_error_info(),
            Self::Gen(e) => e.to_error_info(),
            Self::Time(e) => e.to_error_info(),
            Self::Inspect(e) => e.to_error_info(),
            Self::Io(e) => ErrorInfo::new("IO_ERROR", e.to_string()),
            Self::Serialization(e) => ErrorInfo::new("SERIALIZATION_ERROR", e.to_string()),
            Self::Config(msg) => ErrorInfo::new("CONFIG_ERROR", msg.clone()),
            Self::InvalidInput(msg) => ErrorInfo::new("INVALID_INPUT", msg.clone()),
            Self::Other(e) => ErrorInfo::new("UNKNOWN_ERROR", e.to_string()),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Numeric(e) => e.category(),
            Self::Encode(e) => e.category(),
            Self::Gen(e) => e.category(),
            Self::Time(e) => e.category(),
            Self::Inspect(e) => e.category(),
            Self::Io(_) => ErrorCategory::Io,
            Self::Serialization(_) | Self::Other(_) => ErrorCategory::Internal,
            Self::Config(_) => ErrorCategory::Config,
            Self::InvalidInput(_) => ErrorCategory::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, HammerError>;
