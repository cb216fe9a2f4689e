//! Error types for forge-gen

use errors::{ErrorCategory, ForgeErrorTrait};
use thiserror::Error;

/// Generator errors
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("Invalid cron expression: {0}")]
    InvalidCron(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GenError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_namespace(msg: impl Into<String>) -> Self {
        Self::InvalidNamespace(msg.into())
    }

    pub fn invalid_cron(msg: impl Into<String>) -> Self {
        Self::InvalidCron(msg.into())
    }
}

impl From<serde_yaml::Error> for GenError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl ForgeErrorTrait for GenError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidNamespace(_) => "INVALID_NAMESPACE",
            Self::InvalidCron(_) => "INVALID_CRON",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCron(_) => ErrorCategory::Parse,
            Self::Serialization(_) => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
