//! Error types for forge-inspect

use errors::{ErrorCategory, ForgeErrorTrait};
use thiserror::Error;

/// Inspector errors
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Token error: {0}")]
    Token(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Regex error: {0}")]
    Pattern(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl InspectError {
    pub fn token(msg: impl Into<String>) -> Self {
        Self::Token(msg.into())
    }

    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }
}

impl From<serde_json::Error> for InspectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InspectError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<toml::de::Error> for InspectError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err.to_string())
    }
}

impl From<regex::Error> for InspectError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

impl ForgeErrorTrait for InspectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Token(_) => "TOKEN_ERROR",
            Self::Signing(_) => "SIGNING_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Toml(_) => "TOML_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Pattern(_) => "REGEX_ERROR",
            Self::Csv(_) => "CSV_ERROR",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Signing(_) | Self::Csv(_) => ErrorCategory::Internal,
            _ => ErrorCategory::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
