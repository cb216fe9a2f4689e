//! Unified error handling for DevForge tools
//!
//! Every tool crate keeps its own domain error type (e.g. `NumericError`,
//! `EncodeError`) and gains a common outward-facing interface by implementing
//! [`ForgeErrorTrait`]. The CLI uses that interface for exit codes, log
//! levels and machine-readable error output.

use serde::{Deserialize, Serialize};

// ============================================================================
// ErrorInfo - machine-readable error payload
// ============================================================================

/// Standard error information emitted by the CLI in `--json` mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code, e.g. `PARSE_ERROR`
    pub code: String,
    /// Error message
    pub message: String,
    /// Detailed error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInfo {
    /// Create a new ErrorInfo with just a message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ============================================================================
// ForgeErrorTrait - architectural layer
// ============================================================================

/// Error category enum - used for classification and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input text did not match the expected grammar
    Parse,
    /// Unsupported option value (width, version, algorithm, ...)
    Config,
    /// Input was well-formed but semantically invalid
    Validation,
    /// File or stream access failed (CLI layer only)
    Io,
    /// Everything else
    Internal,
}

impl ErrorCategory {
    /// Process exit code associated with the category
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse | Self::Validation => 2,
            Self::Config => 3,
            Self::Io => 4,
            Self::Internal => 1,
        }
    }
}

/// DevForge error capability trait
///
/// Defines a unified interface that all tool error types implement. Each
/// crate keeps its domain-specific variants and maps them onto a stable
/// code and category here.
pub trait ForgeErrorTrait: std::error::Error + Send + Sync + 'static {
    /// Get error code (for logs and `--json` output)
    fn error_code(&self) -> &'static str;

    /// Get error category (for classification and exit codes)
    fn category(&self) -> ErrorCategory;

    /// Get log level (default implementation is category-based)
    fn log_level(&self) -> tracing::Level {
        use tracing::Level;
        match self.category() {
            ErrorCategory::Internal => Level::ERROR,
            ErrorCategory::Io => Level::WARN,
            // Bad user input is expected traffic for an interactive tool
            ErrorCategory::Parse | ErrorCategory::Config | ErrorCategory::Validation => Level::INFO,
        }
    }

    /// Convert to ErrorInfo for machine-readable output
    fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo::new(self.error_code(), self.to_string())
    }
}
