//! forge-gen - Generators for DevForge
//!
//! # Features
//!
//! - **UUID**: random v4 plus name-based v3/v5 with RFC 4122 namespaces
//! - **Password**: CSPRNG generation with entropy and crack-time estimates
//! - **Cron**: build, validate, explain and preview 5-field expressions
//! - **Placeholder**: SVG placeholder images
//! - **Compose**: `docker run` command to docker-compose YAML

pub mod compose;
pub mod cron;
pub mod error;
pub mod password;
pub mod placeholder;
pub mod uuid;

// Re-exports for convenience
pub use error::{GenError, Result};
pub use password::{PasswordOptions, StrengthEstimate};
pub use placeholder::PlaceholderSpec;
