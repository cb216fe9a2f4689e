//! forge-inspect - Inspectors for DevForge
//!
//! # Features
//!
//! - **JWT**: decode header/payload, verify HS256/HS512 signatures, sign
//!   JSON claims
//! - **JSON table**: array-of-objects to table with CSV export, tree view
//!   for everything else
//! - **TOML/YAML**: parse into a JSON tree for pretty display
//! - **Regex**: run a pattern with flags and report matches plus groups

pub mod error;
pub mod json;
pub mod jwt;
pub mod markup;
pub mod regex;

// Re-exports for convenience
pub use error::{InspectError, Result};
pub use json::JsonView;
pub use jwt::{DecodedToken, HsAlgorithm, Verification};
pub use self::regex::{MatchReport, RegexFlags};
