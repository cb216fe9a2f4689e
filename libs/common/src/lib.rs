//! Shared infrastructure for DevForge tools
//!
//! Keeps the pieces every tool needs but no tool owns: tracing setup and
//! small display-formatting helpers for the CLI.

pub mod format;
pub mod logging;

pub use format::{group_bits, group_hex};
pub use logging::init_logging;
