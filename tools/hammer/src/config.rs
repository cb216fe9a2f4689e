//! CLI configuration
//!
//! Layered the usual way: built-in defaults, then an optional YAML file,
//! then `HAMMER_*` environment variables. The file is looked up from
//! `--config`, `$HAMMER_CONFIG`, or `hammer.yaml` in the working
//! directory, first hit wins.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{HammerError, Result};

/// Defaults for `hammer gen password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordDefaults {
    pub length: usize,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
    pub quantity: usize,
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        Self {
            length: 16,
            symbols: false,
            exclude_ambiguous: true,
            quantity: 1,
        }
    }
}

/// Defaults for `hammer gen cron`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronDefaults {
    /// How many upcoming trigger times to preview
    pub upcoming: usize,
}

impl Default for CronDefaults {
    fn default() -> Self {
        Self { upcoming: 5 }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HammerConfig {
    #[serde(default)]
    pub password: PasswordDefaults,

    #[serde(default)]
    pub cron: CronDefaults,
}

/// Load configuration with the defaults -> file -> env layering
pub fn load(cli_path: Option<&Path>) -> Result<HammerConfig> {
    let mut figment = Figment::from(Serialized::defaults(HammerConfig::default()));

    if let Some(path) = resolve_path(cli_path) {
        if !path.exists() {
            return Err(HammerError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed("HAMMER_").split("__"))
        .extract()
        .map_err(|e| HammerError::config(e.to_string()))
}

fn resolve_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    if let Ok(env_path) = std::env::var("HAMMER_CONFIG") {
        return Some(PathBuf::from(env_path));
    }
    let default = PathBuf::from("hammer.yaml");
    default.exists().then_some(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HammerConfig::default();
        assert_eq!(config.password.length, 16);
        assert_eq!(config.password.quantity, 1);
        assert!(config.password.exclude_ambiguous);
        assert_eq!(config.cron.upcoming, 5);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.password.length, 16);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "password:\n  length: 24\n  symbols: true").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.password.length, 24);
        assert!(config.password.symbols);
        // Untouched sections keep their defaults
        assert_eq!(config.cron.upcoming, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/definitely/not/here.yaml");
        assert!(matches!(
            load(Some(missing)),
            Err(HammerError::Config(_))
        ));
    }
}
