//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
///
/// ```toml
/// [defaults]
/// locale = "nb"
/// format = "json"
///
/// [output]
/// pretty_json = false
/// ```
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Defaults applied when a flag is omitted
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Command defaults
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Locale used when `--locale` is not given
    pub locale: String,

    /// Output format used when `--format` is not given
    pub format: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            locale: ucoll_api::config::DEFAULT_LOCALE.to_string(),
            format: "text".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Load settings if a path was given, else use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("loading CLI settings from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.defaults.locale, "root");
        assert_eq!(config.defaults.format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nlocale = \"nb\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.defaults.locale, "nb");
        assert_eq!(config.defaults.format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_section_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[performance]\nworker_threads = 4").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/ucoll.toml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
