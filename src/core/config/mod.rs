//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. `$HOOKDIALOG_BACKEND` (backend name only)
//! 4. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `--config <path>` if given (must exist)
//! 2. `$HOOKDIALOG_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/hookdialog/config.toml`
//! 4. `~/.hookdialog/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use hookdialog::core::config::Config;
//!
//! let config = Config::load(None).unwrap().config;
//! println!("Backend: {}", config.backend());
//! println!("JSON: {}", config.json());
//! ```

pub mod schema;

pub use schema::{FileConfig, ScriptedConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::backend::BackendKind;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "HOOKDIALOG_CONFIG";
/// Environment variable overriding the backend name.
pub const BACKEND_ENV: &str = "HOOKDIALOG_BACKEND";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file it came from, if any.
    pub path: Option<PathBuf>,
}

/// Effective configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: FileConfig,
    backend_override: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated, or if `explicit` names a file that does not exist.
    /// A missing default config file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let (file, path) = match explicit {
            Some(path) => (Self::read_config(path)?, Some(path.to_path_buf())),
            None => Self::load_default()?,
        };
        file.validate()?;

        let backend_override = std::env::var(BACKEND_ENV).ok().filter(|s| !s.is_empty());
        Self::from_parts(file, backend_override).map(|config| ConfigLoadResult { config, path })
    }

    /// Build a config from a parsed file and an optional backend override.
    pub fn from_parts(
        file: FileConfig,
        backend_override: Option<String>,
    ) -> Result<Config, ConfigError> {
        if let Some(name) = &backend_override {
            if BackendKind::parse(name).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid backend '{}' in ${}",
                    name, BACKEND_ENV
                )));
            }
        }
        Ok(Config {
            file,
            backend_override,
        })
    }

    fn load_default() -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((FileConfig::default(), None))
    }

    /// Default config locations, in search order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("hookdialog/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".hookdialog/config.toml"));
        }
        paths
    }

    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Backend name, defaulting to the native backend.
    pub fn backend(&self) -> &str {
        self.backend_override
            .as_deref()
            .or(self.file.backend.as_deref())
            .unwrap_or(BackendKind::OsaScript.name())
    }

    pub fn json(&self) -> bool {
        self.file.json.unwrap_or(false)
    }

    pub fn debug(&self) -> bool {
        self.file.debug.unwrap_or(false)
    }

    pub fn strict(&self) -> bool {
        self.file.strict.unwrap_or(false)
    }

    /// Scripted backend responses (defaults if not configured).
    pub fn scripted(&self) -> ScriptedConfig {
        self.file.scripted.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.backend(), "osascript");
        assert!(!config.json());
        assert!(!config.debug());
        assert!(!config.strict());
        assert_eq!(config.scripted(), ScriptedConfig::default());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let file = write_config("backend = \"scripted\"\njson = true\n");
        let result = Config::load(Some(file.path())).unwrap();
        assert_eq!(result.path.as_deref(), Some(file.path()));
        assert!(result.config.json());
        assert!(!result.config.strict());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("backend = [");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn invalid_value_is_rejected() {
        let file = write_config("backend = \"gtk\"");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn override_wins_over_file() {
        let file = FileConfig {
            backend: Some("osascript".to_string()),
            ..Default::default()
        };
        let config = Config::from_parts(file, Some("scripted".to_string())).unwrap();
        assert_eq!(config.backend(), "scripted");
    }

    #[test]
    fn invalid_override_is_rejected() {
        assert!(Config::from_parts(FileConfig::default(), Some("qt".to_string())).is_err());
    }
}
