//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the backend must name a known
//! backend and a scripted selection must not be empty when given.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::backend::BackendKind;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// backend = "osascript"
/// json = false
/// debug = false
/// strict = false
///
/// [scripted]
/// button = 0
/// selection = [0, 2]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Backend name (e.g., "osascript")
    pub backend: Option<String>,

    /// Print results as JSON
    pub json: Option<bool>,

    /// Enable debug diagnostics
    pub debug: Option<bool>,

    /// Reject unparsable numeric arguments
    pub strict: Option<bool>,

    /// Responses for the scripted backend
    pub scripted: Option<ScriptedConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(backend) = &self.backend {
            if BackendKind::parse(backend).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid backend '{}', must be one of: {}",
                    backend,
                    BackendKind::names().join(", ")
                )));
            }
        }

        if let Some(scripted) = &self.scripted {
            scripted.validate()?;
        }

        Ok(())
    }
}

/// Canned responses for the scripted backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptedConfig {
    /// Button index to report (default: 0, Ok)
    pub button: Option<usize>,

    /// Rows to report as selected for options dialogs
    /// (default: the request's default row)
    pub selection: Option<Vec<usize>>,
}

impl ScriptedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(selection) = &self.selection {
            if selection.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "scripted.selection cannot be empty; omit it instead".to_string(),
                ));
            }
        }
        Ok(())
    }
}
