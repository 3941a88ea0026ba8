//! backend::factory
//!
//! Backend selection and creation.
//!
//! # Design
//!
//! Callers use [`create_backend`] instead of naming a backend type, so the
//! CLI only ever holds a `Box<dyn DialogBackend>` constructed once at
//! startup and passed to the present call.

use super::osascript::OsaScriptBackend;
use super::scripted::ScriptedBackend;
use super::traits::DialogBackend;
use crate::core::config::{Config, ConfigError};

/// Supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Native macOS dialogs via `osascript`
    OsaScript,
    /// Canned responses, no window
    Scripted,
}

impl BackendKind {
    pub fn all() -> &'static [BackendKind] {
        &[BackendKind::OsaScript, BackendKind::Scripted]
    }

    /// Names of all backends, as used in configuration.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(BackendKind::name).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::OsaScript => "osascript",
            BackendKind::Scripted => "scripted",
        }
    }

    /// Parse a backend name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use hookdialog::backend::BackendKind;
    ///
    /// assert_eq!(BackendKind::parse("Scripted"), Some(BackendKind::Scripted));
    /// assert_eq!(BackendKind::parse("zenity"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "osascript" => Some(BackendKind::OsaScript),
            "scripted" => Some(BackendKind::Scripted),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Create the backend named `name`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown name.
pub fn create_backend(name: &str, config: &Config) -> Result<Box<dyn DialogBackend>, ConfigError> {
    let kind = BackendKind::parse(name).ok_or_else(|| {
        ConfigError::InvalidValue(format!(
            "invalid backend '{}', must be one of: {}",
            name,
            BackendKind::names().join(", ")
        ))
    })?;

    Ok(match kind {
        BackendKind::OsaScript => Box::new(OsaScriptBackend::new()),
        BackendKind::Scripted => Box::new(ScriptedBackend::from_config(&config.scripted())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in BackendKind::all() {
            assert_eq!(BackendKind::parse(kind.name()), Some(*kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(BackendKind::names(), ["osascript", "scripted"]);
    }

    #[test]
    fn creates_named_backend() {
        let config = Config::default();
        assert_eq!(create_backend("osascript", &config).unwrap().name(), "osascript");
        assert_eq!(create_backend("SCRIPTED", &config).unwrap().name(), "scripted");
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let err = create_backend("kdialog", &Config::default()).err().unwrap();
        assert!(err.to_string().contains("kdialog"));
    }
}
