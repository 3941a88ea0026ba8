//! backend::scripted
//!
//! Scripted backend for deterministic, headless runs.
//!
//! # Design
//!
//! The scripted backend never opens a window. It answers every dialog with
//! a configured button and selection and records each request it was
//! given, so callers can assert on what would have been shown.
//!
//! With nothing configured it presses Ok and, for options dialogs, selects
//! the request's default row (or nothing when the list is empty).
//!
//! # Example
//!
//! ```
//! use hookdialog::backend::{DialogBackend, ScriptedBackend};
//! use hookdialog::core::request::OptionsRequest;
//!
//! let backend = ScriptedBackend::new().with_selection(vec![2, 0]);
//! let req = OptionsRequest {
//!     options: vec!["a".into(), "b".into(), "c".into()],
//!     allow_multiple: true,
//!     ..Default::default()
//! };
//! let (button, selection) = backend.present_options(&req).unwrap();
//! assert!(button.is_ok());
//! assert_eq!(selection.indices, [2, 0]);
//! assert_eq!(backend.presented().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use super::traits::{BackendError, DialogBackend};
use crate::core::config::ScriptedConfig;
use crate::core::request::{MessageRequest, OptionsRequest, Request};
use crate::core::result::{ButtonResult, SelectionResult};

/// Scripted backend.
///
/// Clones share the recorded requests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    button: Option<usize>,
    selection: Option<Vec<usize>>,
    fail_with: Option<BackendError>,
    presented: Arc<Mutex<Vec<Request>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[scripted]` config table.
    pub fn from_config(config: &ScriptedConfig) -> Self {
        Self {
            button: config.button,
            selection: config.selection.clone(),
            ..Self::default()
        }
    }

    /// Report this button index for every dialog.
    pub fn with_button(mut self, index: usize) -> Self {
        self.button = Some(index);
        self
    }

    /// Report these rows for options dialogs.
    pub fn with_selection(mut self, indices: Vec<usize>) -> Self {
        self.selection = Some(indices);
        self
    }

    /// Fail every present call with `err`.
    pub fn failing(mut self, err: BackendError) -> Self {
        self.fail_with = Some(err);
        self
    }

    /// Requests presented so far, in order.
    pub fn presented(&self) -> Vec<Request> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        // A poisoned log only means a test panicked mid-record.
        self.presented
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, request: Request) -> Result<ButtonResult, BackendError> {
        self.lock().push(request);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(ButtonResult {
                index: self.button.unwrap_or(0),
            }),
        }
    }
}

impl DialogBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn present_message(&self, req: &MessageRequest) -> Result<ButtonResult, BackendError> {
        self.record(Request::Message(req.clone()))
    }

    fn present_options(
        &self,
        req: &OptionsRequest,
    ) -> Result<(ButtonResult, SelectionResult), BackendError> {
        let button = self.record(Request::Options(req.clone()))?;
        if button.is_cancel() {
            return Ok((button, SelectionResult::default()));
        }

        let indices = match &self.selection {
            Some(indices) => indices.clone(),
            None if req.options.is_empty() => Vec::new(),
            None => vec![req.default_index],
        };
        Ok((button, SelectionResult::new(indices)))
    }
}
