//! backend
//!
//! Native dialog backends.
//!
//! # Architecture
//!
//! Backends implement the [`DialogBackend`] trait:
//!
//! - [`OsaScriptBackend`]: macOS dialogs through `osascript` (default)
//! - [`ScriptedBackend`]: canned answers, for headless runs and tests
//!
//! [`present`] is the single entry point used by the CLI. It dispatches on
//! the request kind and checks the backend's answer against the request
//! before anything is reported to the caller.

mod factory;
pub mod osascript;
mod scripted;
mod traits;

pub use factory::{create_backend, BackendKind};
pub use osascript::OsaScriptBackend;
pub use scripted::ScriptedBackend;
pub use traits::{BackendError, DialogBackend};

use crate::core::request::Request;
use crate::core::result::{DialogOutcome, SelectionResult};

/// Present `request` on `backend` and validate the result.
///
/// # Errors
///
/// Propagates backend failures, and returns
/// [`BackendError::UnexpectedButton`], [`BackendError::UnexpectedSelection`]
/// or [`BackendError::UnexpectedMultipleSelection`] when the answer does not
/// fit the request.
pub fn present(backend: &dyn DialogBackend, request: &Request) -> Result<DialogOutcome, BackendError> {
    match request {
        Request::Message(req) => {
            let button = backend.present_message(req)?;
            let count = req.button_count();
            if button.index >= count {
                return Err(BackendError::UnexpectedButton {
                    index: button.index,
                    count,
                });
            }
            Ok(DialogOutcome::Message { button })
        }
        Request::Options(req) => {
            let (button, selection) = backend.present_options(req)?;
            if !(button.is_ok() || button.is_cancel()) {
                return Err(BackendError::UnexpectedButton {
                    index: button.index,
                    count: 2,
                });
            }
            if button.is_cancel() {
                return Ok(DialogOutcome::Options {
                    button,
                    selection: SelectionResult::default(),
                });
            }
            if let Some(&index) = selection.indices.iter().find(|&&i| i >= req.options.len()) {
                return Err(BackendError::UnexpectedSelection {
                    index,
                    len: req.options.len(),
                });
            }
            if !req.allow_multiple && selection.indices.len() > 1 {
                return Err(BackendError::UnexpectedMultipleSelection {
                    count: selection.indices.len(),
                });
            }
            Ok(DialogOutcome::Options { button, selection })
        }
    }
}
