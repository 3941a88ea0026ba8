//! backend::traits
//!
//! Dialog backend trait definition.
//!
//! # Design
//!
//! A backend shows one native modal and blocks the calling thread until it
//! is dismissed. There is no cancellation or timeout; the process presents
//! exactly one dialog and exits.
//!
//! Backends must report:
//! - the primary (Ok) activation as button `0`
//! - the secondary activation, escape, or closing as button `1`
//! - extra buttons as `2..` in declared order
//! - an empty selection whenever an options dialog is cancelled
//!
//! # Example
//!
//! ```
//! use hookdialog::backend::{DialogBackend, ScriptedBackend};
//! use hookdialog::core::request::MessageRequest;
//!
//! let backend = ScriptedBackend::new().with_button(1);
//! let button = backend.present_message(&MessageRequest::default()).unwrap();
//! assert!(button.is_cancel());
//! ```

use thiserror::Error;

use crate::core::request::{MessageRequest, OptionsRequest};
use crate::core::result::{ButtonResult, SelectionResult};

/// Errors from dialog backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend reported a button the dialog does not have.
    #[error("wrong button returned: {index} (dialog has {count} buttons)")]
    UnexpectedButton { index: usize, count: usize },

    /// The backend reported a row the list does not have.
    #[error("wrong option returned: {index} (list has {len} options)")]
    UnexpectedSelection { index: usize, len: usize },

    /// A single-choice list reported more than one row.
    #[error("{count} options returned for a single-choice list")]
    UnexpectedMultipleSelection { count: usize },

    /// The request cannot be shown by this backend.
    #[error("unsupported by {backend}: {message}")]
    Unsupported {
        backend: &'static str,
        message: String,
    },

    /// The backend could not be started.
    #[error("backend not available: {0}")]
    Unavailable(String),

    /// The backend ran but failed or produced unreadable output.
    #[error("backend failed: {0}")]
    Failed(String),
}

/// A native dialog presenter.
pub trait DialogBackend {
    /// Backend name as used in configuration.
    fn name(&self) -> &'static str;

    /// Show a message dialog and wait for a button.
    fn present_message(&self, req: &MessageRequest) -> Result<ButtonResult, BackendError>;

    /// Show an options dialog and wait for Ok or Cancel.
    fn present_options(
        &self,
        req: &OptionsRequest,
    ) -> Result<(ButtonResult, SelectionResult), BackendError>;
}
