//! core
//!
//! Core domain types and operations for hookdialog.
//!
//! # Modules
//!
//! - [`request`] - Dialog request model
//! - [`grammar`] - Argument grammar producing requests
//! - [`result`] - Button and selection results
//! - [`encode`] - Exit code and stdout encoding
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Requests are validated once, at parse time
//! - Parsing is a pure function of the tokens
//! - Nothing here touches a window server

pub mod config;
pub mod encode;
pub mod grammar;
pub mod request;
pub mod result;

use thiserror::Error;

use crate::backend::BackendError;
use grammar::GrammarError;

/// Failure to produce a dialog result.
///
/// Both variants are reported as `Dialog error:` and exit with status 1.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
