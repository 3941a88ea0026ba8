//! ui
//!
//! User-facing diagnostics.
//!
//! # Modules
//!
//! - [`output`] - Verbosity and stderr messages

pub mod output;
