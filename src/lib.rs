//! hookdialog - Native confirmation and choice dialogs for hook scripts
//!
//! hookdialog is invoked by a host script, shows one modal dialog, and
//! reports the user's answer through its exit code and a single line on
//! stdout.
//!
//! # Architecture
//!
//! ```text
//! tokens → grammar → Request → backend → DialogOutcome → encode → (exit code, stdout)
//! ```
//!
//! - [`cli`] - Command-line interface layer (outer flags, top-level error handling)
//! - [`core`] - Request model, argument grammar, results, encoding, configuration
//! - [`backend`] - Native dialog presenters behind the `DialogBackend` trait
//! - [`ui`] - Diagnostics on stderr
//!
//! # Example
//!
//! ```
//! use hookdialog::backend::{present, ScriptedBackend};
//! use hookdialog::core::encode::encode;
//! use hookdialog::core::grammar::parse;
//!
//! let request = parse(&[
//!     "message", "info", "error", "T", "B", "Ok", "Cancel",
//!     "--extra-buttons", "2", "A", "B",
//! ])
//! .unwrap();
//!
//! let backend = ScriptedBackend::new().with_button(3);
//! let encoded = encode(&present(&backend, &request).unwrap());
//! assert_eq!(encoded.exit_code, 0);
//! assert_eq!(encoded.stdout.as_deref(), Some("3"));
//! ```

pub mod backend;
pub mod cli;
pub mod core;
pub mod ui;
