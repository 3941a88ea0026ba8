//! cli
//!
//! Command-line interface layer for hookdialog.
//!
//! # Responsibilities
//!
//! - Parse the outer flags and load configuration
//! - Hand the remaining tokens to the grammar
//! - Construct the backend once and present exactly one dialog
//! - Print the encoded result and return the exit code
//!
//! # Errors
//!
//! Every failure is handled here, at the top. [`report`] prints one stderr
//! line: `Dialog error:` for grammar and backend failures, `Runtime error:`
//! for everything else (configuration, I/O). The process then exits with 1.

pub mod args;

pub use args::Cli;

use crate::backend::{create_backend, present, BackendKind};
use crate::core::config::Config;
use crate::core::encode::{encode, encode_json, EXIT_FAILURE};
use crate::core::grammar::{self, ParseOptions};
use crate::core::request::{Icon, Request};
use crate::core::DialogError;
use crate::ui::output::{self, Verbosity};
use anyhow::{Context, Result};

/// Run one dialog and return the process exit code.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<u8> {
    let loaded = Config::load(cli.config.as_deref()).context("cannot load configuration")?;
    let config = loaded.config;
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug || config.debug());
    match &loaded.path {
        Some(path) => output::debug(format!("config: {}", path.display()), verbosity),
        None => output::debug("config: defaults", verbosity),
    }

    let opts = ParseOptions {
        strict: cli.strict || config.strict(),
    };
    let request = grammar::parse_with(&cli.tokens, &opts).map_err(DialogError::from)?;
    output::debug(format!("request: {:?}", request), verbosity);

    let backend_name = cli.backend.as_deref().unwrap_or_else(|| config.backend());
    let backend = create_backend(backend_name, &config)?;
    output::debug(format!("backend: {}", backend.name()), verbosity);
    for field in ignored_fields(&request, backend.name()) {
        output::warn(format!("osascript dialogs ignore {}", field), verbosity);
    }

    let outcome = present(backend.as_ref(), &request).map_err(DialogError::from)?;
    output::debug(format!("outcome: {:?}", outcome), verbosity);

    let encoded = if cli.json || config.json() {
        encode_json(&outcome)?
    } else {
        encode(&outcome)
    };
    if let Some(line) = &encoded.stdout {
        println!("{}", line);
    }
    Ok(encoded.exit_code)
}

/// Request fields set by the caller that `backend_name` cannot show.
fn ignored_fields(request: &Request, backend_name: &str) -> Vec<&'static str> {
    if backend_name != BackendKind::OsaScript.name() {
        return Vec::new();
    }
    let header = request.header();
    let mut fields = Vec::new();
    if header.width.is_some() || header.height.is_some() {
        fields.push("--width and --height");
    }
    if header.app_icon != Icon::default() {
        fields.push("the app icon");
    }
    fields
}

/// Report a failure from [`run`] on stderr and return the exit code.
pub fn report(err: &anyhow::Error) -> u8 {
    let (category, message) = classify(err);
    output::error(category, message);
    EXIT_FAILURE
}

/// Split an error into its stderr category and message.
pub fn classify(err: &anyhow::Error) -> (&'static str, String) {
    match err.downcast_ref::<DialogError>() {
        Some(e) => ("Dialog error", format!("{}.", e)),
        None => ("Runtime error", format!("{:#}", err)),
    }
}
