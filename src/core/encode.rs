//! core::encode
//!
//! Translate a dialog outcome into an exit code and one line of stdout.
//!
//! # Exit policy
//!
//! | Outcome                     | Exit | Stdout                    |
//! |-----------------------------|------|---------------------------|
//! | message, Ok                 | 0    | `0`                       |
//! | message, Cancel             | 1    | nothing                   |
//! | message, extra button `i`   | 0    | `i` (global index, `>= 2`)|
//! | options, Ok                 | 0    | `2,0` (nothing if empty)  |
//! | options, Cancel             | 1    | nothing                   |
//!
//! In JSON mode the exit code is the same and stdout always carries the
//! JSON document, Cancel included.

use serde::Serialize;

use super::result::DialogOutcome;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Version of the JSON result document.
pub const JSON_VERSION: u32 = 1;

/// Exit code and stdout line for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub exit_code: u8,
    /// Line to print, without the trailing newline
    pub stdout: Option<String>,
}

impl Encoded {
    fn success(line: Option<String>) -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
            stdout: line,
        }
    }

    fn failure() -> Self {
        Self {
            exit_code: EXIT_FAILURE,
            stdout: None,
        }
    }
}

/// Encode an outcome as plain text.
pub fn encode(outcome: &DialogOutcome) -> Encoded {
    match outcome {
        DialogOutcome::Message { button } if button.is_cancel() => Encoded::failure(),
        DialogOutcome::Message { button } => Encoded::success(Some(button.index.to_string())),
        DialogOutcome::Options { button, selection } if button.is_ok() => {
            let line = (!selection.is_empty()).then(|| selection.to_string());
            Encoded::success(line)
        }
        DialogOutcome::Options { .. } => Encoded::failure(),
    }
}

#[derive(Serialize)]
struct JsonResult<'a> {
    version: u32,
    result: &'a DialogOutcome,
}

/// Encode an outcome as a JSON document.
pub fn encode_json(outcome: &DialogOutcome) -> Result<Encoded, serde_json::Error> {
    let doc = serde_json::to_string(&JsonResult {
        version: JSON_VERSION,
        result: outcome,
    })?;
    Ok(Encoded {
        exit_code: encode(outcome).exit_code,
        stdout: Some(doc),
    })
}
