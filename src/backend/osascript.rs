//! backend::osascript
//!
//! Native macOS dialogs through `osascript -l JavaScript`.
//!
//! # Design
//!
//! Each dialog is a small JXA script written to osascript's stdin. Request
//! data is embedded as JSON literals, so labels never need escaping by hand.
//!
//! - Message dialogs use `displayDialog` with the button list
//!   `[extra..., cancel, ok]`.
//! - Options dialogs use `chooseFromList`.
//!
//! osascript only reports the label of the pressed button or the chosen
//! rows. To recover indices without comparing label text, every button and
//! row is prefixed with a run of zero-width spaces (`U+200B`): Ok gets one,
//! the first extra button two, and so on; row `i` gets `i + 1`.
//!
//! Cancelling makes the script exit with [`CANCEL_STATUS`]. Only the
//! user-cancel error (`-128`) is caught; any other script error is rethrown,
//! osascript exits with 1 and the failure is reported with its stderr.
//!
//! `displayDialog` cannot show more than three buttons, so at most one
//! extra button is supported. Width, height and the dock icon are not
//! configurable through osascript and are ignored.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;

use super::traits::{BackendError, DialogBackend};
use crate::core::request::{Icon, MessageRequest, OptionsRequest};
use crate::core::result::{ButtonResult, SelectionResult};

const NAME: &str = "osascript";

/// Invisible marker used to tag buttons and rows.
const ID_PREFIX: char = '\u{200B}';

/// Separator between chosen rows in the script output.
const ROW_SEPARATOR: char = '\0';

/// Extra buttons `displayDialog` can fit next to Ok and Cancel.
const MAX_EXTRA_BUTTONS: usize = 1;

/// Exit status the generated scripts use for Cancel. osascript itself exits
/// with 1 on an uncaught script error.
pub const CANCEL_STATUS: i32 = 3;

/// `errorNumber` of the error thrown when the user cancels.
const USER_CANCELED: i32 = -128;

const ICON_DIR: &str = "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources";

/// Path of the system icon resource for `icon`.
pub fn icon_path(icon: Icon) -> String {
    let file = match icon {
        Icon::Info => "AlertNoteIcon.icns",
        Icon::Error => "AlertStopIcon.icns",
        Icon::Warning => "AlertCautionIcon.icns",
        Icon::Question => "GenericQuestionMarkIcon.icns",
    };
    format!("{}/{}", ICON_DIR, file)
}

/// Backend driving the system `osascript` binary.
#[derive(Debug, Clone)]
pub struct OsaScriptBackend {
    program: String,
}

impl Default for OsaScriptBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl OsaScriptBackend {
    pub fn new() -> Self {
        Self {
            program: "osascript".to_string(),
        }
    }

    /// Use a different executable in place of `osascript`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `script` and return its stdout, or `None` if it was cancelled.
    fn run(&self, script: &str) -> Result<Option<String>, BackendError> {
        let mut child = Command::new(&self.program)
            .args(["-l", "JavaScript"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BackendError::Unavailable(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(script.as_bytes())
                .map_err(|e| BackendError::Failed(format!("writing script: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| BackendError::Failed(e.to_string()))?;

        if output.status.success() {
            return Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()));
        }
        if output.status.code() == Some(CANCEL_STATUS) {
            return Ok(None);
        }
        Err(BackendError::Failed(format!(
            "{} exited with {}: {}",
            self.program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )))
    }
}

impl DialogBackend for OsaScriptBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn present_message(&self, req: &MessageRequest) -> Result<ButtonResult, BackendError> {
        let script = message_script(req)?;
        match self.run(&script)? {
            Some(out) => parse_button(&out, req.extra_buttons.len()),
            None => Ok(ButtonResult::cancel()),
        }
    }

    fn present_options(
        &self,
        req: &OptionsRequest,
    ) -> Result<(ButtonResult, SelectionResult), BackendError> {
        let script = options_script(req)?;
        match self.run(&script)? {
            Some(out) => Ok((ButtonResult::ok(), parse_rows(&out, req.options.len())?)),
            None => Ok((ButtonResult::cancel(), SelectionResult::default())),
        }
    }
}

fn tagged(level: usize, label: &str) -> String {
    let mut s: String = std::iter::repeat(ID_PREFIX).take(level).collect();
    s.push_str(label.trim_start_matches(ID_PREFIX));
    s
}

fn count_prefix(s: &str) -> usize {
    s.chars().take_while(|c| *c == ID_PREFIX).count()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DialogOpts {
    with_title: String,
    buttons: Vec<String>,
    /// 1-based
    cancel_button: usize,
    /// 1-based
    default_button: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOpts {
    with_title: String,
    with_prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    default_items: Vec<String>,
    ok_button_name: String,
    cancel_button_name: String,
    multiple_selections_allowed: bool,
    empty_selection_allowed: bool,
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, BackendError> {
    serde_json::to_string(value).map_err(|e| BackendError::Failed(e.to_string()))
}

/// Build the JXA script for a message dialog.
pub fn message_script(req: &MessageRequest) -> Result<String, BackendError> {
    if req.extra_buttons.len() > MAX_EXTRA_BUTTONS {
        return Err(BackendError::Unsupported {
            backend: NAME,
            message: format!(
                "at most {} extra button is supported, got {}",
                MAX_EXTRA_BUTTONS,
                req.extra_buttons.len()
            ),
        });
    }

    let mut buttons: Vec<String> = req
        .extra_buttons
        .iter()
        .enumerate()
        .map(|(i, label)| tagged(i + 2, label))
        .collect();
    buttons.push(req.header.cancel_label.clone());
    buttons.push(tagged(1, &req.header.ok_label));

    let opts = DialogOpts {
        with_title: req.header.title.clone(),
        cancel_button: buttons.len() - 1,
        default_button: buttons.len(),
        buttons,
    };

    Ok(format!(
        r#"ObjC.import("stdlib")

var app = Application.currentApplication()
app.includeStandardAdditions = true
app.activate()

var opts = {opts}
opts.withIcon = Path({icon})

try {{
    var res = app.displayDialog({text}, opts)
    res.buttonReturned
}} catch (e) {{
    if (e.errorNumber === {canceled}) $.exit({cancel})
    throw e
}}
"#,
        opts = json(&opts)?,
        icon = json(&icon_path(req.header.icon))?,
        text = json(&req.header.body)?,
        canceled = USER_CANCELED,
        cancel = CANCEL_STATUS,
    ))
}

/// Build the JXA script for an options dialog.
pub fn options_script(req: &OptionsRequest) -> Result<String, BackendError> {
    let items: Vec<String> = req
        .options
        .iter()
        .enumerate()
        .map(|(i, label)| tagged(i + 1, label))
        .collect();

    let opts = ListOpts {
        with_title: req.header.title.clone(),
        with_prompt: req.header.body.clone(),
        default_items: items
            .get(req.default_index)
            .cloned()
            .into_iter()
            .collect(),
        ok_button_name: req.header.ok_label.clone(),
        cancel_button_name: req.header.cancel_label.clone(),
        multiple_selections_allowed: req.allow_multiple,
        empty_selection_allowed: true,
    };

    Ok(format!(
        r#"ObjC.import("stdlib")

var app = Application.currentApplication()
app.includeStandardAdditions = true
app.activate()

var res
try {{
    res = app.chooseFromList({items}, {opts})
}} catch (e) {{
    if (e.errorNumber === {canceled}) $.exit({cancel})
    throw e
}}
if (!Array.isArray(res)) $.exit({cancel})
if (res.length != 0) res.join({sep})
"#,
        items = json(&items)?,
        opts = json(&opts)?,
        sep = json(&ROW_SEPARATOR.to_string())?,
        canceled = USER_CANCELED,
        cancel = CANCEL_STATUS,
    ))
}

/// Map the returned button label back to a button index.
pub fn parse_button(out: &str, extra_buttons: usize) -> Result<ButtonResult, BackendError> {
    let label = out.trim_end_matches(['\n', '\r']);
    match count_prefix(label) {
        0 => Err(BackendError::Failed(format!(
            "unrecognized button '{}'",
            label
        ))),
        1 => Ok(ButtonResult::ok()),
        n if n - 2 < extra_buttons => Ok(ButtonResult::extra(n - 2)),
        n => Err(BackendError::UnexpectedButton {
            index: n,
            count: 2 + extra_buttons,
        }),
    }
}

/// Map the returned row labels back to row indices.
pub fn parse_rows(out: &str, options: usize) -> Result<SelectionResult, BackendError> {
    let out = out.trim_end_matches(['\n', '\r']);
    if out.is_empty() {
        return Ok(SelectionResult::default());
    }

    let indices = out
        .split(ROW_SEPARATOR)
        .map(|row| match count_prefix(row) {
            0 => Err(BackendError::Failed(format!("unrecognized option '{}'", row))),
            n if n <= options => Ok(n - 1),
            n => Err(BackendError::UnexpectedSelection {
                index: n - 1,
                len: options,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SelectionResult::new(indices))
}
