//! core::request
//!
//! Strongly-typed dialog requests.
//!
//! # Types
//!
//! - [`Icon`] - Stock icon shown on the dock tile or inside the dialog
//! - [`DialogKind`] - Which dialog the first token selects
//! - [`MessageRequest`] - An alert with Ok/Cancel and optional extra buttons
//! - [`OptionsRequest`] - An alert with an attached selection list
//! - [`Request`] - Either of the two, as produced by [`crate::core::grammar::parse`]
//!
//! A request is built once per invocation and handed to the backend exactly
//! once. Nothing mutates it after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock dialog icon.
///
/// Unknown names fall back to [`Icon::Info`] instead of failing.
///
/// # Example
///
/// ```
/// use hookdialog::core::request::Icon;
///
/// assert_eq!(Icon::from_token("warning"), Icon::Warning);
/// assert_eq!(Icon::from_token("Warning"), Icon::Info);
/// assert_eq!(Icon::from_token("sparkles"), Icon::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Info,
    Error,
    Warning,
    Question,
}

impl Icon {
    /// Map a command-line token to an icon.
    pub fn from_token(token: &str) -> Self {
        match token {
            "error" => Icon::Error,
            "warning" => Icon::Warning,
            "question" => Icon::Question,
            _ => Icon::Info,
        }
    }

    /// The token this icon is spelled as on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Info => "info",
            Icon::Error => "error",
            Icon::Warning => "warning",
            Icon::Question => "question",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dialog kind selected by the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Message,
    Options,
}

impl DialogKind {
    /// Parse the kind token. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "message" => Some(DialogKind::Message),
            "options" => Some(DialogKind::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Message => "message",
            DialogKind::Options => "options",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by both dialog kinds, filled from the six positional tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Icon shown on the dock tile
    pub app_icon: Icon,
    /// Icon shown inside the dialog
    pub icon: Icon,
    pub title: String,
    pub body: String,
    pub ok_label: String,
    pub cancel_label: String,
    /// Requested width in points, if given and positive
    pub width: Option<u32>,
    /// Requested height in points, if given and positive
    pub height: Option<u32>,
}

/// A message dialog request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(flatten)]
    pub header: Header,
    /// Extra buttons after Ok/Cancel, in declared order.
    ///
    /// The first extra button reports index 2.
    pub extra_buttons: Vec<String>,
}

impl MessageRequest {
    /// Total number of buttons, including Ok and Cancel.
    pub fn button_count(&self) -> usize {
        2 + self.extra_buttons.len()
    }
}

/// An options (list selection) dialog request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRequest {
    #[serde(flatten)]
    pub header: Header,
    /// Rows of the list, in declared order
    pub options: Vec<String>,
    /// Row selected when the dialog opens
    pub default_index: usize,
    /// Whether more than one row may be selected
    pub allow_multiple: bool,
}

/// A validated dialog request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Request {
    Message(MessageRequest),
    Options(OptionsRequest),
}

impl Request {
    pub fn kind(&self) -> DialogKind {
        match self {
            Request::Message(_) => DialogKind::Message,
            Request::Options(_) => DialogKind::Options,
        }
    }

    pub fn header(&self) -> &Header {
        match self {
            Request::Message(m) => &m.header,
            Request::Options(o) => &o.header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_round_trip_through_display() {
        for icon in [Icon::Info, Icon::Error, Icon::Warning, Icon::Question] {
            assert_eq!(Icon::from_token(&icon.to_string()), icon);
        }
    }

    #[test]
    fn unknown_icon_falls_back_to_info() {
        assert_eq!(Icon::from_token(""), Icon::Info);
        assert_eq!(Icon::from_token("ERROR"), Icon::Info);
    }

    #[test]
    fn dialog_kind_is_case_sensitive() {
        assert_eq!(DialogKind::parse("message"), Some(DialogKind::Message));
        assert_eq!(DialogKind::parse("options"), Some(DialogKind::Options));
        assert_eq!(DialogKind::parse("Message"), None);
        assert_eq!(DialogKind::parse("entry"), None);
    }

    #[test]
    fn button_count_includes_ok_and_cancel() {
        let req = MessageRequest {
            extra_buttons: vec!["Skip".into(), "Retry".into()],
            ..Default::default()
        };
        assert_eq!(req.button_count(), 4);
    }

    #[test]
    fn request_serializes_with_kind_tag() {
        let req = Request::Options(OptionsRequest {
            options: vec!["a".into()],
            ..Default::default()
        });
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["kind"], "options");
        assert_eq!(json["appIcon"], "info");
        assert_eq!(json["defaultIndex"], 0);
        assert_eq!(json["allowMultiple"], false);
    }
}
