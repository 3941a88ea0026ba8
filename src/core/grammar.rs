//! core::grammar
//!
//! Argument grammar for dialog requests.
//!
//! # Grammar
//!
//! ```text
//! message <appIcon> <icon> <title> <body> <okLabel> <cancelLabel>
//!         [--width <int>] [--height <int>] [--extra-buttons <n> <name>...]
//!
//! options <appIcon> <icon> <title> <body> <okLabel> <cancelLabel>
//!         [--width <int>] [--height <int>]
//!         [--options <n> <name>... <defaultIndex> <true|false>]
//! ```
//!
//! The first token selects the dialog kind, the next six are positional
//! fields, and everything after is keyword arguments. Each keyword is
//! resolved against the table registered for the dialog kind and handed to
//! [`apply_keyword`], which returns the value to set and how many tokens it
//! consumed. The parser then advances past the keyword and its arguments.
//!
//! # Numbers
//!
//! By default unparsable numbers do not fail: `--width`/`--height` become
//! absent, array counts and `defaultIndex` become `0`. With
//! [`ParseOptions::strict`] they are reported as
//! [`GrammarError::InvalidNumber`]. A `defaultIndex` that parses but does
//! not select one of the options is always an error.
//!
//! A keyword given twice overwrites the earlier value.
//!
//! # Example
//!
//! ```
//! use hookdialog::core::grammar::parse;
//! use hookdialog::core::request::Request;
//!
//! let tokens = [
//!     "options", "info", "warning", "T", "B", "Ok", "Cancel",
//!     "--options", "3", "Option 1", "Option 2", "Option 3", "1", "false",
//! ];
//! let Request::Options(req) = parse(&tokens).unwrap() else {
//!     panic!("expected an options request");
//! };
//! assert_eq!(req.options, ["Option 1", "Option 2", "Option 3"]);
//! assert_eq!(req.default_index, 1);
//! assert!(!req.allow_multiple);
//! ```

use std::fmt;

use thiserror::Error;

use super::request::{DialogKind, Header, Icon, MessageRequest, OptionsRequest, Request};

/// Names of the positional fields, in token order.
pub const POSITIONAL_FIELDS: [&str; 6] = [
    "appIcon",
    "icon",
    "title",
    "body",
    "okLabel",
    "cancelLabel",
];

/// Errors from parsing the argument grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// The first token is not a known dialog kind.
    #[error("cannot show dialog type '{0}'")]
    UnknownDialogKind(String),

    /// Fewer tokens than the kind plus six positional fields.
    #[error("missing positional argument '{name}' at position {position}")]
    MissingPositionalArgument {
        /// Field name
        name: &'static str,
        /// Token position, the kind being position 0
        position: usize,
    },

    /// A keyword not registered for this dialog kind.
    #[error("argument '{keyword}' not handled for {kind} dialogs")]
    UnknownKeyword { keyword: String, kind: DialogKind },

    /// An array keyword declares more elements than there are tokens left.
    #[error("'{keyword}' expects {expected} more argument(s) but only {available} remain")]
    ArrayLengthMismatch {
        keyword: &'static str,
        expected: usize,
        available: usize,
    },

    /// A keyword appears as the last token with nothing to consume.
    #[error("'{keyword}' requires a value")]
    MissingKeywordValue { keyword: &'static str },

    /// An extra button with an empty label.
    #[error("empty label for extra button {index} is not allowed")]
    EmptyButtonLabel { index: usize },

    /// `defaultIndex` does not select one of the options.
    #[error("default option {index} is out of range for {len} option(s)")]
    DefaultIndexOutOfRange { index: i64, len: usize },

    /// A numeric argument failed to parse (strict mode only).
    #[error("'{keyword}' expects a number, got '{value}'")]
    InvalidNumber { keyword: &'static str, value: String },
}

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject unparsable numbers instead of falling back to defaults.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A keyword known to the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Width,
    Height,
    ExtraButtons,
    Options,
}

const MESSAGE_KEYWORDS: &[Keyword] = &[Keyword::Width, Keyword::Height, Keyword::ExtraButtons];
const OPTIONS_KEYWORDS: &[Keyword] = &[Keyword::Width, Keyword::Height, Keyword::Options];

impl Keyword {
    /// The literal token for this keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Width => "--width",
            Keyword::Height => "--height",
            Keyword::ExtraButtons => "--extra-buttons",
            Keyword::Options => "--options",
        }
    }

    /// Keywords accepted by a dialog kind.
    pub fn registered(kind: DialogKind) -> &'static [Keyword] {
        match kind {
            DialogKind::Message => MESSAGE_KEYWORDS,
            DialogKind::Options => OPTIONS_KEYWORDS,
        }
    }

    /// Exact, case-sensitive lookup in the table for `kind`.
    pub fn lookup(kind: DialogKind, token: &str) -> Option<Keyword> {
        Self::registered(kind)
            .iter()
            .copied()
            .find(|k| k.as_str() == token)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The field update produced by one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordValue {
    Width(Option<u32>),
    Height(Option<u32>),
    ExtraButtons(Vec<String>),
    Options {
        options: Vec<String>,
        default_index: usize,
        allow_multiple: bool,
    },
}

/// Evaluate `keyword` against the tokens that follow it.
///
/// Returns the value to set and the number of tokens consumed, not counting
/// the keyword itself.
pub fn apply_keyword<S: AsRef<str>>(
    keyword: Keyword,
    rest: &[S],
    opts: &ParseOptions,
) -> Result<(KeywordValue, usize), GrammarError> {
    let name = keyword.as_str();
    let first = rest
        .first()
        .map(AsRef::as_ref)
        .ok_or(GrammarError::MissingKeywordValue { keyword: name })?;

    match keyword {
        Keyword::Width => Ok((KeywordValue::Width(dimension(name, first, opts)?), 1)),
        Keyword::Height => Ok((KeywordValue::Height(dimension(name, first, opts)?), 1)),
        Keyword::ExtraButtons => {
            let buttons = array(name, rest, 0, opts)?;
            if let Some(index) = buttons.iter().position(String::is_empty) {
                return Err(GrammarError::EmptyButtonLabel { index });
            }
            let consumed = 1 + buttons.len();
            Ok((KeywordValue::ExtraButtons(buttons), consumed))
        }
        Keyword::Options => {
            let options = array(name, rest, 2, opts)?;
            let n = options.len();
            let default_index = default_index(name, rest[1 + n].as_ref(), n, opts)?;
            let allow_multiple = rest[2 + n].as_ref() == "true";
            Ok((
                KeywordValue::Options {
                    options,
                    default_index,
                    allow_multiple,
                },
                1 + n + 2,
            ))
        }
    }
}

/// Read `<n> <item>×n` from the front of `rest`, requiring `trailing` more
/// tokens after the items.
fn array<S: AsRef<str>>(
    keyword: &'static str,
    rest: &[S],
    trailing: usize,
    opts: &ParseOptions,
) -> Result<Vec<String>, GrammarError> {
    let n = count(keyword, rest[0].as_ref(), opts)?;
    let available = rest.len() - 1;
    // On overflow the declared count alone already exceeds what is left.
    let expected = n.checked_add(trailing).unwrap_or(n);
    if available < expected {
        return Err(GrammarError::ArrayLengthMismatch {
            keyword,
            expected,
            available,
        });
    }
    Ok(rest[1..=n].iter().map(|s| s.as_ref().to_string()).collect())
}

fn count(keyword: &'static str, token: &str, opts: &ParseOptions) -> Result<usize, GrammarError> {
    match token.parse::<usize>() {
        Ok(n) => Ok(n),
        Err(_) if opts.strict => Err(GrammarError::InvalidNumber {
            keyword,
            value: token.to_string(),
        }),
        Err(_) => Ok(0),
    }
}

/// Read `defaultIndex` for a list of `len` options.
///
/// Any integer parses, so a negative index is reported as out of range
/// rather than as a bad number. With no options there is nothing to select
/// and a negative index is stored as `0`.
fn default_index(
    keyword: &'static str,
    token: &str,
    len: usize,
    opts: &ParseOptions,
) -> Result<usize, GrammarError> {
    let index = match token.parse::<i64>() {
        Ok(i) => i,
        Err(_) if opts.strict => {
            return Err(GrammarError::InvalidNumber {
                keyword,
                value: token.to_string(),
            })
        }
        Err(_) => 0,
    };
    match usize::try_from(index) {
        Ok(i) if len == 0 || i < len => Ok(i),
        _ if len == 0 => Ok(0),
        _ => Err(GrammarError::DefaultIndexOutOfRange { index, len }),
    }
}

fn dimension(
    keyword: &'static str,
    token: &str,
    opts: &ParseOptions,
) -> Result<Option<u32>, GrammarError> {
    match token.parse::<u32>() {
        Ok(v) if v > 0 => Ok(Some(v)),
        _ if opts.strict => Err(GrammarError::InvalidNumber {
            keyword,
            value: token.to_string(),
        }),
        _ => Ok(None),
    }
}

/// Parse tokens with default (lenient) settings.
///
/// `tokens[0]` is the dialog kind; the program name must not be included.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Request, GrammarError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Parse tokens into a [`Request`].
pub fn parse_with<S: AsRef<str>>(tokens: &[S], opts: &ParseOptions) -> Result<Request, GrammarError> {
    let kind_token = tokens
        .first()
        .map(AsRef::as_ref)
        .ok_or(GrammarError::MissingPositionalArgument {
            name: "kind",
            position: 0,
        })?;
    let kind = DialogKind::parse(kind_token)
        .ok_or_else(|| GrammarError::UnknownDialogKind(kind_token.to_string()))?;

    let positional = &tokens[1..];
    if positional.len() < POSITIONAL_FIELDS.len() {
        return Err(GrammarError::MissingPositionalArgument {
            name: POSITIONAL_FIELDS[positional.len()],
            position: 1 + positional.len(),
        });
    }
    let field = |i: usize| positional[i].as_ref().to_string();

    let mut header = Header {
        app_icon: Icon::from_token(positional[0].as_ref()),
        icon: Icon::from_token(positional[1].as_ref()),
        title: field(2),
        body: field(3),
        ok_label: field(4),
        cancel_label: field(5),
        width: None,
        height: None,
    };
    let mut extra_buttons = Vec::new();
    let mut options = Vec::new();
    let mut default_index = 0;
    let mut allow_multiple = false;

    let keywords = &positional[POSITIONAL_FIELDS.len()..];
    let mut idx = 0;
    while idx < keywords.len() {
        let token = keywords[idx].as_ref();
        let keyword = Keyword::lookup(kind, token).ok_or_else(|| GrammarError::UnknownKeyword {
            keyword: token.to_string(),
            kind,
        })?;

        let (value, consumed) = apply_keyword(keyword, &keywords[idx + 1..], opts)?;
        match value {
            KeywordValue::Width(w) => header.width = w,
            KeywordValue::Height(h) => header.height = h,
            KeywordValue::ExtraButtons(b) => extra_buttons = b,
            KeywordValue::Options {
                options: o,
                default_index: d,
                allow_multiple: m,
            } => {
                options = o;
                default_index = d;
                allow_multiple = m;
            }
        }
        idx += 1 + consumed;
    }

    Ok(match kind {
        DialogKind::Message => Request::Message(MessageRequest {
            header,
            extra_buttons,
        }),
        DialogKind::Options => Request::Options(OptionsRequest {
            header,
            options,
            default_index,
            allow_multiple,
        }),
    })
}
