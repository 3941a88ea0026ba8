//! core::result
//!
//! Dialog results as reported by a backend.
//!
//! # Button indices
//!
//! - `0` - Ok
//! - `1` - Cancel, escape, or the dialog was closed
//! - `2..` - Extra buttons, in declared order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Index of the Ok button.
pub const OK: usize = 0;
/// Index of the Cancel button.
pub const CANCEL: usize = 1;
/// Index of the first extra button.
pub const FIRST_EXTRA: usize = 2;

/// Which button dismissed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonResult {
    pub index: usize,
}

impl ButtonResult {
    pub fn ok() -> Self {
        Self { index: OK }
    }

    pub fn cancel() -> Self {
        Self { index: CANCEL }
    }

    /// The `n`-th extra button (zero based).
    pub fn extra(n: usize) -> Self {
        Self {
            index: FIRST_EXTRA + n,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.index == OK
    }

    pub fn is_cancel(&self) -> bool {
        self.index == CANCEL
    }

    /// Zero-based position among the extra buttons, if this is one.
    pub fn extra_button(&self) -> Option<usize> {
        self.index.checked_sub(FIRST_EXTRA)
    }
}

/// Rows chosen in an options dialog, in the order the backend reported them.
///
/// Formats as comma-joined indices, which is also what [`FromStr`] accepts.
///
/// ```
/// use hookdialog::core::result::SelectionResult;
///
/// let sel: SelectionResult = "2,0".parse().unwrap();
/// assert_eq!(sel.indices, [2, 0]);
/// assert_eq!(sel.to_string(), "2,0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionResult {
    pub indices: Vec<usize>,
}

impl SelectionResult {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", idx)?;
        }
        Ok(())
    }
}

impl FromStr for SelectionResult {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let indices = s
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<Vec<usize>, _>>()?;
        Ok(Self { indices })
    }
}

/// Everything a backend reports for one dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DialogOutcome {
    Message {
        button: ButtonResult,
    },
    Options {
        button: ButtonResult,
        selection: SelectionResult,
    },
}

impl DialogOutcome {
    pub fn button(&self) -> ButtonResult {
        match self {
            DialogOutcome::Message { button } | DialogOutcome::Options { button, .. } => *button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_constructors() {
        assert!(ButtonResult::ok().is_ok());
        assert!(ButtonResult::cancel().is_cancel());
        assert_eq!(ButtonResult::extra(1).index, 3);
        assert_eq!(ButtonResult::extra(1).extra_button(), Some(1));
        assert_eq!(ButtonResult::cancel().extra_button(), None);
    }

    #[test]
    fn selection_display_joins_with_commas() {
        assert_eq!(SelectionResult::new(vec![2, 0]).to_string(), "2,0");
        assert_eq!(SelectionResult::new(vec![4]).to_string(), "4");
        assert_eq!(SelectionResult::default().to_string(), "");
    }

    #[test]
    fn selection_parse() {
        assert_eq!(
            " 1, 3 \n".parse::<SelectionResult>().unwrap().indices,
            [1, 3]
        );
        assert!("".parse::<SelectionResult>().unwrap().is_empty());
        assert!("1,x".parse::<SelectionResult>().is_err());
    }

    #[test]
    fn outcome_button() {
        let outcome = DialogOutcome::Options {
            button: ButtonResult::cancel(),
            selection: SelectionResult::default(),
        };
        assert!(outcome.button().is_cancel());
    }
}
