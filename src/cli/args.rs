//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags must come before the dialog kind:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--backend <name>`: Dialog backend to use
//! - `--json`: Print the result as JSON
//! - `--strict`: Reject unparsable numbers
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only
//!
//! Everything from the dialog kind onward is passed untouched to
//! [`crate::core::grammar`], including tokens that look like flags.

use clap::Parser;
use std::path::PathBuf;

/// hookdialog - Native confirmation and choice dialogs for hook scripts
#[derive(Parser, Debug)]
#[command(name = "hookdialog")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
DIALOGS:
    hookdialog message <appIcon> <icon> <title> <body> <okLabel> <cancelLabel>
               [--width <int>] [--height <int>] [--extra-buttons <n> <name>...]

    hookdialog options <appIcon> <icon> <title> <body> <okLabel> <cancelLabel>
               [--width <int>] [--height <int>]
               [--options <n> <name>... <defaultIndex> <true|false>]

    Icons: info, error, warning, question (anything else shows info)

EXIT CODES:
    0    Ok or an extra button; stdout holds the button index or the
         comma-separated selected rows
    1    Cancel, or any error (reported on stderr)

EXAMPLES:
    # Ask for confirmation with an extra 'Skip' button
    hookdialog message info question 'Hooks' 'Run new hooks?' Run Cancel \\
        --extra-buttons 1 Skip

    # Let the user pick several hooks, second one preselected
    hookdialog options info info 'Hooks' 'Select hooks' Ok Cancel \\
        --options 3 lint test format 1 true")]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dialog backend (osascript, scripted)
    #[arg(long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject unparsable numeric arguments instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Dialog kind followed by its arguments
    #[arg(
        value_name = "KIND ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// Unlike `Parser::parse`, usage errors are returned so the caller can
    /// exit with the dialog failure status.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hookdialog").chain(args.iter().copied()))
            .expect("parse failed")
    }

    #[test]
    fn flags_before_kind() {
        let cli = parse(&["--json", "--backend", "scripted", "message", "a"]);
        assert!(cli.json);
        assert_eq!(cli.backend.as_deref(), Some("scripted"));
        assert_eq!(cli.tokens, ["message", "a"]);
    }

    #[test]
    fn flags_after_kind_are_tokens() {
        let cli = parse(&["options", "i", "i", "T", "B", "Ok", "No", "--json", "--width", "3"]);
        assert!(!cli.json);
        assert_eq!(cli.tokens.len(), 10);
        assert_eq!(cli.tokens[7], "--json");
        assert_eq!(cli.tokens[8], "--width");
    }

    #[test]
    fn no_tokens_is_not_a_usage_error() {
        let cli = parse(&["--debug"]);
        assert!(cli.debug);
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn outer_flag_missing_value_is_a_usage_error() {
        assert!(Cli::try_parse_from(["hookdialog", "--config"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
