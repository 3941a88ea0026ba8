use std::process::ExitCode;

use hookdialog::cli::{self, Cli};
use hookdialog::core::encode::EXIT_FAILURE;

fn main() -> ExitCode {
    let args = match Cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli::run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => ExitCode::from(cli::report(&err)),
    }
}
