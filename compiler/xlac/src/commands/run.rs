//! The `run` command: parse, normalize and evaluate a file.

use tracing::debug;
use xla_eval::stdout_handler;

use super::{read_file, report};
use crate::{run_source, CliError, RunConfig};

/// Run a program and print its final value.
///
/// Output written by `put` appears as the program runs. On an error the
/// diagnostic goes to stderr after that output and the call fails with
/// [`CliError::Reported`].
pub fn run_file(config: &RunConfig) -> Result<(), CliError> {
    let path = config.display_path();
    let source = read_file(&path)?;
    let mut interpreter = config.interpreter(stdout_handler())?;
    debug!(%path, strict = config.strict, "running");

    match run_source(&source, &mut interpreter) {
        Ok(value) => {
            let text = value.text_form();
            if !text.is_empty() {
                println!("{text}");
            }
            Ok(())
        }
        Err(diagnostic) => {
            report(&diagnostic, &source, config);
            Err(CliError::Reported)
        }
    }
}
