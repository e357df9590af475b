//! The `check` command: parse and normalize without evaluating.

use super::{read_file, report};
use crate::{check_source, CliError, RunConfig};

pub fn check_file(config: &RunConfig) -> Result<(), CliError> {
    let source = read_file(&config.display_path())?;
    if let Err(diagnostic) = check_source(&source) {
        report(&diagnostic, &source, config);
        return Err(CliError::Reported);
    }
    println!("ok");
    Ok(())
}
