//! Command handlers for the `xla` CLI.
//!
//! Each submodule implements one subcommand. Shared utilities (reading the
//! source file, rendering a diagnostic) live here in the module root.

use std::io::IsTerminal;

use xla_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use xla_diagnostic::Diagnostic;

use crate::{CliError, RunConfig};

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::parse_file;
pub use run::run_file;

/// Read a source file with a message tailored to the failure.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => {
                format!("'{path}' contains invalid UTF-8 data")
            }
            _ => format!("error reading '{path}': {e}"),
        };
        CliError::Read(message)
    })
}

/// Write `diagnostic` to stderr against `source`, followed by the summary.
pub(crate) fn report(diagnostic: &Diagnostic, source: &str, config: &RunConfig) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), config.color, is_tty)
        .with_source(source)
        .with_file_path(config.display_path());
    emitter.emit(diagnostic);
    emitter.emit_summary(1, 0);
    emitter.flush();
}
