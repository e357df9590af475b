//! XLA host library.
//!
//! The `xla` binary is a thin shell over this crate: [`commands`] holds one
//! handler per subcommand, [`config`] turns command-line flags into a
//! [`RunConfig`], and [`init_tracing`] installs the log subscriber.
//!
//! [`check_source`] and [`run_source`] are the two pipelines the commands
//! share. They are public so embedders and tests can drive the same path
//! without touching the filesystem.

pub mod commands;
pub mod config;
mod error;
mod tracing_setup;

pub use config::RunConfig;
pub use error::CliError;
pub use tracing_setup::init_tracing;

use xla_diagnostic::Diagnostic;
use xla_eval::Interpreter;
use xla_ir::Expr;

/// Parse and normalize `source`.
///
/// Returns the canonical tree, or the diagnostic for the error node the
/// parser produced.
pub fn check_source(source: &str) -> Result<Expr, Diagnostic> {
    let tree = xla_parse::parse_source(source);
    match Diagnostic::from_error_node(&tree) {
        Some(diagnostic) => Err(diagnostic),
        None => Ok(tree),
    }
}

/// Parse, normalize and evaluate `source` with `interpreter`.
///
/// On success returns the program's final value (the last value produced,
/// looking through nested collections). Output written by `put` goes to the
/// interpreter's print handler either way.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<Expr, Diagnostic> {
    let tree = check_source(source)?;
    let result = interpreter.run(&tree);
    match Diagnostic::from_error_node(&result) {
        Some(diagnostic) => Err(diagnostic),
        None => Ok(result.last_value().clone()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;
    use xla_diagnostic::ErrorCode;
    use xla_eval::buffer_handler;

    use super::*;

    #[test]
    fn check_reports_parse_errors() {
        let diag = check_source("(a ]").unwrap_err();
        assert_eq!(diag.code, ErrorCode::E1002);
        assert_eq!(diag.primary_position(), Some(3));
    }

    #[test]
    fn run_returns_last_value() {
        let output = buffer_handler();
        let mut interp = Interpreter::builder().print_handler(output.clone()).build();
        let value = run_source("(def x 5) (put x) (ref done)", &mut interp).unwrap();
        assert_eq!(value.as_atom(), Some("done"));
        assert_eq!(output.get_output(), "5\n");
    }

    #[test]
    fn run_reports_eval_errors_after_output() {
        let output = buffer_handler();
        let mut interp = Interpreter::builder().print_handler(output.clone()).build();
        let diag = run_source("(put before) (set missing 1)", &mut interp).unwrap_err();
        assert!(diag.code.is_eval_error());
        assert_eq!(output.get_output(), "before\n");
    }
}
