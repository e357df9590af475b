//! Host-level failures.
//!
//! Problems inside an XLA program are error nodes and reach the user as
//! diagnostics. `CliError` covers everything around the program: bad
//! arguments, unreadable files, a broken resource directory.

use thiserror::Error;
use xla_eval::ResourceError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing file path")]
    MissingPath,

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{0}` requires a value")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },

    #[error("{0}")]
    Read(String),

    #[error(transparent)]
    Resources(#[from] ResourceError),

    /// A diagnostic has already been written to stderr.
    #[error("aborting due to previous error")]
    Reported,
}
