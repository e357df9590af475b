//! Source text to canonical tree.
//!
//! Two passes:
//!
//! 1. [`parse`]: the collector. Recursive descent over characters, one frame
//!    per open bracket. Never panics; any failure is returned as a single
//!    error node carrying the offending position.
//! 2. [`collapse`]: tag collapse. Removes `:tag` atoms and attaches their
//!    names to the next sibling.
//!
//! [`parse_source`] runs both.

mod collapse;
mod collector;

pub use collapse::collapse;
pub use collector::parse;

use xla_ir::Expr;

/// Collect and normalize `source`.
///
/// The result is either the canonical root collection or an error node.
pub fn parse_source(source: &str) -> Expr {
    let raw = parse(source);
    if raw.is_error() {
        return raw;
    }
    collapse(raw)
}
