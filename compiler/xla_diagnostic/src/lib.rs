//! Diagnostics for XLA.
//!
//! Errors in XLA are data: the collector, tag collapse, the evaluator and
//! resource resolution all produce error nodes instead of failing. This
//! crate turns such a node into a [`Diagnostic`] with a stable
//! [`ErrorCode`], a primary label at the node's position, and notes or help
//! where the kind of error has a common fix. Emitters render diagnostics for
//! humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
