//! Shared test utilities for phase tests.
//!
//! Each submodule provides helpers for one phase.

mod eval;
mod parse;

pub use eval::*;
pub use parse::*;
