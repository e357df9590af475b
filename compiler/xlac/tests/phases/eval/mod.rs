//! Interpreter phase tests.
//!
//! Tests for `xla_eval` driven from source text, validating:
//! - Whole programs: bindings, closures, output
//! - Loops and early exit
//! - Resource references backed by a directory
//! - Errors surfacing as diagnostics
//!
//! # Test Organization
//!
//! - `programs` - Bindings, closures and output ordering
//! - `control` - `if`, `do`, `yield` and iteration caps
//! - `resources` - `@type/name` resolution through `DirectoryResources`

mod control;
mod programs;
mod resources;
