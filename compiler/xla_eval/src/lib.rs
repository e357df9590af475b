//! XLA Eval - tree-walking interpreter for XLA programs.
//!
//! # Architecture
//!
//! - [`Interpreter`]: evaluates a collapsed tree against a root scope that
//!   holds the special forms and any host builtins
//! - [`InterpreterBuilder`]: explicit configuration (output sink, resource
//!   table, builtins, extension handlers, strictness, depth limit)
//! - [`PrintHandlerImpl`]: where `put` writes
//! - [`ResourceTable`]: resolves `@type/name` references
//!
//! Evaluation never fails in the Rust sense: every problem becomes an error
//! node that propagates outward as a value.

pub mod interpreter;
mod print_handler;
pub mod resources;

pub use interpreter::{
    Interpreter, InterpreterBuilder, NodeHandler, UnboundAtoms, DEFAULT_MAX_DEPTH,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use resources::{
    DirectoryResources, EmptyResources, LookupError, Resource, ResourceError, ResourceTable,
};
