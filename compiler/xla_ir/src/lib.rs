//! Intermediate representation shared by every XLA phase.
//!
//! A program is a single tree of [`Expr`] nodes. The collector produces
//! atoms, comments and the five bracketed list kinds; tag collapse moves
//! `:tag` atoms into [`Tags`]; the evaluator adds procedure values, yield
//! signals and error values. Errors are ordinary nodes, never panics.
//!
//! The scope chain ([`Env`]) lives here rather than in the evaluator because
//! closures are values: a [`Procedure::Closure`] owns the environment it was
//! defined in.

mod env;
mod error;
mod expr;
mod kind;
mod procedure;
mod render;
mod tags;

pub use env::{BindError, Env};
pub use error::ErrorKind;
pub use expr::{Expr, ExprKind};
pub use kind::{Delimiter, ListKind, NodeKind, DELIMITERS};
pub use procedure::{Call, Closure, Executor, NativeFn, NativeProc, Procedure, SpecialForm};
pub use render::{dump_tree, render_program};
pub use tags::Tags;
pub use xla_lexer_core::AtomPattern;
