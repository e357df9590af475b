//! Tree-walking interpreter.
//!
//! `eval` is total over node kinds: every outcome, including failure, is a
//! node. Error nodes short-circuit every enclosing evaluation. Yield nodes
//! end closure bodies and `do` loops and pass through them still tagged;
//! anything that uses a result as data (bindings, arguments, `put`, `ref`,
//! `if` conditions) takes the yielded value instead.

mod builder;
mod function_call;
mod special_forms;

use std::borrow::Cow;
use std::rc::Rc;

use tracing::debug;
use xla_ir::{
    AtomPattern, Call, Env, ErrorKind, Executor, Expr, ExprKind, ListKind, Procedure,
};
use xla_lexer_core::RESOURCE_PREFIX;
use xla_stack::ensure_sufficient_stack;

use crate::resources::{split_reference, LookupError, ResourceTable};
use crate::SharedPrintHandler;

pub use builder::InterpreterBuilder;

/// Nesting depth at which evaluation stops with a recursion error.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Host interceptor for runtime `{...}` or prompt `<...>` lists.
///
/// Receives the whole list node and the current scope.
pub type NodeHandler = Rc<dyn Fn(&mut dyn Executor, &Expr, &Env) -> Expr>;

/// What an untyped atom that names no binding evaluates to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnboundAtoms {
    /// The atom itself.
    #[default]
    Literal,
    /// An `UnboundAtom` error.
    Error,
}

/// Evaluates collapsed XLA trees.
pub struct Interpreter {
    env: Env,
    print_handler: SharedPrintHandler,
    resources: Box<dyn ResourceTable>,
    runtime_handler: Option<NodeHandler>,
    prompt_handler: Option<NodeHandler>,
    unbound_atoms: UnboundAtoms,
    max_depth: usize,
    depth: usize,
}

impl Interpreter {
    /// An interpreter with default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root scope programs run in.
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a program in the root scope.
    ///
    /// Bindings made by the program persist, so several programs run on one
    /// interpreter share state.
    pub fn run(&mut self, program: &Expr) -> Expr {
        let env = self.env.clone();
        self.eval(program, &env)
    }

    /// Evaluate `expr` in `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> Expr {
        if self.depth >= self.max_depth {
            return Expr::error(
                expr.position,
                ErrorKind::RecursionLimit,
                format!("evaluation nested more than {} levels deep", self.max_depth),
            );
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_inner(expr, env));
        self.depth -= 1;
        result
    }

    /// Evaluate `expr` where its result is used as data: a yield gives up
    /// its value.
    pub(super) fn eval_value(&mut self, expr: &Expr, env: &Env) -> Expr {
        self.eval(expr, env).unwrap_yield()
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Env) -> Expr {
        match &expr.kind {
            ExprKind::Atom { text, pattern } => self.eval_atom(expr, text, *pattern, env),
            ExprKind::Comment(_) => Expr::empty(expr.position),
            ExprKind::List { kind, items } => match kind {
                ListKind::Collection => self.eval_collection(expr, items, env),
                ListKind::Action => self.eval_action(expr, items, env),
                ListKind::Raw => expr.clone(),
                ListKind::Runtime => {
                    let handler = self.runtime_handler.clone();
                    self.eval_extension(expr, env, handler, "runtime")
                }
                ListKind::Prompt => {
                    let handler = self.prompt_handler.clone();
                    self.eval_extension(expr, env, handler, "prompt")
                }
            },
            ExprKind::Error { .. } | ExprKind::Procedure(_) | ExprKind::Yield(_) => expr.clone(),
        }
    }

    fn eval_atom(&mut self, expr: &Expr, text: &str, pattern: AtomPattern, env: &Env) -> Expr {
        if pattern == AtomPattern::Tag {
            return expr.clone();
        }
        if let Some(reference) = text.strip_prefix(RESOURCE_PREFIX) {
            return self.resolve_resource(expr.position, reference);
        }
        if let Some(value) = env.lookup(text, true) {
            return value;
        }
        match (self.unbound_atoms, pattern) {
            (UnboundAtoms::Error, AtomPattern::None) => Expr::error(
                expr.position,
                ErrorKind::UnboundAtom,
                format!("atom `{text}` is not bound to a value"),
            ),
            _ => expr.clone(),
        }
    }

    /// Evaluate children in order; the first error replaces the whole result.
    ///
    /// Comments contribute nothing to the result.
    fn eval_collection(&mut self, expr: &Expr, items: &[Expr], env: &Env) -> Expr {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            if matches!(item.kind, ExprKind::Comment(_)) {
                continue;
            }
            let value = self.eval(item, env);
            if value.is_error() {
                return value;
            }
            results.push(value);
        }
        Expr::list(expr.position, ListKind::Collection, results)
            .with_tags(expr.tags.iter().map(str::to_owned))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(position = expr.position))]
    fn eval_action(&mut self, expr: &Expr, items: &[Expr], env: &Env) -> Expr {
        let items = without_comments(items);
        let Some((head, args)) = items.split_first() else {
            return Expr::error(
                expr.position,
                ErrorKind::EmptyAction,
                "empty action: expected a procedure in head position",
            );
        };

        let callee = self.eval(head, env);
        let procedure = match callee.kind {
            ExprKind::Procedure(procedure) => procedure,
            ExprKind::Error { .. } | ExprKind::Yield(_) => return callee,
            _ => {
                return Expr::error(
                    head.position,
                    ErrorKind::NotAProcedure,
                    format!("cannot call `{head}`: it does not evaluate to a procedure"),
                )
            }
        };

        debug!(procedure = procedure.name(), args = args.len(), "call");
        let call = Call {
            node: expr,
            args,
            env,
        };
        self.apply(&procedure, call)
    }

    fn apply(&mut self, procedure: &Procedure, call: Call<'_>) -> Expr {
        match procedure {
            Procedure::Special(form) => self.eval_special(*form, call),
            Procedure::Native(native) => {
                let func = Rc::clone(&native.func);
                func(self, call)
            }
            Procedure::Closure(closure) => self.call_closure(closure, call),
        }
    }

    fn eval_extension(
        &mut self,
        expr: &Expr,
        env: &Env,
        handler: Option<NodeHandler>,
        what: &str,
    ) -> Expr {
        match handler {
            Some(handler) => handler(self, expr, env),
            None => Expr::error(
                expr.position,
                ErrorKind::NotImplemented,
                format!("{what} handling not implemented"),
            ),
        }
    }

    fn resolve_resource(&self, position: u32, reference: &str) -> Expr {
        let Some((type_name, name)) = split_reference(reference) else {
            return Expr::error(
                position,
                ErrorKind::MalformedResource,
                format!("malformed resource reference `@{reference}`: expected `@type/name`"),
            );
        };

        match self.resources.lookup(type_name, name) {
            Ok(resource) => {
                let mut tags = vec!["resource".to_owned()];
                if !resource.kind.is_empty() {
                    tags.push(resource.kind);
                }
                Expr::typed_atom(
                    position,
                    resource.location.display().to_string(),
                    AtomPattern::FilePath,
                )
                .with_tags(tags)
            }
            Err(err) => {
                let kind = match err {
                    LookupError::UnknownType(_) => ErrorKind::UnknownResourceType,
                    LookupError::UnknownName { .. } => ErrorKind::UnknownResourceName,
                };
                Expr::error(position, kind, err.to_string())
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for Interpreter {
    fn eval(&mut self, expr: &Expr, env: &Env) -> Expr {
        Interpreter::eval(self, expr, env)
    }

    fn emit(&mut self, text: &str) {
        self.print_handler.println(text);
    }
}

/// `items` with comment nodes removed, borrowing when there are none.
fn without_comments(items: &[Expr]) -> Cow<'_, [Expr]> {
    if items.iter().any(|e| matches!(e.kind, ExprKind::Comment(_))) {
        Cow::Owned(
            items
                .iter()
                .filter(|e| !matches!(e.kind, ExprKind::Comment(_)))
                .cloned()
                .collect(),
        )
    } else {
        Cow::Borrowed(items)
    }
}
