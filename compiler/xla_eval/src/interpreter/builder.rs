//! `InterpreterBuilder` for creating configured interpreters.

use std::rc::Rc;

use xla_ir::{Call, Env, Executor, Expr, NativeFn, NativeProc, Procedure, SpecialForm};

use super::{Interpreter, NodeHandler, UnboundAtoms, DEFAULT_MAX_DEPTH};
use crate::{stdout_handler, EmptyResources, ResourceTable, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, no resources, no extension handlers,
/// unbound atoms evaluate to themselves, depth limit [`DEFAULT_MAX_DEPTH`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    resources: Option<Box<dyn ResourceTable>>,
    builtins: Vec<(String, NativeFn)>,
    runtime_handler: Option<NodeHandler>,
    prompt_handler: Option<NodeHandler>,
    unbound_atoms: UnboundAtoms,
    max_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            resources: None,
            builtins: Vec::new(),
            runtime_handler: None,
            prompt_handler: None,
            unbound_atoms: UnboundAtoms::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set where `put` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the table `@type/name` references resolve against.
    #[must_use]
    pub fn resources(mut self, resources: impl ResourceTable + 'static) -> Self {
        self.resources = Some(Box::new(resources));
        self
    }

    /// Bind a host builtin in the root scope.
    ///
    /// Like the special forms, a builtin receives its arguments unevaluated.
    /// A builtin named after a special form replaces it.
    #[must_use]
    pub fn builtin(
        mut self,
        name: impl Into<String>,
        func: impl Fn(&mut dyn Executor, Call<'_>) -> Expr + 'static,
    ) -> Self {
        let func: NativeFn = Rc::new(func);
        self.builtins.push((name.into(), func));
        self
    }

    /// Intercept runtime `{...}` lists.
    #[must_use]
    pub fn runtime_handler(
        mut self,
        handler: impl Fn(&mut dyn Executor, &Expr, &Env) -> Expr + 'static,
    ) -> Self {
        let handler: NodeHandler = Rc::new(handler);
        self.runtime_handler = Some(handler);
        self
    }

    /// Intercept prompt `<...>` lists.
    #[must_use]
    pub fn prompt_handler(
        mut self,
        handler: impl Fn(&mut dyn Executor, &Expr, &Env) -> Expr + 'static,
    ) -> Self {
        let handler: NodeHandler = Rc::new(handler);
        self.prompt_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn unbound_atoms(mut self, policy: UnboundAtoms) -> Self {
        self.unbound_atoms = policy;
        self
    }

    /// Limit evaluation nesting. Exceeding it yields a `RecursionLimit` error.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Build the interpreter and populate its root scope.
    pub fn build(self) -> Interpreter {
        let env = Env::root();
        for form in SpecialForm::ALL {
            // A fresh root cannot already hold a keyword.
            let _ = env.define(
                form.keyword(),
                Expr::procedure(0, Procedure::Special(form)),
            );
        }
        for (name, func) in self.builtins {
            let value = Expr::procedure(
                0,
                Procedure::Native(NativeProc {
                    name: name.clone(),
                    func,
                }),
            );
            if env.define(&name, value.clone()).is_err() {
                tracing::debug!(%name, "builtin replaces existing binding");
                let _ = env.rebind(&name, value);
            }
        }

        Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            resources: self
                .resources
                .unwrap_or_else(|| Box::new(EmptyResources)),
            runtime_handler: self.runtime_handler,
            prompt_handler: self.prompt_handler,
            unbound_atoms: self.unbound_atoms,
            max_depth: self.max_depth,
            depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
