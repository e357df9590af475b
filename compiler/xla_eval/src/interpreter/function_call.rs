//! Closure invocation.

use xla_ir::{Call, Closure, Env, ErrorKind, Expr};

use super::Interpreter;

impl Interpreter {
    /// Call a closure: evaluate the arguments in the caller's scope, bind
    /// them in a child of the captured scope, run the body.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = closure.params.len()))]
    pub(super) fn call_closure(&mut self, closure: &Closure, call: Call<'_>) -> Expr {
        if call.args.len() != closure.params.len() {
            return Expr::error(
                call.position(),
                ErrorKind::ArityMismatch,
                format!(
                    "procedure expects {} argument(s), got {}",
                    closure.params.len(),
                    call.args.len()
                ),
            );
        }

        let mut values = Vec::with_capacity(call.args.len());
        for arg in call.args {
            let value = self.eval_value(arg, call.env);
            if value.is_error() {
                return value;
            }
            values.push(value);
        }

        let scope = closure.env.push();
        for (param, value) in closure.params.iter().zip(values) {
            if scope.define(param, value).is_err() {
                return Expr::error(
                    call.position(),
                    ErrorKind::DuplicateParameter,
                    format!("parameter `{param}` appears more than once"),
                );
            }
        }

        self.eval_body(&closure.body, &scope, call.position())
    }

    /// Evaluate `body` in order. An error or a yield stops it and is
    /// returned as is. Otherwise the last value is the result.
    fn eval_body(&mut self, body: &[Expr], scope: &Env, position: u32) -> Expr {
        let mut last = Expr::empty(position);
        for expr in body {
            let value = self.eval(expr, scope);
            if value.is_signal() {
                return value;
            }
            last = value;
        }
        last
    }
}
