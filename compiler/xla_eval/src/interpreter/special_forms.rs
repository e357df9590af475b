//! Special forms.
//!
//! Every form receives its arguments unevaluated. Arguments a form does
//! evaluate are checked right away: an error or yield result is returned
//! as-is so it keeps travelling outward.

use tracing::debug;
use xla_ir::{
    AtomPattern, Call, ErrorKind, Executor, Expr, ExprKind, ListKind, Procedure, SpecialForm,
};

use super::Interpreter;

impl Interpreter {
    #[tracing::instrument(level = "debug", skip_all, fields(form = form.keyword()))]
    pub(super) fn eval_special(&mut self, form: SpecialForm, call: Call<'_>) -> Expr {
        debug!(args = call.args.len(), "special form");
        match form {
            SpecialForm::Def | SpecialForm::Let => self.eval_define(form, call),
            SpecialForm::Set => self.eval_set(call),
            SpecialForm::Fn => eval_fn(call),
            SpecialForm::Ref => self.eval_ref(call),
            SpecialForm::Yield => self.eval_yield(call),
            SpecialForm::Do => self.eval_do(call),
            SpecialForm::If => self.eval_if(call),
            SpecialForm::Put => self.eval_put(call),
        }
    }

    /// `(def name expr)` / `(let name expr)`: bind in the current scope.
    fn eval_define(&mut self, form: SpecialForm, call: Call<'_>) -> Expr {
        let [target, value] = call.args else {
            return arity_error(call, form.keyword(), "exactly 2");
        };
        let name = match target_name(form, target) {
            Ok(name) => name,
            Err(error) => return error,
        };
        if call.env.contains(name, false) {
            return already_defined(target.position, name);
        }

        let value = self.eval_value(value, call.env);
        if value.is_error() {
            return value;
        }
        match call.env.define(name, value.clone()) {
            Ok(()) => value,
            Err(_) => already_defined(target.position, name),
        }
    }

    /// `(set name expr)`: rebind in the closest scope that owns `name`.
    fn eval_set(&mut self, call: Call<'_>) -> Expr {
        let [target, value] = call.args else {
            return arity_error(call, "set", "exactly 2");
        };
        let name = match target_name(SpecialForm::Set, target) {
            Ok(name) => name,
            Err(error) => return error,
        };
        if !call.env.contains(name, true) {
            return undefined(target.position, name);
        }

        let value = self.eval_value(value, call.env);
        if value.is_error() {
            return value;
        }
        match call.env.rebind(name, value.clone()) {
            Ok(()) => value,
            Err(_) => undefined(target.position, name),
        }
    }

    /// `(ref expr...)`: the evaluated arguments' text, space-separated.
    fn eval_ref(&mut self, call: Call<'_>) -> Expr {
        if call.args.is_empty() {
            return arity_error(call, "ref", "at least 1");
        }
        let mut parts = Vec::with_capacity(call.args.len());
        for arg in call.args {
            let value = self.eval_value(arg, call.env);
            if value.is_error() {
                return value;
            }
            parts.push(value.text_form());
        }
        Expr::value_atom(call.position(), parts.join(" "))
    }

    /// `(yield expr)`: wrap the value in an early-exit signal.
    fn eval_yield(&mut self, call: Call<'_>) -> Expr {
        let [arg] = call.args else {
            return arity_error(call, "yield", "exactly 1");
        };
        let value = self.eval(arg, call.env);
        if value.is_error() {
            return value;
        }
        Expr::yielded(value)
    }

    /// `(do (action)...)`: repeat the actions, each pass in a fresh scope,
    /// until one of them errors or yields. The yield is returned still
    /// tagged, so it also ends an enclosing closure body or loop.
    fn eval_do(&mut self, call: Call<'_>) -> Expr {
        if call.args.is_empty() {
            return arity_error(call, "do", "at least 1");
        }
        if let Some(bad) = call.args.iter().find(|a| !a.is_list_of(ListKind::Action)) {
            return Expr::error(
                bad.position,
                ErrorKind::ExpectedAction,
                format!("do expects only actions, found `{bad}`"),
            );
        }

        let mut iteration: u64 = 0;
        loop {
            iteration += 1;
            let scope = call.env.push();
            tracing::trace!(iteration, "do iteration");
            for action in call.args {
                let value = self.eval(action, &scope);
                if value.is_yield() {
                    debug!(iteration, "do loop yielded");
                }
                if value.is_signal() {
                    return value;
                }
            }
        }
    }

    /// `(if cond then [else])`: integer condition, zero is false.
    fn eval_if(&mut self, call: Call<'_>) -> Expr {
        let (condition, then_branch, else_branch) = match call.args {
            [c, t] => (c, t, None),
            [c, t, e] => (c, t, Some(e)),
            _ => return arity_error(call, "if", "2 or 3"),
        };
        for branch in std::iter::once(then_branch).chain(else_branch) {
            if !branch.is_list_of(ListKind::Action) && !branch.is_list_of(ListKind::Runtime) {
                return Expr::error(
                    branch.position,
                    ErrorKind::ExpectedBranch,
                    format!("if branches must be actions or runtime lists, found `{branch}`"),
                );
            }
        }

        let value = self.eval_value(condition, call.env);
        if value.is_error() {
            return value;
        }
        if value.pattern() != Some(AtomPattern::Integer) {
            return Expr::error(
                condition.position,
                ErrorKind::ConditionNotInteger,
                format!("if condition must evaluate to an integer, got `{value}`"),
            );
        }

        if !value.is_zero_integer() {
            self.eval(then_branch, call.env)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch, call.env)
        } else {
            Expr::typed_atom(call.position(), "0", AtomPattern::Integer)
        }
    }

    /// `(put expr...)`: write the values' text as one newline-joined write
    /// and return that text.
    fn eval_put(&mut self, call: Call<'_>) -> Expr {
        let mut lines = Vec::new();
        for arg in call.args {
            let value = self.eval_value(arg, call.env);
            if value.is_error() {
                return value;
            }
            lines.extend(value.output_lines());
        }
        let text = lines.join("\n");
        self.emit(&text);
        Expr::value_atom(call.position(), text)
    }
}

/// `(fn [params...] body...)`: a closure over the defining scope.
fn eval_fn(call: Call<'_>) -> Expr {
    let [params, body @ ..] = call.args else {
        return arity_error(call, "fn", "at least 2");
    };
    if body.is_empty() {
        return arity_error(call, "fn", "at least 2");
    }
    let Some((ListKind::Raw, items)) = params.as_list() else {
        return Expr::error(
            params.position,
            ErrorKind::ExpectedParams,
            format!("fn parameters must be a raw list such as `[a b]`, found `{params}`"),
        );
    };

    let mut names: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if matches!(item.kind, ExprKind::Comment(_)) {
            continue;
        }
        let Some(name) = item.as_atom() else {
            return Expr::error(
                item.position,
                ErrorKind::ExpectedAtom,
                format!("fn parameter must be a name, found `{item}`"),
            );
        };
        if names.iter().any(|n| n == name) {
            return Expr::error(
                item.position,
                ErrorKind::DuplicateParameter,
                format!("parameter `{name}` appears more than once"),
            );
        }
        names.push(name.to_owned());
    }

    Expr::procedure(
        call.position(),
        Procedure::closure(names, body.to_vec(), call.env.clone()),
    )
}

fn target_name(form: SpecialForm, target: &Expr) -> Result<&str, Expr> {
    target.as_atom().ok_or_else(|| {
        Expr::error(
            target.position,
            ErrorKind::ExpectedAtom,
            format!("{} target must be a name, found `{target}`", form.keyword()),
        )
    })
}

#[cold]
fn arity_error(call: Call<'_>, name: &str, expected: &str) -> Expr {
    Expr::error(
        call.position(),
        ErrorKind::ArityMismatch,
        format!(
            "{name} expects {expected} argument(s), got {}",
            call.args.len()
        ),
    )
}

#[cold]
fn already_defined(position: u32, name: &str) -> Expr {
    Expr::error(
        position,
        ErrorKind::AlreadyDefined,
        format!("identifier '{name}' already defined in this scope"),
    )
}

#[cold]
fn undefined(position: u32, name: &str) -> Expr {
    Expr::error(
        position,
        ErrorKind::Undefined,
        format!("identifier '{name}' not found in any accessible environment"),
    )
}
