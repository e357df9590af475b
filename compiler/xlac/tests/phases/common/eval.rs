//! Eval phase test utilities.

use std::cell::Cell;
use std::rc::Rc;

use xla_diagnostic::Diagnostic;
use xla_eval::{buffer_handler, Interpreter, InterpreterBuilder, SharedPrintHandler};
use xla_ir::{Call, ErrorKind, Executor, Expr};

/// What a program printed and what it returned.
pub struct Outcome {
    pub output: String,
    pub result: Result<Expr, Diagnostic>,
}

impl Outcome {
    /// Text of the final value, panicking on an error.
    pub fn value_text(&self) -> String {
        match &self.result {
            Ok(value) => value.text_form(),
            Err(diag) => panic!("program failed: {diag:?}\noutput so far:\n{}", self.output),
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match &self.result {
            Ok(value) => panic!("expected an error, got {value}"),
            Err(diag) => diag,
        }
    }
}

/// Run `source` on a default interpreter with buffered output.
pub fn run(source: &str) -> Outcome {
    run_with(Interpreter::builder(), source)
}

/// Run `source` on an interpreter built from `builder`, capturing output.
pub fn run_with(builder: InterpreterBuilder, source: &str) -> Outcome {
    let output: SharedPrintHandler = buffer_handler();
    let mut interp = builder.print_handler(output.clone()).build();
    let result = xlac::run_source(source, &mut interp);
    Outcome {
        output: output.get_output(),
        result,
    }
}

/// Builtin that evaluates its argument as an integer and adds `delta`.
fn step(delta: i64) -> impl Fn(&mut dyn Executor, Call<'_>) -> Expr {
    move |exec, call| {
        let value = exec.eval(&call.args[0], call.env).unwrap_yield();
        if value.is_error() {
            return value;
        }
        let n: i64 = value.as_atom().unwrap().parse().unwrap();
        Expr::value_atom(call.position(), (n + delta).to_string())
    }
}

/// A builder with `inc` and `dec` host builtins, the host's arithmetic.
pub fn counting() -> InterpreterBuilder {
    Interpreter::builder()
        .builtin("inc", step(1))
        .builtin("dec", step(-1))
}

/// Add a `tick` builtin that errors out on call `limit + 1`.
///
/// Used to stop loops that never yield.
pub fn with_iteration_cap(
    builder: InterpreterBuilder,
    limit: usize,
) -> (InterpreterBuilder, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let builder = builder.builtin("tick", move |_, call| {
        let n = counter.get() + 1;
        counter.set(n);
        if n > limit {
            Expr::error(
                call.position(),
                ErrorKind::Host,
                format!("iteration cap of {limit} reached"),
            )
        } else {
            Expr::value_atom(call.position(), n.to_string())
        }
    });
    (builder, calls)
}
