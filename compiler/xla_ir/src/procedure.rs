//! Procedure values and the seam between procedures and the evaluator.
//!
//! Every procedure receives its arguments *unevaluated* together with the
//! caller's environment, and decides itself what to evaluate. Native
//! procedures reach back into the interpreter through the [`Executor`]
//! trait, which keeps this crate free of any evaluator dependency.

use std::fmt;
use std::rc::Rc;

use crate::{Env, Expr};

/// Interpreter services available to native procedures.
pub trait Executor {
    /// Evaluate `expr` in `env`.
    fn eval(&mut self, expr: &Expr, env: &Env) -> Expr;

    /// Write one line to the interpreter's output sink.
    fn emit(&mut self, text: &str);
}

/// A procedure invocation: the whole action node, its unevaluated
/// arguments (everything after the head) and the caller's environment.
#[derive(Clone, Copy)]
pub struct Call<'a> {
    pub node: &'a Expr,
    pub args: &'a [Expr],
    pub env: &'a Env,
}

impl Call<'_> {
    /// Source position of the call, used for errors.
    #[inline]
    pub fn position(&self) -> u32 {
        self.node.position
    }
}

/// Signature of a host-provided builtin.
pub type NativeFn = Rc<dyn Fn(&mut dyn Executor, Call<'_>) -> Expr>;

/// Built-in forms with dedicated evaluation rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    Def,
    Let,
    Set,
    Fn,
    Ref,
    Yield,
    Do,
    If,
    Put,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 9] = [
        SpecialForm::Def,
        SpecialForm::Let,
        SpecialForm::Set,
        SpecialForm::Fn,
        SpecialForm::Ref,
        SpecialForm::Yield,
        SpecialForm::Do,
        SpecialForm::If,
        SpecialForm::Put,
    ];

    /// The keyword the form is bound to in the root environment.
    pub fn keyword(self) -> &'static str {
        match self {
            SpecialForm::Def => "def",
            SpecialForm::Let => "let",
            SpecialForm::Set => "set",
            SpecialForm::Fn => "fn",
            SpecialForm::Ref => "ref",
            SpecialForm::Yield => "yield",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::Put => "put",
        }
    }

    pub fn from_keyword(word: &str) -> Option<SpecialForm> {
        SpecialForm::ALL.into_iter().find(|f| f.keyword() == word)
    }
}

/// A host builtin bound under `name`.
#[derive(Clone)]
pub struct NativeProc {
    pub name: String,
    pub func: NativeFn,
}

impl fmt::Debug for NativeProc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeProc")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A user procedure created by `fn`.
pub struct Closure {
    pub params: Vec<String>,
    pub body: Vec<Expr>,
    /// Environment active where the `fn` form was evaluated.
    pub env: Env,
}

impl fmt::Debug for Closure {
    // The captured env may contain this closure; print only its depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body_len", &self.body.len())
            .field("env_depth", &self.env.depth())
            .finish()
    }
}

/// A first-class procedure value.
#[derive(Clone, Debug)]
pub enum Procedure {
    Special(SpecialForm),
    Native(NativeProc),
    Closure(Rc<Closure>),
}

impl Procedure {
    /// Wrap a host function as a procedure named `name`.
    pub fn native(
        name: impl Into<String>,
        func: impl Fn(&mut dyn Executor, Call<'_>) -> Expr + 'static,
    ) -> Self {
        Procedure::Native(NativeProc {
            name: name.into(),
            func: Rc::new(func),
        })
    }

    pub fn closure(params: Vec<String>, body: Vec<Expr>, env: Env) -> Self {
        Procedure::Closure(Rc::new(Closure { params, body, env }))
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        match self {
            Procedure::Special(form) => form.keyword(),
            Procedure::Native(native) => &native.name,
            Procedure::Closure(_) => "fn",
        }
    }
}

impl PartialEq for Procedure {
    /// Procedures compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Procedure::Special(a), Procedure::Special(b)) => a == b,
            (Procedure::Native(a), Procedure::Native(b)) => {
                a.name == b.name && Rc::ptr_eq(&a.func, &b.func)
            }
            (Procedure::Closure(a), Procedure::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
