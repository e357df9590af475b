//! Complete programs.

use pretty_assertions::assert_eq;
use xla_diagnostic::ErrorCode;
use xla_eval::{Interpreter, UnboundAtoms};

use crate::common::{counting, run, run_with};

#[test]
fn header_program_prints_bound_value() {
    let outcome = run("#! (def x 5) (put x) !");
    assert_eq!(outcome.output, "5\n");
    assert_eq!(outcome.value_text(), "5");
}

#[test]
fn unbound_atoms_print_as_themselves() {
    let outcome = run("(put hello world)");
    assert_eq!(outcome.output, "hello\nworld\n");
}

#[test]
fn strict_mode_reports_unbound_atom() {
    let builder = Interpreter::builder().unbound_atoms(UnboundAtoms::Error);
    let outcome = run_with(builder, "(def greeting 42)\n(put greeting)\n(put greting)");
    assert_eq!(outcome.output, "42\n");
    let diag = outcome.diagnostic();
    assert_eq!(diag.code, ErrorCode::E3013);
    assert_eq!(diag.primary_position(), Some(38));
}

#[test]
fn counter_closure_keeps_private_state() {
    let source = "
        (def make-counter (fn []
            (let n 0)
            (fn [] (set n (inc n)) n)))
        (def a (make-counter))
        (def b (make-counter))
        (a) (a) (b)
        (put (a) (b))
    ";
    let outcome = run_with(counting(), source);
    assert_eq!(outcome.output, "3\n2\n");
}

#[test]
fn higher_order_procedures() {
    let source = "
        (def twice (fn [f x] (f (f x))))
        (put (twice inc 5))
        (put (twice (fn [v] (dec v)) 5))
    ";
    let outcome = run_with(counting(), source);
    assert_eq!(outcome.output, "7\n3\n");
}

#[test]
fn output_before_error_is_kept() {
    let outcome = run("(put one) (put two) (def x 1) (def x 2) (put three)");
    assert_eq!(outcome.output, "one\ntwo\n");
    let diag = outcome.diagnostic();
    assert_eq!(diag.code, ErrorCode::E3011);
    assert_eq!(
        diag.message,
        "identifier 'x' already defined in this scope"
    );
}

#[test]
fn calling_data_is_an_error() {
    let outcome = run("(def y 1)\n(put (y))");
    let diag = outcome.diagnostic();
    assert_eq!(diag.code, ErrorCode::E3002);
    assert_eq!(diag.primary_position(), Some(16));
}

#[test]
fn runtime_lists_need_a_handler() {
    let outcome = run("(put {query})");
    assert_eq!(outcome.diagnostic().code, ErrorCode::E3014);

    let builder = Interpreter::builder().runtime_handler(|_, node, _| {
        xla_ir::Expr::value_atom(node.position, "answered")
    });
    let outcome = run_with(builder, "(put {query})");
    assert_eq!(outcome.output, "answered\n");
}
