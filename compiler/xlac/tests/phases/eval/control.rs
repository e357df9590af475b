//! Conditionals, loops and early exit.

use pretty_assertions::assert_eq;
use xla_diagnostic::ErrorCode;

use crate::common::{counting, run, run_with, with_iteration_cap};

#[test]
fn countdown_loop_yields_result() {
    let source = "
        (def n 3)
        (def result (do
            (set n (dec n))
            (if n (put n) (yield liftoff))))
        (put result)
    ";
    let outcome = run_with(counting(), source);
    assert_eq!(outcome.output, "2\n1\nliftoff\n");
    assert_eq!(outcome.value_text(), "liftoff");
}

#[test]
fn loop_without_yield_stops_at_cap() {
    let (builder, calls) = with_iteration_cap(counting(), 50);
    let outcome = run_with(builder, "(put start)\n(do (tick))");
    assert_eq!(outcome.output, "start\n");
    let diag = outcome.diagnostic();
    assert_eq!(diag.code, ErrorCode::E3099);
    assert_eq!(diag.message, "iteration cap of 50 reached");
    assert_eq!(calls.get(), 51);
}

#[test]
fn yield_ends_every_enclosing_body() {
    let source = "
        (def find (fn [] (yield found) (put unreachable)))
        (def outer (fn [] (find) (put skipped)))
        (def wrapper (fn [] (put (outer)) (ref after)))
        (put (wrapper))
    ";
    let outcome = run(source);
    assert_eq!(outcome.output, "found\nafter\n");
}

#[test]
fn loop_ends_when_called_procedure_yields() {
    let (builder, calls) = with_iteration_cap(counting(), 20);
    let outcome = run_with(builder, "(def step (fn [] (tick) (yield stop))) (put (do (step)))");
    assert_eq!(outcome.output, "stop\n");
    assert_eq!(outcome.value_text(), "stop");
    assert_eq!(calls.get(), 1);
}

#[test]
fn loop_exit_test_inside_procedure() {
    let source = "
        (def n 3)
        (def step (fn [] (set n (dec n)) (if n (put n) (yield done))))
        (put (do (step)))
    ";
    let outcome = run_with(counting(), source);
    assert_eq!(outcome.output, "2\n1\ndone\n");
}

#[test]
fn if_selects_branch_by_integer() {
    let outcome = run("(if 1 (put yes) (put no)) (if 0 (put yes) (put no)) (if 0 (put never))");
    assert_eq!(outcome.output, "yes\nno\n");
    assert_eq!(outcome.value_text(), "0");
}

#[test]
fn if_rejects_non_integer_condition() {
    let outcome = run("(if maybe (put yes))");
    assert_eq!(outcome.diagnostic().code, ErrorCode::E3009);
}

#[test]
fn runaway_recursion_is_a_diagnostic() {
    let builder = counting().max_depth(200);
    let outcome = run_with(builder, "(def f (fn [n] (f (inc n)))) (f 0)");
    assert_eq!(outcome.diagnostic().code, ErrorCode::E3010);
}
