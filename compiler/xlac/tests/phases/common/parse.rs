//! Parse phase test utilities.

use xla_diagnostic::Diagnostic;
use xla_ir::{dump_tree, Expr, ListKind};

/// Parse and collapse `source`, panicking with the diagnostic on failure.
pub fn parse_ok(source: &str) -> Expr {
    match xlac::check_source(source) {
        Ok(tree) => tree,
        Err(diag) => panic!("expected successful parse of {source:?}, got {diag:?}"),
    }
}

/// Parse `source`, expecting a diagnostic.
pub fn parse_err(source: &str) -> Diagnostic {
    match xlac::check_source(source) {
        Ok(tree) => panic!("expected parse error, got:\n{}", dump_tree(&tree)),
        Err(diag) => diag,
    }
}

/// Top-level statements of a parsed program.
pub fn statements(root: &Expr) -> &[Expr] {
    match root.as_list() {
        Some((ListKind::Collection, items)) => items,
        _ => panic!("expected root collection, got:\n{}", dump_tree(root)),
    }
}
