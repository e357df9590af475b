//! Rendering trees back to text.
//!
//! `Display` produces source text that the collector reads back into the
//! same shape: tags are written as leading `:tag` atoms, which tag collapse
//! attaches to the same node again. Runtime-only nodes (errors, procedures)
//! render in a readable form that is not meant to be re-parsed.

use std::fmt::{self, Write};

use xla_lexer_core::{AtomPattern, COMMENT_START, TAG_PREFIX};

use crate::{Expr, ExprKind, ListKind, Procedure};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags.iter() {
            write!(f, "{TAG_PREFIX}{tag} ")?;
        }
        match &self.kind {
            ExprKind::Atom { text, .. } => f.write_str(text),
            ExprKind::List { kind, items } => {
                f.write_char(kind.open())?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(kind.close())
            }
            ExprKind::Comment(text) => writeln!(f, "{COMMENT_START}{text}"),
            ExprKind::Error { message, .. } => f.write_str(message),
            ExprKind::Procedure(procedure) => write!(f, "{procedure}"),
            ExprKind::Yield(inner) => write!(f, "{inner}"),
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Procedure::Special(_) | Procedure::Native(_) => f.write_str(self.name()),
            Procedure::Closure(closure) => {
                write!(f, "(fn [{}]", closure.params.join(" "))?;
                for expr in &closure.body {
                    write!(f, " {expr}")?;
                }
                f.write_char(')')
            }
        }
    }
}

/// Render a whole program. The top-level collection is implicit, so its
/// children are written one per line without the `#`/`!` pair.
pub fn render_program(root: &Expr) -> String {
    match &root.kind {
        ExprKind::List {
            kind: ListKind::Collection,
            items,
        } if root.tags.is_empty() => {
            let mut out = String::new();
            for item in items {
                let _ = write!(out, "{item}");
                if !matches!(item.kind, ExprKind::Comment(_)) {
                    out.push('\n');
                }
            }
            out
        }
        _ => root.to_string(),
    }
}

/// Indented one-node-per-line dump showing kind, pattern, position and tags.
pub fn dump_tree(root: &Expr) -> String {
    let mut out = String::new();
    dump_node(root, 0, &mut out);
    out
}

fn dump_node(expr: &Expr, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{}", expr.node_kind());
    match &expr.kind {
        ExprKind::Atom { text, pattern } => {
            let _ = write!(out, " {text:?}");
            if *pattern != AtomPattern::None {
                let _ = write!(out, " {pattern}");
            }
        }
        ExprKind::Comment(text) => {
            let _ = write!(out, " {text:?}");
        }
        ExprKind::Error { kind, message } => {
            let _ = write!(out, " {kind} {message:?}");
        }
        ExprKind::Procedure(procedure) => {
            let _ = write!(out, " {}", procedure.name());
        }
        ExprKind::List { .. } | ExprKind::Yield(_) => {}
    }
    let _ = write!(out, " @{}", expr.position);
    if !expr.tags.is_empty() {
        let tags: Vec<&str> = expr.tags.iter().collect();
        let _ = write!(out, " [{}]", tags.join(", "));
    }
    out.push('\n');

    match &expr.kind {
        ExprKind::List { items, .. } => {
            for item in items {
                dump_node(item, depth + 1, out);
            }
        }
        ExprKind::Yield(inner) => dump_node(inner, depth + 1, out),
        _ => {}
    }
}
