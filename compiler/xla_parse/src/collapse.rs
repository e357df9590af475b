//! Tag collapse.
//!
//! Within every list, `:name` atoms are removed and `name` is attached to
//! the next non-tag, non-comment sibling. Tags left over at the end of a
//! list go to the last such sibling; a list made only of tags gets an empty
//! `[]` holder carrying them. Comments stay in place and never receive tags.
//!
//! The pass is idempotent: a collapsed tree contains no tag atoms, so a
//! second run changes nothing.

use tracing::trace;
use xla_ir::{ErrorKind, Expr, ExprKind, ListKind};
use xla_lexer_core::{AtomPattern, TAG_PREFIX};
use xla_stack::ensure_sufficient_stack;

/// Collapse tag markers in `expr` and all of its descendants.
///
/// Error nodes pass through unchanged. Procedure and yield nodes never come
/// out of the collector; finding one yields an error node.
pub fn collapse(expr: Expr) -> Expr {
    ensure_sufficient_stack(|| collapse_node(expr))
}

fn collapse_node(expr: Expr) -> Expr {
    let Expr {
        position,
        kind,
        tags,
    } = expr;

    match kind {
        ExprKind::List { kind, items } => match collapse_items(position, items) {
            Ok(items) => Expr {
                position,
                kind: ExprKind::List { kind, items },
                tags,
            },
            Err(error) => error,
        },
        ExprKind::Procedure(_) | ExprKind::Yield(_) => unexpected_node(position, &kind),
        kind => Expr {
            position,
            kind,
            tags,
        },
    }
}

/// Tags waiting for the next sibling.
#[derive(Default)]
struct Pending {
    names: Vec<String>,
    first_position: Option<u32>,
}

impl Pending {
    fn push(&mut self, position: u32, name: &str) {
        self.first_position.get_or_insert(position);
        if !name.is_empty() {
            self.names.push(name.to_owned());
        }
    }

    fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn attach_to(&mut self, target: &mut Expr) {
        if !self.names.is_empty() {
            trace!(position = target.position, tags = ?self.names, "attach tags");
        }
        target.tags.extend(self.names.drain(..));
        self.first_position = None;
    }
}

fn collapse_items(list_position: u32, items: Vec<Expr>) -> Result<Vec<Expr>, Expr> {
    let mut out: Vec<Expr> = Vec::with_capacity(items.len());
    let mut pending = Pending::default();

    for item in items {
        if let Some(name) = tag_name(&item) {
            pending.push(item.position, name);
            continue;
        }
        if matches!(item.kind, ExprKind::Comment(_)) {
            out.push(item);
            continue;
        }

        let mut child = collapse(item);
        if child.is_error() {
            return Err(child);
        }
        pending.attach_to(&mut child);
        out.push(child);
    }

    if !pending.is_empty() {
        let last_value = out
            .iter_mut()
            .rev()
            .find(|e| !matches!(e.kind, ExprKind::Comment(_)));
        if let Some(last) = last_value {
            pending.attach_to(last);
        } else {
            let position = pending.first_position.unwrap_or(list_position);
            let mut holder = Expr::list(position, ListKind::Raw, Vec::new());
            pending.attach_to(&mut holder);
            out.push(holder);
        }
    }

    Ok(out)
}

fn tag_name(expr: &Expr) -> Option<&str> {
    match &expr.kind {
        ExprKind::Atom {
            text,
            pattern: AtomPattern::Tag,
        } => Some(text.strip_prefix(TAG_PREFIX).unwrap_or(text)),
        _ => None,
    }
}

#[cold]
fn unexpected_node(position: u32, kind: &ExprKind) -> Expr {
    let what = match kind {
        ExprKind::Procedure(_) => "procedure",
        _ => "yield",
    };
    Expr::error(
        position,
        ErrorKind::UnexpectedNode,
        format!("unexpected data type in element: {what} values never appear in source trees"),
    )
}
