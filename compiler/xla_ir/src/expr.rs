//! The expression node.

use xla_lexer_core::{classify, classify_atom, AtomPattern};

use crate::{ErrorKind, ListKind, NodeKind, Procedure, Tags};

/// A node of the program tree.
///
/// `position` is the char offset of the node in its source: the first
/// character of an atom, the opening bracket of a list, the `;` of a comment.
/// Nodes created at runtime carry the position of the node that produced
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub position: u32,
    pub kind: ExprKind,
    pub tags: Tags,
}

/// Payload of a node. The variant fixes whether it holds text or children.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Atom { text: String, pattern: AtomPattern },
    List { kind: ListKind, items: Vec<Expr> },
    /// Comment text without the leading `;` and trailing newline.
    Comment(String),
    Error { kind: ErrorKind, message: String },
    Procedure(Procedure),
    /// Early-exit signal carrying the yielded value.
    Yield(Box<Expr>),
}

impl Expr {
    #[inline]
    pub fn new(position: u32, kind: ExprKind) -> Self {
        Expr {
            position,
            kind,
            tags: Tags::new(),
        }
    }

    /// An atom as written in source, classified with tag detection.
    pub fn atom(position: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let pattern = classify_atom(&text);
        Expr::new(position, ExprKind::Atom { text, pattern })
    }

    /// An atom produced at runtime. Never classified as a tag.
    pub fn value_atom(position: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let pattern = classify(&text);
        Expr::new(position, ExprKind::Atom { text, pattern })
    }

    pub fn typed_atom(position: u32, text: impl Into<String>, pattern: AtomPattern) -> Self {
        Expr::new(
            position,
            ExprKind::Atom {
                text: text.into(),
                pattern,
            },
        )
    }

    pub fn list(position: u32, kind: ListKind, items: Vec<Expr>) -> Self {
        Expr::new(position, ExprKind::List { kind, items })
    }

    pub fn comment(position: u32, text: impl Into<String>) -> Self {
        Expr::new(position, ExprKind::Comment(text.into()))
    }

    #[cold]
    pub fn error(position: u32, kind: ErrorKind, message: impl Into<String>) -> Self {
        Expr::new(
            position,
            ExprKind::Error {
                kind,
                message: message.into(),
            },
        )
    }

    pub fn procedure(position: u32, procedure: Procedure) -> Self {
        Expr::new(position, ExprKind::Procedure(procedure))
    }

    /// Wrap `value` as a yield signal. Already-yielded values are not
    /// wrapped twice.
    pub fn yielded(value: Expr) -> Self {
        if value.is_yield() {
            return value;
        }
        Expr::new(value.position, ExprKind::Yield(Box::new(value)))
    }

    /// The no-op value: an empty collection.
    pub fn empty(position: u32) -> Self {
        Expr::list(position, ListKind::Collection, Vec::new())
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags.extend(tags);
        self
    }

    // --- queries ---

    pub fn node_kind(&self) -> NodeKind {
        match &self.kind {
            ExprKind::Atom { .. } => NodeKind::Atom,
            ExprKind::List { kind, .. } => NodeKind::List(*kind),
            ExprKind::Comment(_) => NodeKind::Comment,
            ExprKind::Error { .. } => NodeKind::Error,
            ExprKind::Procedure(_) => NodeKind::Procedure,
            ExprKind::Yield(_) => NodeKind::Yield,
        }
    }

    /// Atom text, if this is an atom.
    pub fn as_atom(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Atom { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Atom pattern, if this is an atom.
    pub fn pattern(&self) -> Option<AtomPattern> {
        match &self.kind {
            ExprKind::Atom { pattern, .. } => Some(*pattern),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<(ListKind, &[Expr])> {
        match &self.kind {
            ExprKind::List { kind, items } => Some((*kind, items)),
            _ => None,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        self.as_list().map(|(kind, _)| kind)
    }

    pub fn is_list_of(&self, kind: ListKind) -> bool {
        self.list_kind() == Some(kind)
    }

    pub fn as_procedure(&self) -> Option<&Procedure> {
        match &self.kind {
            ExprKind::Procedure(p) => Some(p),
            _ => None,
        }
    }

    /// `(kind, message)` if this is an error node.
    pub fn as_error(&self) -> Option<(ErrorKind, &str)> {
        match &self.kind {
            ExprKind::Error { kind, message } => Some((*kind, message)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, ExprKind::Error { .. })
    }

    #[inline]
    pub fn is_yield(&self) -> bool {
        matches!(self.kind, ExprKind::Yield(_))
    }

    /// Errors and yields both stop sequential evaluation.
    #[inline]
    pub fn is_signal(&self) -> bool {
        self.is_error() || self.is_yield()
    }

    /// The value inside a yield, or `self`.
    pub fn unwrap_yield(self) -> Expr {
        match self.kind {
            ExprKind::Yield(inner) => *inner,
            _ => self,
        }
    }

    /// Whether this is an integer atom whose value is zero.
    ///
    /// Works on the digits directly, so arbitrarily long literals are fine.
    pub fn is_zero_integer(&self) -> bool {
        match &self.kind {
            ExprKind::Atom {
                text,
                pattern: AtomPattern::Integer,
            } => text
                .trim_start_matches(|c: char| c == '+' || c == '-')
                .chars()
                .all(|c| c == '0' || c == '_'),
            _ => false,
        }
    }

    /// The final value of a program result: the last element, looking
    /// through nested collections.
    pub fn last_value(&self) -> &Expr {
        let mut current = self;
        while let ExprKind::List {
            kind: ListKind::Collection,
            items,
        } = &current.kind
        {
            match items.last() {
                Some(last) => current = last,
                None => break,
            }
        }
        if let ExprKind::Yield(inner) = &current.kind {
            return inner;
        }
        current
    }

    /// Text lines of a value as `put` writes them: atom text directly,
    /// collections depth-first, anything else in its rendered form.
    pub fn output_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        match &self.kind {
            ExprKind::Atom { text, .. } => out.push(text.clone()),
            ExprKind::List {
                kind: ListKind::Collection,
                items,
            } => {
                for item in items {
                    item.collect_lines(out);
                }
            }
            ExprKind::Comment(_) => {}
            ExprKind::Yield(inner) => inner.collect_lines(out),
            ExprKind::Error { message, .. } => out.push(message.clone()),
            ExprKind::List { .. } | ExprKind::Procedure(_) => out.push(self.to_string()),
        }
    }

    /// Newline-joined [`Expr::output_lines`].
    pub fn text_form(&self) -> String {
        self.output_lines().join("\n")
    }

    /// Structural equality ignoring positions.
    pub fn same_shape(&self, other: &Expr) -> bool {
        if self.tags != other.tags {
            return false;
        }
        match (&self.kind, &other.kind) {
            (ExprKind::List { kind: a, items: xs }, ExprKind::List { kind: b, items: ys }) => {
                a == b && xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.same_shape(y))
            }
            (ExprKind::Yield(a), ExprKind::Yield(b)) => a.same_shape(b),
            (a, b) => a == b,
        }
    }

    /// Visit this node and every descendant in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        visit(self);
        match &self.kind {
            ExprKind::List { items, .. } => {
                for item in items {
                    item.walk(visit);
                }
            }
            ExprKind::Yield(inner) => inner.walk(visit),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
