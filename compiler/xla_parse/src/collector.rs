//! The collector: characters to a raw tree.
//!
//! The whole input is the body of an implicit top-level collection that ends
//! at its closing `!` or at end of input. Inside it every item must be a
//! bracketed construct or a comment. Brackets nest recursively; `#` opens a
//! nested collection only where a collection item is expected, and `!`
//! closes one only inside a collection, so both are ordinary atom
//! characters inside the other list kinds.

use tracing::trace;
use xla_ir::{ErrorKind, Expr, ListKind};
use xla_lexer_core::{is_whitespace, Cursor, COMMENT_START};
use xla_stack::ensure_sufficient_stack;

/// Collect `source` into a raw tree.
///
/// Returns the top-level collection (position 0), or a single error node if
/// the input is malformed. No partial tree is returned on error.
#[tracing::instrument(level = "debug", skip_all, fields(chars = source.chars().count()))]
pub fn parse(source: &str) -> Expr {
    let mut collector = Collector {
        cursor: Cursor::new(source),
    };
    collector.collect()
}

/// Where a list body ends.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Frame {
    /// The implicit top level: its `!` or end of input.
    TopLevel,
    /// A bracket opened at the given position: its closing delimiter only.
    Nested(u32),
}

struct Collector {
    cursor: Cursor,
}

impl Collector {
    fn collect(&mut self) -> Expr {
        let root = match self.list(ListKind::Collection, 0, Frame::TopLevel) {
            Ok(root) => root,
            Err(error) => return error,
        };

        self.cursor.eat_while(is_whitespace);
        if !self.cursor.is_eof() {
            let pos = self.cursor.pos();
            return Expr::error(
                pos,
                ErrorKind::TrailingContent,
                format!("unexpected characters after end of collection at position {pos}"),
            );
        }
        root
    }

    /// Collect items up to the end of a list of `kind` whose opening bracket
    /// (if any) has already been consumed.
    fn list(&mut self, kind: ListKind, position: u32, frame: Frame) -> Result<Expr, Expr> {
        ensure_sufficient_stack(|| self.list_body(kind, position, frame))
    }

    fn list_body(&mut self, kind: ListKind, position: u32, frame: Frame) -> Result<Expr, Expr> {
        trace!(%kind, position, "enter list");
        let mut items = Vec::new();
        let mut atom_start: Option<u32> = None;

        loop {
            let Some(c) = self.cursor.current() else {
                self.flush_atom(&mut atom_start, &mut items);
                return match frame {
                    Frame::TopLevel => Ok(Expr::list(position, kind, items)),
                    Frame::Nested(open) => Err(self.unclosed(kind, open)),
                };
            };

            if c == kind.close() {
                self.flush_atom(&mut atom_start, &mut items);
                self.cursor.bump();
                trace!(%kind, position, items = items.len(), "close list");
                return Ok(Expr::list(position, kind, items));
            }

            if is_whitespace(c) {
                self.flush_atom(&mut atom_start, &mut items);
                self.cursor.bump();
                continue;
            }

            if c == COMMENT_START {
                self.flush_atom(&mut atom_start, &mut items);
                let start = self.cursor.pos();
                self.cursor.bump();
                let text = self.cursor.eat_line();
                items.push(Expr::comment(start, text));
                continue;
            }

            if let Some(nested) = opened_by(c, kind) {
                self.flush_atom(&mut atom_start, &mut items);
                let open = self.cursor.pos();
                self.cursor.bump();
                items.push(self.list(nested, open, Frame::Nested(open))?);
                continue;
            }

            if let Some(closed) = ListKind::from_close(c) {
                if closed != ListKind::Collection {
                    return Err(self.mismatched(c, kind, frame));
                }
            }

            if atom_start.is_none() {
                if kind == ListKind::Collection {
                    return Err(Expr::error(
                        self.cursor.pos(),
                        ErrorKind::BareCollectionItem,
                        "all items inside a collection must start as a list type",
                    ));
                }
                atom_start = Some(self.cursor.pos());
            }
            self.cursor.bump();
        }
    }

    fn flush_atom(&self, atom_start: &mut Option<u32>, items: &mut Vec<Expr>) {
        if let Some(start) = atom_start.take() {
            items.push(Expr::atom(start, self.cursor.slice_from(start)));
        }
    }

    #[cold]
    fn unclosed(&self, kind: ListKind, open: u32) -> Expr {
        Expr::error(
            self.cursor.pos(),
            ErrorKind::UnclosedDelimiter,
            format!(
                "unclosed `{}` opened at position {open}: expected `{}` before end of input",
                kind.open(),
                kind.close()
            ),
        )
    }

    #[cold]
    fn mismatched(&self, found: char, kind: ListKind, frame: Frame) -> Expr {
        let message = match frame {
            Frame::TopLevel => format!("unexpected closing `{found}` with no matching opener"),
            Frame::Nested(open) => format!(
                "mismatched closing `{found}`: expected `{}` to close `{}` opened at position {open}",
                kind.close(),
                kind.open()
            ),
        };
        Expr::error(self.cursor.pos(), ErrorKind::MismatchedDelimiter, message)
    }
}

/// The list kind that `c` opens inside a list of kind `context`.
fn opened_by(c: char, context: ListKind) -> Option<ListKind> {
    match ListKind::from_open(c)? {
        ListKind::Collection if context != ListKind::Collection => None,
        kind => Some(kind),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
