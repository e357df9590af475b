//! Node kinds and the delimiter table.

use std::fmt;

/// Kind of a bracketed list node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `( ... )`: a call; the head must evaluate to a procedure.
    Action,
    /// `{ ... }`: handed to a host runtime handler.
    Runtime,
    /// `[ ... ]`: never evaluated.
    Raw,
    /// `< ... >`: handed to a host prompt handler.
    Prompt,
    /// `# ... !`: a sequence of statements.
    Collection,
}

/// One row of the delimiter table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Delimiter {
    pub open: char,
    pub close: char,
    pub kind: ListKind,
}

/// Fixed opening/closing pairs. Not user-configurable.
pub const DELIMITERS: [Delimiter; 5] = [
    Delimiter {
        open: '(',
        close: ')',
        kind: ListKind::Action,
    },
    Delimiter {
        open: '{',
        close: '}',
        kind: ListKind::Runtime,
    },
    Delimiter {
        open: '[',
        close: ']',
        kind: ListKind::Raw,
    },
    Delimiter {
        open: '<',
        close: '>',
        kind: ListKind::Prompt,
    },
    Delimiter {
        open: '#',
        close: '!',
        kind: ListKind::Collection,
    },
];

impl ListKind {
    /// Look up the list kind opened by `c`.
    pub fn from_open(c: char) -> Option<ListKind> {
        DELIMITERS.iter().find(|d| d.open == c).map(|d| d.kind)
    }

    /// Look up the list kind closed by `c`.
    pub fn from_close(c: char) -> Option<ListKind> {
        DELIMITERS.iter().find(|d| d.close == c).map(|d| d.kind)
    }

    /// The table row for this kind.
    pub fn delimiter(self) -> Delimiter {
        match self {
            ListKind::Action => DELIMITERS[0],
            ListKind::Runtime => DELIMITERS[1],
            ListKind::Raw => DELIMITERS[2],
            ListKind::Prompt => DELIMITERS[3],
            ListKind::Collection => DELIMITERS[4],
        }
    }

    #[inline]
    pub fn open(self) -> char {
        self.delimiter().open
    }

    #[inline]
    pub fn close(self) -> char {
        self.delimiter().close
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Action => "action",
            ListKind::Runtime => "runtime",
            ListKind::Raw => "raw",
            ListKind::Prompt => "prompt",
            ListKind::Collection => "collection",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat view of every node kind, used in error messages and dumps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Atom,
    List(ListKind),
    Comment,
    Error,
    Procedure,
    Yield,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Atom => "atom",
            NodeKind::List(kind) => kind.as_str(),
            NodeKind::Comment => "comment",
            NodeKind::Error => "error",
            NodeKind::Procedure => "procedure",
            NodeKind::Yield => "yield",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
