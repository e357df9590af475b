//! Core diagnostic types.
//!
//! A [`Diagnostic`] is built either by hand with the builder methods or from
//! an error node with [`Diagnostic::from_error_node`].

use std::fmt;

use xla_ir::{ErrorKind, Expr};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A message attached to a character position in the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// Character offset from the start of the source.
    pub position: u32,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(position: u32, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(position: u32, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A rich diagnostic with code, message, labels and fixes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    #[must_use]
    pub fn with_label(mut self, position: u32, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(position, message));
        self
    }

    /// Add a secondary label for context.
    #[must_use]
    pub fn with_secondary_label(mut self, position: u32, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(position, message));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Position of the first primary label.
    pub fn primary_position(&self) -> Option<u32> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| l.position)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Describe an error node.
    ///
    /// Returns `None` when `expr` is not an error. The node's message becomes
    /// the diagnostic message and its position the primary label.
    pub fn from_error_node(expr: &Expr) -> Option<Diagnostic> {
        let (kind, message) = expr.as_error()?;
        let position = expr.position;
        let diag = Diagnostic::error(ErrorCode::from_kind(kind))
            .with_message(message)
            .with_label(position, label_text(kind));

        let diag = match kind {
            ErrorKind::UnclosedDelimiter => with_opener(diag, message, "unclosed delimiter")
                .with_suggestion("add the missing closing delimiter"),
            ErrorKind::MismatchedDelimiter => {
                with_opener(diag, message, "this delimiter is still open")
            }
            ErrorKind::BareCollectionItem => diag.with_suggestion(
                "wrap the item in brackets, for example `(put hello)` or `[hello]`",
            ),
            ErrorKind::TrailingContent => diag
                .with_note("a program ends at the `!` that closes its top-level collection"),
            ErrorKind::UnexpectedNode => {
                diag.with_note("procedure and yield values only exist during evaluation")
            }
            ErrorKind::EmptyAction => {
                diag.with_suggestion("an action starts with a procedure, as in `(put hello)`")
            }
            ErrorKind::NotAProcedure => {
                diag.with_suggestion("use a raw list `[...]` for data that should not be called")
            }
            ErrorKind::ExpectedParams | ErrorKind::DuplicateParameter => {
                diag.with_suggestion("parameters are a raw list of names, as in `(fn [a b] ...)`")
            }
            ErrorKind::ConditionNotInteger => {
                diag.with_note("`if` treats 0 as false and any other integer as true")
            }
            ErrorKind::AlreadyDefined => {
                diag.with_suggestion("use `set` to change an existing binding")
            }
            ErrorKind::Undefined => {
                diag.with_suggestion("introduce the name with `def` or `let` first")
            }
            ErrorKind::UnboundAtom => diag
                .with_note("strict evaluation rejects plain atoms that name no binding"),
            ErrorKind::NotImplemented => {
                diag.with_note("runtime `{...}` and prompt `<...>` lists need a host handler")
            }
            ErrorKind::RecursionLimit => {
                diag.with_suggestion("raise the limit with `--max-depth=<n>`")
            }
            ErrorKind::MalformedResource => {
                diag.with_note("resource references have the form `@type/name`")
            }
            ErrorKind::UnknownResourceType | ErrorKind::UnknownResourceName => diag
                .with_note("resources are loaded from the directory given by `--resources`"),
            ErrorKind::ArityMismatch
            | ErrorKind::ExpectedAtom
            | ErrorKind::ExpectedAction
            | ErrorKind::ExpectedBranch
            | ErrorKind::Host => diag,
        };
        Some(diag)
    }
}

fn label_text(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::UnclosedDelimiter => "input ends here",
        ErrorKind::MismatchedDelimiter => "unexpected closing delimiter",
        ErrorKind::BareCollectionItem => "expected a bracketed item",
        ErrorKind::TrailingContent => "unexpected content",
        ErrorKind::UnexpectedNode => "not valid in a source tree",
        ErrorKind::EmptyAction => "empty action",
        ErrorKind::NotAProcedure => "not a procedure",
        ErrorKind::ArityMismatch => "wrong number of arguments",
        ErrorKind::ExpectedAtom => "expected an atom",
        ErrorKind::ExpectedParams => "expected a parameter list",
        ErrorKind::DuplicateParameter => "duplicate parameter",
        ErrorKind::ExpectedAction => "expected an action",
        ErrorKind::ExpectedBranch => "expected an action or runtime branch",
        ErrorKind::ConditionNotInteger => "not an integer",
        ErrorKind::AlreadyDefined => "already defined in this scope",
        ErrorKind::Undefined => "not defined",
        ErrorKind::UnboundAtom => "unbound atom",
        ErrorKind::NotImplemented => "no handler",
        ErrorKind::RecursionLimit => "nesting limit reached here",
        ErrorKind::Host => "raised here",
        ErrorKind::MalformedResource => "malformed reference",
        ErrorKind::UnknownResourceType => "unknown resource type",
        ErrorKind::UnknownResourceName => "unknown resource",
    }
}

/// Add a secondary label at the opener named by a collector message.
fn with_opener(diag: Diagnostic, message: &str, label: &str) -> Diagnostic {
    match opened_at(message) {
        Some(open) => diag.with_secondary_label(open, label),
        None => diag,
    }
}

/// Extract `N` from "... opened at position N ...".
fn opened_at(message: &str) -> Option<u32> {
    let (_, rest) = message.split_once("opened at position ")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
