//! Categories of error nodes.

use std::fmt;

/// Machine-readable category carried by every error node.
///
/// The human-readable text lives next to it in [`crate::ExprKind::Error`];
/// `xla_diagnostic` maps each category to a stable error code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Collector
    /// End of input inside an open bracket.
    UnclosedDelimiter,
    /// A closing bracket that does not match the open one.
    MismatchedDelimiter,
    /// Non-bracketed content directly inside a collection.
    BareCollectionItem,
    /// Input left over after the top-level collection closed.
    TrailingContent,

    // Tag collapse
    /// A node that the collector never produces.
    UnexpectedNode,

    // Evaluator
    EmptyAction,
    NotAProcedure,
    ArityMismatch,
    ExpectedAtom,
    ExpectedParams,
    DuplicateParameter,
    ExpectedAction,
    ExpectedBranch,
    ConditionNotInteger,
    AlreadyDefined,
    Undefined,
    UnboundAtom,
    NotImplemented,
    RecursionLimit,
    /// Raised by a host builtin.
    Host,

    // Resources
    MalformedResource,
    UnknownResourceType,
    UnknownResourceName,
}

impl ErrorKind {
    /// Whether the collector raised this error.
    pub fn is_parse(self) -> bool {
        matches!(
            self,
            ErrorKind::UnclosedDelimiter
                | ErrorKind::MismatchedDelimiter
                | ErrorKind::BareCollectionItem
                | ErrorKind::TrailingContent
        )
    }

    /// Whether resource resolution raised this error.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            ErrorKind::MalformedResource
                | ErrorKind::UnknownResourceType
                | ErrorKind::UnknownResourceName
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
