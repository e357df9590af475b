use std::fmt;

use xla_ir::ErrorKind;

/// Stable codes for every error an XLA program can produce.
///
/// Format: E#### where the first digit names the phase:
/// - E1xxx: collector (bracket structure)
/// - E2xxx: tag collapse
/// - E3xxx: evaluation
/// - E4xxx: resource references
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Collector Errors (E1xxx)
    /// Unclosed delimiter
    E1001,
    /// Mismatched closing delimiter
    E1002,
    /// Bare item inside a collection
    E1003,
    /// Content after the top-level collection
    E1004,

    // Collapse Errors (E2xxx)
    /// Node kind that never appears in a source tree
    E2001,

    // Evaluation Errors (E3xxx)
    /// Empty action
    E3001,
    /// Head of an action is not a procedure
    E3002,
    /// Wrong number of arguments
    E3003,
    /// Expected an atom
    E3004,
    /// Expected a raw parameter list
    E3005,
    /// Duplicate parameter name
    E3006,
    /// Expected an action
    E3007,
    /// Expected an action or runtime branch
    E3008,
    /// Condition is not an integer
    E3009,
    /// Evaluation nested too deeply
    E3010,
    /// Name already defined in this scope
    E3011,
    /// Name not defined in any accessible scope
    E3012,
    /// Unbound atom under strict evaluation
    E3013,
    /// Runtime or prompt list with no handler
    E3014,
    /// Error raised by a host builtin
    E3099,

    // Resource Errors (E4xxx)
    /// Malformed resource reference
    E4001,
    /// Unknown resource type
    E4002,
    /// Unknown resource name
    E4003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 23] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
        ErrorCode::E3008,
        ErrorCode::E3009,
        ErrorCode::E3010,
        ErrorCode::E3011,
        ErrorCode::E3012,
        ErrorCode::E3013,
        ErrorCode::E3014,
        ErrorCode::E3099,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
    ];

    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Collector
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            // Collapse
            ErrorCode::E2001 => "E2001",
            // Evaluation
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E3009 => "E3009",
            ErrorCode::E3010 => "E3010",
            ErrorCode::E3011 => "E3011",
            ErrorCode::E3012 => "E3012",
            ErrorCode::E3013 => "E3013",
            ErrorCode::E3014 => "E3014",
            ErrorCode::E3099 => "E3099",
            // Resources
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
        }
    }

    /// The code reported for an error node of the given kind.
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::UnclosedDelimiter => ErrorCode::E1001,
            ErrorKind::MismatchedDelimiter => ErrorCode::E1002,
            ErrorKind::BareCollectionItem => ErrorCode::E1003,
            ErrorKind::TrailingContent => ErrorCode::E1004,
            ErrorKind::UnexpectedNode => ErrorCode::E2001,
            ErrorKind::EmptyAction => ErrorCode::E3001,
            ErrorKind::NotAProcedure => ErrorCode::E3002,
            ErrorKind::ArityMismatch => ErrorCode::E3003,
            ErrorKind::ExpectedAtom => ErrorCode::E3004,
            ErrorKind::ExpectedParams => ErrorCode::E3005,
            ErrorKind::DuplicateParameter => ErrorCode::E3006,
            ErrorKind::ExpectedAction => ErrorCode::E3007,
            ErrorKind::ExpectedBranch => ErrorCode::E3008,
            ErrorKind::ConditionNotInteger => ErrorCode::E3009,
            ErrorKind::RecursionLimit => ErrorCode::E3010,
            ErrorKind::AlreadyDefined => ErrorCode::E3011,
            ErrorKind::Undefined => ErrorCode::E3012,
            ErrorKind::UnboundAtom => ErrorCode::E3013,
            ErrorKind::NotImplemented => ErrorCode::E3014,
            ErrorKind::Host => ErrorCode::E3099,
            ErrorKind::MalformedResource => ErrorCode::E4001,
            ErrorKind::UnknownResourceType => ErrorCode::E4002,
            ErrorKind::UnknownResourceName => ErrorCode::E4003,
        }
    }

    /// Check if this is a collector error (E1xxx range).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is an evaluation error (E3xxx range).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Check if this is a resource error (E4xxx range).
    pub fn is_resource_error(&self) -> bool {
        matches!(self, ErrorCode::E4001 | ErrorCode::E4002 | ErrorCode::E4003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
