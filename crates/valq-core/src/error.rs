//! Error types for value algorithms.

use thiserror::Error;

/// Errors surfaced by the algorithms in this crate.
///
/// `Break` is not a failure: it is a control signal that a matching
/// [`label_scope`](crate::label::label_scope) intercepts. It only becomes a
/// genuine error when it escapes every scope unmatched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation expected one value kind and received another.
    #[error("expected {expected}, found {found}")]
    CastMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A path segment's kind does not match the value it addresses.
    #[error("cannot index {kind} with {segment}")]
    PathSegmentType { kind: &'static str, segment: String },

    /// A strict traversal was applied to a leaf value with no children.
    #[error("cannot iterate over {kind}")]
    NotTraversable { kind: &'static str },

    /// Strict point access found no child at the given segment.
    #[error("no child {segment} in {kind}")]
    MissingChild { segment: String, kind: &'static str },

    /// Non-local exit signal carrying its label name.
    #[error("break out of unmatched label {0}")]
    Break(String),

    /// The execution context's cancellation flag was set.
    #[error("operation canceled")]
    Canceled,
}

impl Error {
    /// True when this is a break signal for the given label.
    pub fn is_break_for(&self, label: &str) -> bool {
        matches!(self, Error::Break(name) if name == label)
    }
}

/// Convenience alias used throughout valq-core.
pub type Result<T> = std::result::Result<T, Error>;
