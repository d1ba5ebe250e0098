use thiserror::Error;

/// Every way an operation on a [`RegexBuilder`](crate::RegexBuilder) can fail.
///
/// A failed operation never produces a new builder; the builder it was
/// called on is left untouched and can still be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A quantifier was applied to an empty fragment sequence.
    #[error("{op}() must follow a pattern part")]
    Sequence { op: &'static str },

    /// The last fragment already ends in a quantifier suffix.
    #[error("cannot apply {op}() after another quantifier in {fragment:?}")]
    DoubleQuantifier { op: &'static str, fragment: String },

    /// `one_or_more()` directly after `word()`, which is already one-or-more.
    #[error("cannot apply one_or_more() after word(), it already includes +")]
    RedundantQuantifier,

    /// A counted repeat directly after `word()`.
    #[error("cannot apply {op}() after word(), it already includes +")]
    IncompatibleQuantifier { op: &'static str },

    /// The last fragment is an anchor or empty, so there is nothing to repeat.
    #[error("cannot apply {op}() to {fragment:?}")]
    NotQuantifiable { op: &'static str, fragment: String },

    #[error("{op}() {reason}")]
    Argument { op: &'static str, reason: String },

    #[error("unknown operation {0:?}")]
    UnknownOperation(String),

    /// Malformed chain text handed to the parser.
    #[error("{reason} at {pos}")]
    Syntax { pos: usize, reason: &'static str },

    #[error("invalid regex flag {0:?}")]
    InvalidFlag(char),

    /// The host engine rejected the rendered pattern.
    #[error("failed to compile {pattern:?}: {message}")]
    Compile { pattern: String, message: String },

    /// The backtracking engine gave up while matching.
    #[error("matching against {pattern:?} failed: {message}")]
    Match { pattern: String, message: String },
}

impl Error {
    pub(crate) fn argument(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Argument { op, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
