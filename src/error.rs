//! Error types for callers that want strict resolution.
//!
//! Resolution itself never fails: an unresolvable callable degrades to a `()`
//! result. These errors only appear when a caller explicitly asks for more,
//! through [`Resolution::require_known`](crate::Resolution::require_known) or
//! [`ResolutionReport::expect_outcome`](crate::ResolutionReport::expect_outcome).

use crate::classification::Classification;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A known result type was required but the callable was unresolved.
    #[error("result type of `{callable}` could not be resolved")]
    UnknownResult { callable: String },

    /// A report did not carry the expected classification.
    #[error("`{callable}` resolved as {actual}, expected {expected}")]
    OutcomeMismatch {
        callable: String,
        expected: Classification,
        actual: Classification,
    },

    /// Report serialization failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ResolveError {
    pub fn unknown_result(callable: impl Into<String>) -> Self {
        Self::UnknownResult {
            callable: callable.into(),
        }
    }

    /// Stable code for programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownResult { .. } => "R001",
            Self::OutcomeMismatch { .. } => "R002",
            Self::Serialization(_) => "R010",
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
