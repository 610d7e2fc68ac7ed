//! Error types for path validation and paginated fetching.

use std::fmt;

pub use crate::config::validation::ConfigurationError;

/// Result alias for operations that only fail on an invalid path set.
pub type PathResult<T> = std::result::Result<T, MalformedPath>;

/// Why a path set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A fallback alternative is itself a fallback.
    NestedFallback,
    /// A fallback lists no alternatives.
    EmptyFallback,
    /// A branch carries no sub-paths.
    EmptyBranch,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NestedFallback => {
                f.write_str("fallback alternatives cannot nest another fallback")
            }
            MalformedReason::EmptyFallback => f.write_str("fallback has no alternatives"),
            MalformedReason::EmptyBranch => f.write_str("branch has no sub-paths"),
        }
    }
}

/// A path set that cannot be evaluated.
///
/// `path` and `segment` locate the offending segment in the outermost path
/// set, even when the defect sits inside a branch sub-path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed path {path}, segment {segment}: {reason}")]
pub struct MalformedPath {
    pub path: usize,
    pub segment: usize,
    pub reason: MalformedReason,
}

/// Combined error surfaced by the fluent pagination API.
///
/// `E` is the fetcher's own error type; it is carried unmodified.
#[derive(Debug, thiserror::Error)]
pub enum TrawlError<E> {
    #[error(transparent)]
    MalformedPath(#[from] MalformedPath),

    #[error("invalid pagination config: {0}")]
    Config(#[from] ConfigurationError),

    #[error("item could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("page fetch failed: {0}")]
    FetchFailed(#[source] E),
}

impl<E> TrawlError<E> {
    /// Returns `true` if the error came from the page fetcher.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, TrawlError::FetchFailed(_))
    }

    /// Returns the fetcher's error, if that is what this is.
    pub fn into_fetch_error(self) -> Option<E> {
        match self {
            TrawlError::FetchFailed(e) => Some(e),
            _ => None,
        }
    }
}
