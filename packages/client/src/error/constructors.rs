use super::types::{MalformedPath, MalformedReason, TrawlError};

impl MalformedPath {
    #[must_use]
    pub fn new(path: usize, segment: usize, reason: MalformedReason) -> Self {
        Self {
            path,
            segment,
            reason,
        }
    }

    #[must_use]
    pub fn nested_fallback(path: usize, segment: usize) -> Self {
        Self::new(path, segment, MalformedReason::NestedFallback)
    }

    #[must_use]
    pub fn empty_fallback(path: usize, segment: usize) -> Self {
        Self::new(path, segment, MalformedReason::EmptyFallback)
    }

    #[must_use]
    pub fn empty_branch(path: usize, segment: usize) -> Self {
        Self::new(path, segment, MalformedReason::EmptyBranch)
    }
}

/// Wraps a fetcher error.
pub fn fetch_failed<E>(e: E) -> TrawlError<E> {
    TrawlError::FetchFailed(e)
}

/// Wraps an item decoding error.
pub fn decode<E>(e: serde_json::Error) -> TrawlError<E> {
    TrawlError::Decode(e)
}
