//! Page fetching boundary

use serde_json::Value;

use super::params::Params;

/// Fetches one page of a paginated endpoint.
///
/// Implementations own transport, authentication and retry policy; the
/// pagination loop only calls [`fetch_page`](PageFetcher::fetch_page) once per
/// page and hands any error back to its consumer untouched.
///
/// Any `FnMut(&Params) -> Result<Value, E>` is a fetcher.
pub trait PageFetcher {
    type Error;

    /// Perform one request with `params` and return the parsed response.
    ///
    /// # Errors
    ///
    /// Whatever the transport reports; it is propagated unmodified.
    fn fetch_page(&mut self, params: &Params) -> Result<Value, Self::Error>;
}

impl<F, E> PageFetcher for F
where
    F: FnMut(&Params) -> Result<Value, E>,
{
    type Error = E;

    fn fetch_page(&mut self, params: &Params) -> Result<Value, E> {
        self(params)
    }
}
