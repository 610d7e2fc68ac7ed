//! Cursor pagination
//!
//! Repeatedly fetches pages through a [`PageFetcher`], pulls the item list and
//! the cursor token out of each page with a [`Traversal`], and flattens the
//! items into one sequence until a page comes back without a cursor.
//!
//! [`CursorStream`] is the lazy form; [`collect_pages`] buffers everything and
//! fails as a whole if any fetch fails.

mod fetch;
mod params;
mod state;
mod stats;
mod stream;

pub use fetch::PageFetcher;
pub use params::Params;
pub use state::StreamState;
pub use stats::PageStats;
pub use stream::CursorStream;

use serde_json::Value;

use crate::config::{ConfigResult, PaginationConfig};
use crate::error::{TrawlError, fetch_failed};
use crate::traverse::Traversal;

/// Lazy stream of every item across all pages.
///
/// # Errors
///
/// Returns `ConfigurationError` if `config` is invalid. No page is fetched
/// in that case.
pub fn stream_pages<F: PageFetcher>(
    fetcher: F,
    params: Params,
    items: Traversal,
    cursor: Traversal,
    config: &PaginationConfig,
) -> ConfigResult<CursorStream<F>> {
    CursorStream::new(fetcher, params, items, cursor).with_config(config)
}

/// Fetch every page and return all items in order.
///
/// # Errors
///
/// Returns `TrawlError::Config` before any fetch if `config` is invalid, or
/// `TrawlError::FetchFailed` carrying the first fetch error. Items gathered
/// before a failed fetch are discarded.
pub fn collect_pages<F: PageFetcher>(
    fetcher: F,
    params: Params,
    items: Traversal,
    cursor: Traversal,
    config: &PaginationConfig,
) -> Result<Vec<Value>, TrawlError<F::Error>> {
    stream_pages(fetcher, params, items, cursor, config)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(fetch_failed)
}
