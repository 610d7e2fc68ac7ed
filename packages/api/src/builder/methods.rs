//! Terminal methods
//!
//! Validate the configured paths and run the pagination loop, either lazily
//! as a stream or eagerly into a `Vec`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use trawl_client::error::{TrawlError, decode, fetch_failed};
use trawl_client::paginate::{CursorStream, PageFetcher, stream_pages};
use trawl_client::traverse::Traversal;

use crate::builder::core::{ItemsSet, PaginateBuilder};

impl<F: PageFetcher> PaginateBuilder<F, ItemsSet> {
    /// Start a lazy item stream
    ///
    /// No page is fetched until the stream is first advanced.
    ///
    /// # Errors
    /// Returns `TrawlError::MalformedPath` if the items or cursor path set is
    /// invalid, or `TrawlError::Config` if the pagination configuration is.
    pub fn stream(self) -> Result<CursorStream<F>, TrawlError<F::Error>> {
        let items = Traversal::new(self.state.paths)?;
        let cursor = Traversal::new(self.cursor_paths)?;

        if self.debug_enabled {
            tracing::debug!(
                target: "trawl::builder",
                params = ?self.params,
                cursor_param = %self.config.cursor_param,
                page_size = ?self.config.page_size,
                "starting paginated fetch"
            );
        }

        Ok(stream_pages(self.fetcher, self.params, items, cursor, &self.config)?)
    }

    /// Fetch every page and return all items in order
    ///
    /// # Errors
    /// Returns the errors of [`stream`](Self::stream), or
    /// `TrawlError::FetchFailed` carrying the first fetch error. No items are
    /// returned when a fetch fails.
    pub fn collect(self) -> Result<Vec<Value>, TrawlError<F::Error>> {
        self.stream()?
            .collect::<Result<Vec<_>, _>>()
            .map_err(fetch_failed)
    }

    /// Fetch every page and deserialize each item into `T`
    ///
    /// # Errors
    /// Returns the errors of [`collect`](Self::collect), or
    /// `TrawlError::Decode` for the first item that does not deserialize.
    pub fn collect_as<T: DeserializeOwned>(self) -> Result<Vec<T>, TrawlError<F::Error>> {
        self.collect()?
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(decode))
            .collect()
    }
}
