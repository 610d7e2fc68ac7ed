//! Core `PaginateBuilder` structures and base functionality
//!
//! Contains the main `PaginateBuilder` struct, its state types, and the
//! configuration methods shared by every state.

use trawl_client::config::PaginationConfig;
use trawl_client::paginate::{PageFetcher, Params};
use trawl_client::path;
use trawl_client::traverse::Path;

/// State marker indicating no items path has been set
#[derive(Debug, Clone, Copy)]
pub struct ItemsPending;

/// State marker carrying the items path set
///
/// Only builders in this state have terminal methods.
#[derive(Debug, Clone)]
pub struct ItemsSet {
    pub(crate) paths: Vec<Path>,
}

/// Fluent builder for a paginated fetch
///
/// Type parameter `S` tracks whether the items path is known:
/// - `ItemsPending`: default state, configuration methods only
/// - `ItemsSet`: `stream`, `collect` and `collect_as` become available
pub struct PaginateBuilder<F, S = ItemsPending> {
    /// Fetches one page per call
    pub(crate) fetcher: F,
    /// Parameters of the first request
    pub(crate) params: Params,
    /// Where each page keeps its cursor token
    pub(crate) cursor_paths: Vec<Path>,
    /// Parameter names and page size
    pub(crate) config: PaginationConfig,
    /// Type state
    pub(crate) state: S,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl<F: PageFetcher> PaginateBuilder<F, ItemsPending> {
    /// Start building a paginated fetch around `fetcher`
    ///
    /// The cursor is looked up at the top-level `cursor` field until
    /// [`cursor`](PaginateBuilder::cursor) says otherwise.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            params: Params::new(),
            cursor_paths: vec![path!["cursor"]],
            config: PaginationConfig::default(),
            state: ItemsPending,
            debug_enabled: false,
        }
    }

    /// Set where each page keeps its items
    ///
    /// A matched array is flattened into its elements; any other matched
    /// value counts as a single item.
    ///
    /// # Examples
    /// ```
    /// use serde_json::{Value, json};
    /// use trawl::{Params, path};
    ///
    /// let builder = trawl::pages(|_: &Params| Ok::<Value, std::io::Error>(json!({})))
    ///     .items([path!["followers"]]);
    /// ```
    pub fn items<I, P>(self, paths: I) -> PaginateBuilder<F, ItemsSet>
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        PaginateBuilder {
            fetcher: self.fetcher,
            params: self.params,
            cursor_paths: self.cursor_paths,
            config: self.config,
            state: ItemsSet {
                paths: paths.into_iter().map(Into::into).collect(),
            },
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<F, S> PaginateBuilder<F, S> {
    /// Set where each page keeps its cursor token
    #[must_use]
    pub fn cursor<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        self.cursor_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Send the cursor token under `name` instead of `cursor`
    #[must_use]
    pub fn cursor_param(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.cursor_param(name);
        self
    }

    /// Send the page size under `name` instead of `limit`
    #[must_use]
    pub fn limit_param(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.limit_param(name);
        self
    }

    /// Ask for `size` items per page
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.config = self.config.page_size(size);
        self
    }

    /// Replace the whole pagination configuration
    #[must_use]
    pub fn config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable debug logging for this fetch
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }
}
