//! Trawl Public API
//!
//! Flattens cursor-paginated API responses into one item sequence, using
//! declarative path queries to find each page's items and cursor.
//!
//! ```
//! use serde_json::{Value, json};
//! use trawl::{Params, path};
//!
//! let fetch = |params: &Params| -> Result<Value, std::io::Error> {
//!     Ok(match params.get("cursor").and_then(Value::as_str) {
//!         None => json!({"followers": [{"handle": "a"}], "cursor": "p2"}),
//!         Some(_) => json!({"followers": [{"handle": "b"}]}),
//!     })
//! };
//!
//! let followers = trawl::pages(fetch)
//!     .param("actor", "alice.test")
//!     .page_size(100)
//!     .items([path!["followers"]])
//!     .collect()?;
//!
//! assert_eq!(followers.len(), 2);
//! # Ok::<(), trawl::TrawlError<std::io::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from client package
pub use trawl_client::config::PaginationConfig;
pub use trawl_client::error::{ConfigurationError, MalformedPath, MalformedReason, TrawlError};
pub use trawl_client::paginate::{CursorStream, PageFetcher, PageStats, Params, StreamState};
pub use trawl_client::path;
pub use trawl_client::traverse::{Path, Segment, Traversal, all, evaluate, first, matches};

/// Main Trawl entry point providing static builder methods
pub struct Trawl;

impl Trawl {
    /// Create a new pagination builder
    ///
    /// Shorthand for `PaginateBuilder::new(fetcher)`
    pub fn pages<F: PageFetcher>(fetcher: F) -> PaginateBuilder<F> {
        PaginateBuilder::new(fetcher)
    }
}

/// Create a new pagination builder
///
/// Shorthand for `PaginateBuilder::new(fetcher)`
pub fn pages<F: PageFetcher>(fetcher: F) -> PaginateBuilder<F> {
    PaginateBuilder::new(fetcher)
}
