//! Trawl Prelude
//!
//! The types end users need to query trees and page through endpoints.

// Path model and evaluation
pub use crate::traverse::{Path, Segment, Traversal, matches};

// Pagination
pub use crate::paginate::{CursorStream, PageFetcher, PageStats, Params, StreamState};
pub use crate::paginate::{collect_pages, stream_pages};

// Configuration
pub use crate::config::{PaginationConfig, Validator};

// Error types
pub use crate::error::{ConfigurationError, MalformedPath, MalformedReason, TrawlError};

// Tree values
pub use serde_json::Value;

// URL handling
pub use url::Url;
