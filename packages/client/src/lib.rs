//! # Trawl client
//!
//! Declarative path queries over JSON trees and a cursor pagination loop
//! built on them.
//!
//! ## Features
//!
//! - **Structural queries** with key access, negative-wrapping indexes,
//!   partial-match filters, ordered fallbacks and branching sub-paths
//! - **Work-list evaluation** that explores every live alternative of a path
//!   before the next path in the set is tried
//! - **Cursor pagination** that lazily flattens multi-page responses into one
//!   item stream, one fetch per page, with an eager `collect` counterpart
//! - **Transport agnostic**: pages come from any `FnMut(&Params) -> Result<Value, E>`
//!
//! ## Usage
//!
//! ```
//! use serde_json::{Value, json};
//! use trawl_client::prelude::*;
//! use trawl_client::path;
//!
//! let mut pages = vec![
//!     json!({"followers": [{"handle": "c"}]}),
//!     json!({"followers": [{"handle": "a"}, {"handle": "b"}], "cursor": "p2"}),
//! ];
//! let fetch = move |_params: &Params| -> Result<Value, std::io::Error> {
//!     Ok(pages.pop().unwrap_or(Value::Null))
//! };
//!
//! let handles: Vec<Value> = collect_pages(
//!     fetch,
//!     Params::new().with("actor", "alice.test"),
//!     Traversal::new([path!["followers"]])?,
//!     Traversal::new([path!["cursor"]])?,
//!     &PaginationConfig::default(),
//! )?
//! .into_iter()
//! .map(|follower| follower["handle"].clone())
//! .collect();
//!
//! assert_eq!(handles, [json!("a"), json!("b"), json!("c")]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod paginate;
pub mod traverse;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
