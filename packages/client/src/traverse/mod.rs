//! Structural queries over JSON trees
//!
//! Paths descend through nested objects and arrays with key access, integer
//! indexing (negative indexes count from the end), criteria filters, ordered
//! fallbacks and branching sub-paths. A path set lists alternative paths; the
//! first path to produce a match wins.
//!
//! ```
//! use serde_json::json;
//! use trawl_client::path;
//! use trawl_client::traverse::{Segment, Traversal};
//!
//! let page = json!({
//!     "items": [{"id": 1, "ok": true}, {"id": 2, "ok": false}]
//! });
//!
//! let ids = Traversal::new([path!["items", Segment::filter(json!({"ok": true})), "id"]])?;
//! assert_eq!(ids.evaluate(&page, json!(null), true), json!([1]));
//! # Ok::<(), trawl_client::error::MalformedPath>(())
//! ```

pub mod criteria;
pub mod evaluator;
pub mod segment;
pub mod validation;

pub use criteria::matches;
pub use evaluator::{Traversal, all, evaluate, first};
pub use segment::{Path, Segment};
pub use validation::validate_paths;
