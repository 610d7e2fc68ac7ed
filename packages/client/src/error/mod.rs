pub mod constructors;
pub mod types;

pub use constructors::{decode, fetch_failed};
pub use types::{ConfigurationError, MalformedPath, MalformedReason, PathResult, TrawlError};
