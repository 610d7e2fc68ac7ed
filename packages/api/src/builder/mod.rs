//! Trawl Builder API modules
//!
//! Provides the fluent API for configuring and running paginated fetches.

pub mod core;
pub mod methods;
pub mod params;

// Re-export all public types for convenience
pub use self::core::*;
