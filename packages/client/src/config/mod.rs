//! Configuration for paginated fetching.

pub mod pagination;
pub mod validation;

pub use pagination::PaginationConfig;
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
