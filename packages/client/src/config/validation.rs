//! Configuration validation utilities
//!
//! Validation trait, error type and shared checks used by the pagination
//! configuration.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidParameter` - if a value is empty or outside its valid range
    /// - `Conflict` - if two settings contradict each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a request parameter name
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the name is empty or
    /// only whitespace.
    pub fn validate_param_name(param: &str, name: &str) -> ConfigResult<()> {
        if param.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be empty"
            )));
        }

        Ok(())
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_CURSOR_PARAM: &'static str = "cursor";
    pub const DEFAULT_LIMIT_PARAM: &'static str = "limit";
    pub const MIN_PAGE_SIZE: u32 = 1;
    pub const MAX_PAGE_SIZE: u32 = 1000;
}
