//! Pagination configuration
//!
//! Names of the request parameters a paginated endpoint expects and the
//! optional page size to ask for.

use serde_json::Value;

use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
use crate::paginate::Params;

/// Request parameter layout for one paginated endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Parameter the cursor token is sent under on follow-up requests.
    pub cursor_param: String,
    /// Parameter the page size is sent under.
    pub limit_param: String,
    /// Page size to request. `None` leaves the endpoint's default in place.
    pub page_size: Option<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            cursor_param: ConfigDefaults::DEFAULT_CURSOR_PARAM.to_string(),
            limit_param: ConfigDefaults::DEFAULT_LIMIT_PARAM.to_string(),
            page_size: None,
        }
    }
}

impl PaginationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor_param(mut self, name: impl Into<String>) -> Self {
        self.cursor_param = name.into();
        self
    }

    #[must_use]
    pub fn limit_param(mut self, name: impl Into<String>) -> Self {
        self.limit_param = name.into();
        self
    }

    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Merge the configured page size into `params` unless the caller
    /// already set the limit parameter.
    pub(crate) fn apply_to(&self, params: &mut Params) {
        if let Some(size) = self.page_size
            && !params.contains_key(&self.limit_param)
        {
            params.insert(self.limit_param.clone(), Value::from(size));
        }
    }
}

impl Validator for PaginationConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_param_name(&self.cursor_param, "cursor_param")?;
        ConfigValidator::validate_param_name(&self.limit_param, "limit_param")?;

        if self.cursor_param == self.limit_param {
            return Err(ConfigurationError::Conflict(format!(
                "cursor_param and limit_param are both '{}'",
                self.cursor_param
            )));
        }

        if let Some(size) = self.page_size {
            ConfigValidator::validate_range(
                size,
                ConfigDefaults::MIN_PAGE_SIZE,
                ConfigDefaults::MAX_PAGE_SIZE,
                "page_size",
            )?;
        }

        Ok(())
    }
}
