//! Request parameter management
//!
//! Methods for setting the parameters sent with the first request. Follow-up
//! requests reuse them with the cursor token merged in.

use serde_json::Value;
use trawl_client::paginate::Params;

use crate::builder::core::PaginateBuilder;

impl<F, S> PaginateBuilder<F, S> {
    /// Add a request parameter
    ///
    /// # Arguments
    /// * `name` - The parameter name
    /// * `value` - The parameter value; `null` values are not sent
    ///
    /// # Examples
    /// ```
    /// use serde_json::{Value, json};
    /// use trawl::Params;
    ///
    /// let builder = trawl::pages(|_: &Params| Ok::<Value, std::io::Error>(json!({})))
    ///     .param("actor", "alice.test")
    ///     .param("limit", 100);
    /// ```
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Add several request parameters at once
    ///
    /// Later values replace earlier ones with the same name.
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in params {
            self.params.insert(name, value);
        }
        self
    }

    /// Replace all request parameters
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}
