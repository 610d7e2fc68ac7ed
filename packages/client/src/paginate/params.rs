//! Request parameters for paginated fetches

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Insertion-ordered request parameters.
///
/// The pagination loop merges the cursor token into these before every
/// follow-up fetch. `Null` values are kept in the map but never rendered into
/// a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a parameter, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Flatten into name/value text pairs as a query string carries them.
    ///
    /// Strings are taken verbatim, numbers and booleans in their JSON
    /// spelling, arrays repeat the name once per element, objects are sent as
    /// JSON text. `Null` values are skipped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            match value {
                Value::Array(elements) => {
                    pairs.extend(
                        elements
                            .iter()
                            .filter_map(query_text)
                            .map(|text| (name.as_str(), text)),
                    );
                }
                other => {
                    if let Some(text) = query_text(other) {
                        pairs.push((name.as_str(), text));
                    }
                }
            }
        }
        pairs
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_urlencoded` error if encoding fails.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self.query_pairs())
    }

    /// Append these parameters to `url`'s query.
    pub fn apply_to(&self, url: &mut Url) {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return;
        }
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(name, text)| (*name, text.as_str())));
    }
}

fn query_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
