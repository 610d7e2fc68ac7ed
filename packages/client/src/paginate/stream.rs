//! Lazy cursor-driven item stream

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::num::FpCategory;

use serde_json::Value;

use super::fetch::PageFetcher;
use super::params::Params;
use super::state::StreamState;
use super::stats::PageStats;
use crate::config::{ConfigResult, PaginationConfig, Validator};
use crate::traverse::Traversal;

/// Flattens a cursor-paginated endpoint into one item sequence.
///
/// Each page is fetched only once the consumer asks for the item after the
/// last buffered one, so at most one fetch is in flight and items come out in
/// server cursor order. The stream cannot be restarted; build a new one with
/// the same initial params to iterate again.
///
/// A failing fetch is yielded once as `Err` with the fetcher's own error.
/// Items yielded before it stay valid and the stream ends there.
pub struct CursorStream<F: PageFetcher> {
    fetcher: F,
    params: Params,
    items: Traversal,
    cursor: Traversal,
    cursor_param: String,
    state: StreamState,
    buffered: VecDeque<Value>,
    stats: PageStats,
}

impl<F: PageFetcher> CursorStream<F> {
    /// Stream with the default [`PaginationConfig`].
    pub fn new(fetcher: F, params: Params, items: Traversal, cursor: Traversal) -> Self {
        Self {
            fetcher,
            params,
            items,
            cursor,
            cursor_param: PaginationConfig::default().cursor_param,
            state: StreamState::Fetching,
            buffered: VecDeque::new(),
            stats: PageStats::default(),
        }
    }

    /// Use `config`'s parameter names and merge its page size into the
    /// initial params.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `config` does not validate. Nothing has
    /// been fetched at that point.
    pub fn with_config(mut self, config: &PaginationConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.cursor_param.clone_from(&config.cursor_param);
        config.apply_to(&mut self.params);
        Ok(self)
    }

    #[must_use]
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> PageStats {
        self.stats
    }

    /// Params the next (or most recent) fetch is made with.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    fn accept_page(&mut self, page: &Value) {
        self.stats.pages_fetched += 1;

        match self.items.first(page) {
            Some(Value::Array(items)) => self.buffered.extend(items.iter().cloned()),
            Some(item) => self.buffered.push_back(item.clone()),
            None => tracing::warn!(
                target: "trawl::paginate",
                page = self.stats.pages_fetched,
                "page has no items at the items path"
            ),
        }

        let next_cursor = self.cursor.first(page).and_then(cursor_token);

        tracing::debug!(
            target: "trawl::paginate",
            page = self.stats.pages_fetched,
            items = self.buffered.len(),
            has_cursor = next_cursor.is_some(),
            "page fetched"
        );

        self.state = StreamState::Emitting { next_cursor };
    }

    /// Leave `Emitting` once the buffer is drained.
    fn advance(&mut self) {
        match std::mem::replace(&mut self.state, StreamState::Done) {
            StreamState::Emitting {
                next_cursor: Some(token),
            } => {
                self.params.insert(self.cursor_param.clone(), token);
                self.state = StreamState::Fetching;
            }
            _ => {
                tracing::debug!(
                    target: "trawl::paginate",
                    pages = self.stats.pages_fetched,
                    items = self.stats.items_yielded,
                    "pagination finished"
                );
            }
        }
    }
}

impl<F: PageFetcher> Iterator for CursorStream<F> {
    type Item = Result<Value, F::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                StreamState::Done | StreamState::Failed => return None,
                StreamState::Fetching => match self.fetcher.fetch_page(&self.params) {
                    Ok(page) => self.accept_page(&page),
                    Err(error) => {
                        tracing::warn!(
                            target: "trawl::paginate",
                            page = self.stats.pages_fetched + 1,
                            "page fetch failed"
                        );
                        self.state = StreamState::Failed;
                        return Some(Err(error));
                    }
                },
                StreamState::Emitting { .. } => {
                    if let Some(item) = self.buffered.pop_front() {
                        self.stats.items_yielded += 1;
                        return Some(Ok(item));
                    }
                    self.advance();
                }
            }
        }
    }
}

impl<F: PageFetcher> FusedIterator for CursorStream<F> {}

/// Turn a cursor match into the token sent on the next request.
///
/// Strings are forwarded verbatim and numbers as their decimal text. An
/// empty string or a zero ends pagination like a missing cursor does.
fn cursor_token(value: &Value) -> Option<String> {
    match value {
        Value::String(token) if !token.is_empty() => Some(token.clone()),
        Value::Number(number)
            if !number
                .as_f64()
                .is_some_and(|n| n.classify() == FpCategory::Zero) =>
        {
            Some(number.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_cursor_token_shapes() {
        assert_eq!(cursor_token(&json!("3k2a")), Some("3k2a".to_string()));
        assert_eq!(cursor_token(&json!(40)), Some("40".to_string()));
        assert_eq!(cursor_token(&json!("")), None);
        assert_eq!(cursor_token(&json!(0)), None);
        assert_eq!(cursor_token(&json!(0.0)), None);
        assert_eq!(cursor_token(&json!(-7)), Some("-7".to_string()));
        assert_eq!(cursor_token(&json!(false)), None);
        assert_eq!(cursor_token(&json!({"next": "x"})), None);
    }
}
