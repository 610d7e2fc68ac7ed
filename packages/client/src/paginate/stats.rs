use serde::Serialize;

/// Counters for one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageStats {
    /// Pages successfully fetched.
    pub pages_fetched: u64,
    /// Items handed to the consumer.
    pub items_yielded: u64,
}
