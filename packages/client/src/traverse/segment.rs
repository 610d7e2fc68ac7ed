//! Path model
//!
//! A [`Path`] is an ordered list of [`Segment`]s describing one way to descend
//! through a JSON tree. A path set is a slice of alternative paths tried in
//! order.

use serde_json::Value;

/// One step of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Select an object field. Applied to an array, selects the field from
    /// every element that is an object containing it.
    Key(String),
    /// Select an array element. Negative indexes count from the end.
    Index(i64),
    /// Keep array elements matching the criteria, or pass an object through
    /// unchanged if it matches.
    Filter(Value),
    /// Try each alternative in order. Alternatives cannot be fallbacks.
    Fallback(Vec<Segment>),
    /// Evaluate every sub-path against the current value and continue from
    /// each result.
    Branch(Vec<Path>),
}

impl Segment {
    #[must_use]
    pub fn key(name: impl Into<String>) -> Self {
        Segment::Key(name.into())
    }

    #[must_use]
    pub fn index(index: i64) -> Self {
        Segment::Index(index)
    }

    /// Criteria are matched with [`matches`](super::criteria::matches).
    #[must_use]
    pub fn filter(criteria: Value) -> Self {
        Segment::Filter(criteria)
    }

    #[must_use]
    pub fn fallback<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        Segment::Fallback(alternatives.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn branch<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        Segment::Branch(paths.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Key(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Key(name)
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(i64::from(index))
    }
}

/// An ordered sequence of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path(Vec<Segment>);

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment.
    #[must_use]
    pub fn then(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl<S: Into<Segment>, const N: usize> From<[S; N]> for Path {
    fn from(segments: [S; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Path`] from segment expressions.
///
/// String literals become keys and integer literals become indexes; anything
/// else must already be a [`Segment`].
///
/// ```
/// use serde_json::json;
/// use trawl_client::path;
/// use trawl_client::traverse::Segment;
///
/// let p = path!["items", Segment::filter(json!({"ok": true})), "id"];
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::traverse::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::traverse::Path::from(::std::vec![
            $($crate::traverse::Segment::from($segment)),+
        ])
    };
}
