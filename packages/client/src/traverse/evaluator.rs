//! Work-list evaluation of path sets
//!
//! Filters, fallbacks and branches can each fan out into several live
//! alternatives, so a path is evaluated with an explicit frame stack rather
//! than by chained field access. Frames are pushed in reverse so that pops
//! visit alternatives in their listed order. A path made of keys and indexes
//! only ever holds a single frame.

use serde_json::Value;

use super::criteria::matches;
use super::segment::{Path, Segment};
use super::validation::validate_paths;
use crate::error::PathResult;

/// One pending position in the search.
struct Frame<'a, 'p> {
    value: &'a Value,
    /// Index of the next segment to apply.
    segment: usize,
    /// Chosen fallback alternative, applied in place of `segment`.
    choice: Option<&'p Segment>,
}

impl<'a> Frame<'a, '_> {
    fn at(value: &'a Value, segment: usize) -> Self {
        Self {
            value,
            segment,
            choice: None,
        }
    }
}

/// A validated path set ready to evaluate against any number of trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    paths: Vec<Path>,
}

impl Traversal {
    /// Validate a path set.
    ///
    /// An empty path set is accepted and never matches.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPath` if any path nests a fallback inside a
    /// fallback, or contains an empty fallback or branch.
    pub fn new<I, P>(paths: I) -> PathResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        let paths: Vec<Path> = paths.into_iter().map(Into::into).collect();
        validate_paths(&paths)?;
        Ok(Self { paths })
    }

    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// First match of the first path that matches anything.
    #[must_use]
    pub fn first<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        let found = self.paths.iter().find_map(|path| first_match(value, path));
        tracing::trace!(
            target: "trawl::traverse",
            paths = self.paths.len(),
            matched = found.is_some(),
            "first-match traversal"
        );
        found
    }

    /// Every match of the first path that matches anything.
    ///
    /// Later paths are not consulted once one path has matched, so their
    /// matches are never merged in.
    #[must_use]
    pub fn all<'a>(&self, value: &'a Value) -> Option<Vec<&'a Value>> {
        let found = self.paths.iter().find_map(|path| {
            let mut matched = Vec::new();
            search(value, path, true, &mut matched);
            (!matched.is_empty()).then_some(matched)
        });
        tracing::trace!(
            target: "trawl::traverse",
            paths = self.paths.len(),
            matched = found.as_ref().map_or(0, Vec::len),
            "all-matches traversal"
        );
        found
    }

    /// Owned evaluation: the first match, or an array of all matches when
    /// `all_matches` is set, or `default` when nothing matched.
    #[must_use]
    pub fn evaluate(&self, value: &Value, default: Value, all_matches: bool) -> Value {
        if all_matches {
            self.all(value).map_or(default, |found| {
                Value::Array(found.into_iter().cloned().collect())
            })
        } else {
            self.first(value).cloned().unwrap_or(default)
        }
    }
}

/// Validate `paths` and return the first match.
///
/// # Errors
///
/// Returns `MalformedPath` if the path set is invalid.
pub fn first<'a, I, P>(value: &'a Value, paths: I) -> PathResult<Option<&'a Value>>
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    Ok(Traversal::new(paths)?.first(value))
}

/// Validate `paths` and return every match of the first matching path.
///
/// # Errors
///
/// Returns `MalformedPath` if the path set is invalid.
pub fn all<'a, I, P>(value: &'a Value, paths: I) -> PathResult<Option<Vec<&'a Value>>>
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    Ok(Traversal::new(paths)?.all(value))
}

/// Validate `paths` and evaluate them, falling back to `default`.
///
/// # Errors
///
/// Returns `MalformedPath` if the path set is invalid. No partial result is
/// produced in that case.
pub fn evaluate<I, P>(value: &Value, paths: I, default: Value, all_matches: bool) -> PathResult<Value>
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    Ok(Traversal::new(paths)?.evaluate(value, default, all_matches))
}

fn first_match<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut matched = Vec::with_capacity(1);
    search(value, path, false, &mut matched);
    matched.into_iter().next()
}

/// Drain every frame spawned by one path, recording non-null values that
/// reach its end. Without `all`, stops at the first recorded match.
fn search<'a>(root: &'a Value, path: &Path, all: bool, matched: &mut Vec<&'a Value>) {
    let segments = path.segments();
    let mut stack = vec![Frame::at(root, 0)];

    while let Some(frame) = stack.pop() {
        let Some(segment) = frame.choice.or_else(|| segments.get(frame.segment)) else {
            if !frame.value.is_null() {
                matched.push(frame.value);
                if !all {
                    return;
                }
            }
            continue;
        };
        let next = frame.segment + 1;

        match (segment, frame.value) {
            (Segment::Branch(paths), value) => {
                for sub in paths.iter().rev() {
                    if let Some(result) = first_match(value, sub) {
                        stack.push(Frame::at(result, next));
                    }
                }
            }
            (Segment::Fallback(alternatives), value) => {
                for alternative in alternatives.iter().rev() {
                    stack.push(Frame {
                        value,
                        segment: frame.segment,
                        choice: Some(alternative),
                    });
                }
            }
            (Segment::Index(index), Value::Array(items)) => {
                if let Some(item) = resolve_index(items, *index) {
                    stack.push(Frame::at(item, next));
                }
            }
            (Segment::Filter(criteria), Value::Array(items)) => {
                for item in items.iter().rev() {
                    if matches(item, criteria) {
                        stack.push(Frame::at(item, next));
                    }
                }
            }
            (Segment::Key(name), Value::Array(items)) => {
                for item in items.iter().rev() {
                    if let Some(field) = item.as_object().and_then(|object| object.get(name)) {
                        stack.push(Frame::at(field, next));
                    }
                }
            }
            (Segment::Filter(criteria), Value::Object(_)) => {
                if matches(frame.value, criteria) {
                    stack.push(Frame::at(frame.value, next));
                }
            }
            (Segment::Key(name), Value::Object(object)) => {
                if let Some(field) = object.get(name) {
                    stack.push(Frame::at(field, next));
                }
            }
            _ => {}
        }
    }
}

/// Bounds-checked index with negative wraparound.
fn resolve_index(items: &[Value], index: i64) -> Option<&Value> {
    let len = i64::try_from(items.len()).ok()?;
    let position = if index < 0 { index + len } else { index };
    usize::try_from(position).ok().and_then(|position| items.get(position))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::path;

    #[test]
    fn test_resolve_index_bounds() {
        let items = [json!(1), json!(2), json!(3)];
        assert_eq!(resolve_index(&items, 0), Some(&json!(1)));
        assert_eq!(resolve_index(&items, -1), Some(&json!(3)));
        assert_eq!(resolve_index(&items, -3), Some(&json!(1)));
        assert_eq!(resolve_index(&items, -4), None);
        assert_eq!(resolve_index(&items, 3), None);
        assert_eq!(resolve_index(&items, i64::MIN), None);
    }

    #[test]
    fn test_null_is_never_a_match() {
        let tree = json!({"a": null, "b": 1});
        let traversal = Traversal::new([path!["a"], path!["b"]]).expect("valid paths");
        assert_eq!(traversal.first(&tree), Some(&json!(1)));
    }

    #[test]
    fn test_empty_path_matches_root() {
        let tree = json!({"a": 1});
        let traversal = Traversal::new([path![]]).expect("valid paths");
        assert_eq!(traversal.first(&tree), Some(&tree));
    }

    #[test]
    fn test_empty_path_set_yields_default() {
        let traversal = Traversal::new(Vec::<Path>::new()).expect("valid paths");
        assert_eq!(traversal.evaluate(&json!({"a": 1}), json!("none"), false), json!("none"));
        assert_eq!(traversal.evaluate(&json!({"a": 1}), json!("none"), true), json!("none"));
    }

    #[test]
    fn test_key_on_scalar_is_dead_branch() {
        let tree = json!({"a": "text"});
        let traversal = Traversal::new([path!["a", "b"]]).expect("valid paths");
        assert_eq!(traversal.first(&tree), None);
    }
}
