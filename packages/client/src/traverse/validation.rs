//! Eager path set validation

use super::segment::{Path, Segment};
use crate::error::{MalformedPath, MalformedReason, PathResult};

/// Reject path sets the evaluator cannot run.
///
/// # Errors
///
/// Returns `MalformedPath` locating the first segment that nests a fallback
/// inside a fallback, lists no fallback alternatives, or branches into no
/// sub-paths. Branch sub-paths are checked recursively.
pub fn validate_paths(paths: &[Path]) -> PathResult<()> {
    for (index, path) in paths.iter().enumerate() {
        check_path(path).map_err(|(segment, reason)| MalformedPath::new(index, segment, reason))?;
    }
    Ok(())
}

fn check_path(path: &Path) -> Result<(), (usize, MalformedReason)> {
    for (index, segment) in path.segments().iter().enumerate() {
        check_segment(segment, false).map_err(|reason| (index, reason))?;
    }
    Ok(())
}

fn check_segment(segment: &Segment, in_fallback: bool) -> Result<(), MalformedReason> {
    match segment {
        Segment::Fallback(_) if in_fallback => Err(MalformedReason::NestedFallback),
        Segment::Fallback(alternatives) if alternatives.is_empty() => {
            Err(MalformedReason::EmptyFallback)
        }
        Segment::Fallback(alternatives) => alternatives
            .iter()
            .try_for_each(|alternative| check_segment(alternative, true)),
        Segment::Branch(paths) if paths.is_empty() => Err(MalformedReason::EmptyBranch),
        Segment::Branch(paths) => paths
            .iter()
            .try_for_each(|path| check_path(path).map_err(|(_, reason)| reason)),
        Segment::Key(_) | Segment::Index(_) | Segment::Filter(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::path;

    #[test]
    fn test_plain_paths_pass() {
        let paths = [
            path!["a", 0, -1],
            path![Segment::filter(json!({"ok": true}))],
            path![],
        ];
        assert!(validate_paths(&paths).is_ok());
    }

    #[test]
    fn test_nested_fallback_rejected() {
        let inner = Segment::fallback(["b", "c"]);
        let paths = [path!["x"], path!["a", Segment::fallback([Segment::key("a"), inner])]];

        let err = validate_paths(&paths).expect_err("nested fallback");
        assert_eq!(err, MalformedPath::nested_fallback(1, 1));
    }

    #[test]
    fn test_empty_shapes_rejected() {
        let empty_fallback = [path![Segment::Fallback(Vec::new())]];
        assert_eq!(
            validate_paths(&empty_fallback),
            Err(MalformedPath::empty_fallback(0, 0))
        );

        let empty_branch = [path!["a", Segment::Branch(Vec::new())]];
        assert_eq!(
            validate_paths(&empty_branch),
            Err(MalformedPath::empty_branch(0, 1))
        );
    }

    #[test]
    fn test_branch_sub_paths_checked() {
        let bad = Segment::branch([path!["ok"], path![Segment::Fallback(Vec::new())]]);
        assert_eq!(
            validate_paths(&[path!["a", "b", bad]]),
            Err(MalformedPath::empty_fallback(0, 2))
        );
    }

    #[test]
    fn test_fallback_inside_branch_inside_fallback_allowed() {
        let branch = Segment::branch([path![Segment::fallback(["a", "b"])]]);
        let paths = [path![Segment::fallback([branch, Segment::key("c")])]];
        assert!(validate_paths(&paths).is_ok());
    }
}
