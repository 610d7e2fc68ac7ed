//! Partial-match criteria

use serde_json::Value;

/// Test whether `element` satisfies `criteria`.
///
/// Non-object criteria require strict equality. Object criteria are a subset
/// match: every criteria key must be present in `element`, nested objects
/// recurse, arrays are allow-sets the element's value must belong to, and
/// anything else compares by equality. Keys of `element` absent from the
/// criteria are ignored.
#[must_use]
pub fn matches(element: &Value, criteria: &Value) -> bool {
    let Value::Object(criteria) = criteria else {
        return element == criteria;
    };
    let Value::Object(element) = element else {
        return false;
    };

    criteria.iter().all(|(key, expected)| {
        element.get(key).is_some_and(|actual| match expected {
            Value::Object(_) => matches(actual, expected),
            Value::Array(allowed) => allowed.contains(actual),
            _ => actual == expected,
        })
    })
}
