//! Fluent pagination builder

use std::cell::Cell;

use serde::Deserialize;
use serde_json::{Value, json};
use trawl::{MalformedReason, Params, PaginationConfig, Segment, StreamState, Trawl, TrawlError, path};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport error")]
struct Transport;

/// Two pages of followers keyed by cursor.
fn followers_page(params: &Params) -> Result<Value, Transport> {
    match params.get("cursor").and_then(Value::as_str) {
        None => Ok(json!({
            "subject": {"handle": "alice.test"},
            "followers": [
                {"did": "did:plc:1", "handle": "bob.test"},
                {"did": "did:plc:2", "handle": "carol.test"}
            ],
            "cursor": "page-2"
        })),
        Some("page-2") => Ok(json!({
            "subject": {"handle": "alice.test"},
            "followers": [{"did": "did:plc:3", "handle": "dave.test"}]
        })),
        Some(_) => Err(Transport),
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Follower {
    did: String,
    handle: String,
}

#[test]
fn test_collect_all_pages() {
    let followers = trawl::pages(followers_page)
        .param("actor", "alice.test")
        .items([path!["followers"]])
        .collect()
        .expect("both pages fetched");

    let handles: Vec<&str> = followers
        .iter()
        .filter_map(|follower| follower["handle"].as_str())
        .collect();
    assert_eq!(handles, ["bob.test", "carol.test", "dave.test"]);
}

#[test]
fn test_collect_as_deserializes_items() {
    let followers: Vec<Follower> = Trawl::pages(followers_page)
        .items([path!["followers"]])
        .collect_as()
        .expect("items decode");

    assert_eq!(
        followers[2],
        Follower {
            did: "did:plc:3".to_string(),
            handle: "dave.test".to_string()
        }
    );
}

#[test]
fn test_collect_as_reports_decode_error() {
    let result = trawl::pages(followers_page)
        .items([path!["subject"]])
        .collect_as::<Follower>();

    assert!(matches!(result, Err(TrawlError::Decode(_))));
}

#[test]
fn test_fetch_failure_is_propagated() {
    let result = trawl::pages(followers_page)
        .param("cursor", "bogus")
        .items([path!["followers"]])
        .collect();

    let err = result.expect_err("fetch fails");
    assert!(err.is_fetch());
    assert_eq!(err.into_fetch_error(), Some(Transport));
}

#[test]
fn test_malformed_items_path_fails_before_fetching() {
    let fetches = Cell::new(0);
    let fetch = |params: &Params| {
        fetches.set(fetches.get() + 1);
        followers_page(params)
    };

    let nested = Segment::Fallback(vec![Segment::fallback(["a", "b"])]);
    let result = trawl::pages(fetch).items([path!["followers", nested]]).stream();

    match result {
        Err(TrawlError::MalformedPath(err)) => {
            assert_eq!(err.reason, MalformedReason::NestedFallback);
            assert_eq!(err.segment, 1);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed path accepted"),
    }
    assert_eq!(fetches.get(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = trawl::pages(followers_page)
        .page_size(0)
        .items([path!["followers"]])
        .stream();

    assert!(matches!(result, Err(TrawlError::Config(_))));
}

#[test]
fn test_custom_cursor_and_page_size() {
    let seen = std::cell::RefCell::new(Vec::new());
    let fetch = |params: &Params| -> Result<Value, Transport> {
        seen.borrow_mut().push(params.clone());
        Ok(match params.get("after").and_then(Value::as_str) {
            None => json!({"data": {"rows": [1, 2]}, "paging": {"next": "n1"}}),
            Some(_) => json!({"data": {"rows": [3]}, "paging": {}}),
        })
    };

    let rows = trawl::pages(fetch)
        .cursor([path!["paging", "next"]])
        .cursor_param("after")
        .limit_param("per_page")
        .page_size(2)
        .items([path!["data", "rows"]])
        .collect()
        .expect("rows fetched");

    assert_eq!(rows, [json!(1), json!(2), json!(3)]);
    let seen = seen.into_inner();
    assert_eq!(seen[0], Params::new().with("per_page", 2));
    assert_eq!(seen[1], Params::new().with("per_page", 2).with("after", "n1"));
}

#[test]
fn test_stream_is_lazy_and_reports_state() {
    let fetches = Cell::new(0);
    let fetch = |params: &Params| {
        fetches.set(fetches.get() + 1);
        followers_page(params)
    };

    let mut stream = trawl::pages(fetch)
        .config(PaginationConfig::default())
        .debug()
        .items([path!["followers", "handle"]])
        .stream()
        .expect("valid builder");
    assert_eq!(fetches.get(), 0);

    assert_eq!(stream.next(), Some(Ok(json!("bob.test"))));
    assert_eq!(fetches.get(), 1);

    let rest: Vec<Value> = stream.by_ref().map(|item| item.expect("no failure")).collect();
    // only the first handle per page: items paths use first-match evaluation
    assert_eq!(rest, [json!("dave.test")]);
    assert_eq!(stream.state(), &StreamState::Done);
    assert_eq!(stream.stats().pages_fetched, 2);
    drop(stream);
    assert_eq!(fetches.get(), 2);
}

#[test]
fn test_query_helpers_are_reexported() {
    let tree = json!({"a": [1, 2, 3]});
    assert_eq!(trawl::evaluate(&tree, [path!["a", -1]], Value::Null, false), Ok(json!(3)));
    assert!(trawl::matches(&json!({"x": 1, "y": 2}), &json!({"x": 1})));
}
