//! Domain-specific assertion macros for searchbox harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! timing or ordering guarantee was violated.

/// Assert that exactly one `Search` event is present and carries `query`.
///
/// ```rust
/// assert_single_search!(events, "abc");
/// ```
#[macro_export]
macro_rules! assert_single_search {
    ($events:expr, $query:expr) => {{
        let events: &[searchbox::SearchEvent] = &$events;
        let expected: &str = $query;
        let found: Vec<&String> = events
            .iter()
            .filter_map(|e| match e {
                searchbox::SearchEvent::Search { query, .. } => Some(query),
                _ => None,
            })
            .collect();
        if found.len() != 1 || found[0] != expected {
            panic!(
                "assert_single_search! failed:\n  expected one search for {:?}\n  got: {:?}\n  all events: {:#?}",
                expected, found, events
            );
        }
    }};
}

/// Assert that no `Search` event is present.
#[macro_export]
macro_rules! assert_no_search {
    ($events:expr) => {{
        let events: &[searchbox::SearchEvent] = &$events;
        if let Some(ev) = events
            .iter()
            .find(|e| matches!(e, searchbox::SearchEvent::Search { .. }))
        {
            panic!("assert_no_search! failed: unexpected {:?}\n  all events: {:#?}", ev, events);
        }
    }};
}

/// Assert the filter ids of a controller, in order.
///
/// ```rust
/// assert_filter_ids!(controller, [1, 3]);
/// ```
#[macro_export]
macro_rules! assert_filter_ids {
    ($controller:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<u64> = $controller.filters().iter().map(|f| f.id.0).collect();
        let expected: Vec<u64> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "active filter ids");
    }};
}
