//! Test builders — ergonomic constructors for controllers and filter sets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use searchbox::{Filter, SearchController, SearchEvent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

// ---------------------------------------------------------------------------
// ControllerBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`SearchController`] plus its event receiver.
///
/// ```rust
/// let (mut c, mut rx) = ControllerBuilder::new()
///     .debounce_ms(300)
///     .query("controlnet")
///     .filters(chips(&[(1, "Installed"), (2, "Updates")]))
///     .build();
/// ```
pub struct ControllerBuilder {
    query: String,
    filters: Vec<Filter>,
    debounce: Duration,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filters: Vec::new(),
            debounce: Duration::from_millis(300),
        }
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn build(self) -> (SearchController, UnboundedReceiver<SearchEvent>) {
        SearchController::new(self.query, self.filters, self.debounce)
            .expect("test controller must build")
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build filters from `(id, label)` pairs with a badge count equal to the id.
pub fn chips(seed: &[(u64, &str)]) -> Vec<Filter> {
    seed.iter()
        .map(|&(id, label)| Filter::new(id, label).with_badge(id as u32, "i-badge"))
        .collect()
}

/// Build `n` filters with ids `1..=n`.
pub fn numbered_chips(n: u64) -> Vec<Filter> {
    (1..=n)
        .map(|id| Filter::new(id, format!("chip-{id}")))
        .collect()
}

/// Shorthand for a `Search` event.
pub fn search(query: &str, filters: Vec<Filter>) -> SearchEvent {
    SearchEvent::Search {
        query: query.to_string(),
        filters,
    }
}

// ---------------------------------------------------------------------------
// Event helpers
// ---------------------------------------------------------------------------

/// Take every event emitted so far without waiting.
pub fn drain(rx: &mut UnboundedReceiver<SearchEvent>) -> Vec<SearchEvent> {
    let mut out = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        out.push(ev);
    }
    out
}

/// Only the `Search` events of `events`.
pub fn searches_in(events: &[SearchEvent]) -> Vec<SearchEvent> {
    events
        .iter()
        .filter(|e| matches!(e, SearchEvent::Search { .. }))
        .cloned()
        .collect()
}

/// Advance the paused clock by `ms`, letting due timers fire first.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
