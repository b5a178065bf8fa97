//! Core types for searchbox-core.
//!
//! This module defines the filter chip model ([`Filter`], [`FilterId`]) and
//! the [`SearchEvent`] vocabulary emitted by the controller.

use serde::{Deserialize, Serialize};

/// Identifier of a filter chip. Unique within one active filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub u64);

impl std::fmt::Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FilterId {
    fn from(id: u64) -> Self {
        FilterId(id)
    }
}

/// A removable, labelled token narrowing the search.
///
/// `badge_count` and `badge_class` are carried for display collaborators
/// only; the controller never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: FilterId,
    pub label: String,
    #[serde(default)]
    pub badge_count: u32,
    #[serde(default)]
    pub badge_class: String,
}

impl Filter {
    pub fn new(id: impl Into<FilterId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge_count: 0,
            badge_class: String::new(),
        }
    }

    pub fn with_badge(mut self, count: u32, class: impl Into<String>) -> Self {
        self.badge_count = count;
        self.badge_class = class.into();
        self
    }
}

/// A notification emitted by [`SearchController`](crate::SearchController).
///
/// `QueryChanged` and `Search` are deliberately separate variants: the first
/// is a synchronous echo of every edit, the second is rate-limited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed. Emitted synchronously on every
    /// `set_query` / `clear` call.
    QueryChanged(String),
    /// Run a search with this query and filter set.
    Search { query: String, filters: Vec<Filter> },
    /// A filter chip was removed from the active set.
    FilterRemoved(Filter),
    /// The host should open its filter-selection UI.
    FilterPickerRequested,
}

impl SearchEvent {
    /// Short action name, used by the demo action log and in traces.
    pub fn action(&self) -> &'static str {
        match self {
            SearchEvent::QueryChanged(_) => "query changed",
            SearchEvent::Search { .. } => "search",
            SearchEvent::FilterRemoved(_) => "filter removed",
            SearchEvent::FilterPickerRequested => "filter picker requested",
        }
    }

    /// JSON payload of the event, or `None` for payload-free events.
    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            SearchEvent::QueryChanged(text) => Some(serde_json::Value::String(text.clone())),
            SearchEvent::Search { query, filters } => Some(serde_json::json!({
                "query": query,
                "filters": filters,
            })),
            SearchEvent::FilterRemoved(filter) => serde_json::to_value(filter).ok(),
            SearchEvent::FilterPickerRequested => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
