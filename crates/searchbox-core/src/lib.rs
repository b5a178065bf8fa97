//! searchbox-core — debounced, filterable search input controller.
//!
//! The controller reconciles free-text query edits and filter-chip removals
//! into a single rate-limited notification stream.
//!
//! # Architecture
//!
//! ```text
//! set_query / clear ──► QueryChanged (sync)
//!        │
//!        └──► debounce timer ──► Search (then-current query + filters)
//!
//! remove_filter ──► FilterRemoved (sync) ──► Search (immediate)
//! ```
//!
//! Events travel over a `tokio` unbounded channel handed out by
//! [`SearchController::new`]. The debounce timer is a spawned task; only one
//! is ever live per controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod types;

pub use controller::SearchController;
pub use error::SearchError;
pub use types::{Filter, FilterId, SearchEvent};
