//! Construction-time errors for the search controller.
//!
//! Every runtime operation on [`SearchController`](crate::SearchController)
//! is total; only building one can fail.

use crate::types::FilterId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// The seeded filter set contains the same id twice.
    #[error("duplicate filter id {0} in the active filter set")]
    DuplicateFilter(FilterId),

    /// A non-zero debounce needs a tokio runtime to schedule its timer.
    #[error("a debounce of {debounce_ms}ms requires a running tokio runtime")]
    NoRuntime { debounce_ms: u64 },
}
