//! searchbox — debounced, filterable search input controller.
//!
//! This crate re-exports the controller library so integration tests and
//! embedders can depend on one name. The interactive demo lives in
//! `searchbox-tui` and is launched by the `searchbox` binary.
//!
//! ```text
//! keystrokes ──► SearchController ──► QueryChanged (sync)
//!                     │   │
//!                     │   └──► debounce ──► Search
//!                     └── filter chips ──► FilterRemoved + Search (immediate)
//! ```

pub use searchbox_core::{config, controller, error, types};
pub use searchbox_core::{Filter, FilterId, SearchController, SearchError, SearchEvent};
