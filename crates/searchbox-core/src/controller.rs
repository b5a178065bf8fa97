//! Search controller — owns the query text and the active filter set, and
//! turns edits into [`SearchEvent`]s.
//!
//! # Timing contract
//!
//! | Call | Synchronous events | Deferred events |
//! |------|--------------------|-----------------|
//! | `set_query` / `clear` | `QueryChanged` (+ `Search` when debounce is 0) | `Search` after the debounce |
//! | `remove_filter` (hit) | `FilterRemoved`, `Search` | none |
//! | `remove_filter` (miss) | none | none |
//! | `request_filter_picker` | `FilterPickerRequested` | none |
//!
//! At most one debounce timer is live. Scheduling a new one aborts the old
//! task and bumps an epoch stored next to the state; a timer only emits if
//! its epoch is still current, checked under the same read guard it uses to
//! snapshot the query. A deferred search therefore always carries the query
//! and filters as of the moment it fires.

use std::collections::HashSet;
use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::{mpsc, watch},
    task::JoinHandle,
};

use crate::{
    config::SearchConfig,
    error::SearchError,
    types::{Filter, FilterId, SearchEvent},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Snapshot {
    query: String,
    filters: Vec<Filter>,
    /// Bumped whenever a pending timer is cancelled.
    epoch: u64,
}

enum Timing {
    Immediate,
    Debounced { delay: Duration, runtime: Handle },
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct SearchController {
    state: watch::Sender<Snapshot>,
    events: mpsc::UnboundedSender<SearchEvent>,
    timing: Timing,
    pending: Option<JoinHandle<()>>,
}

impl SearchController {
    /// Build a controller seeded with `query` and `filters`.
    ///
    /// Returns the controller together with the receiving end of its event
    /// stream. A non-zero `debounce` captures the current tokio runtime, so
    /// it must be called from within one.
    pub fn new(
        query: impl Into<String>,
        filters: Vec<Filter>,
        debounce: Duration,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SearchEvent>), SearchError> {
        let mut seen = HashSet::with_capacity(filters.len());
        if let Some(dup) = filters.iter().find(|f| !seen.insert(f.id)) {
            return Err(SearchError::DuplicateFilter(dup.id));
        }

        let timing = if debounce.is_zero() {
            Timing::Immediate
        } else {
            let runtime = Handle::try_current().map_err(|_| SearchError::NoRuntime {
                debounce_ms: debounce.as_millis() as u64,
            })?;
            Timing::Debounced { delay: debounce, runtime }
        };

        let (state, _) = watch::channel(Snapshot {
            query: query.into(),
            filters,
            epoch: 0,
        });
        let (events, rx) = mpsc::unbounded_channel();

        tracing::debug!(debounce_ms = debounce.as_millis() as u64, "search: controller created");

        Ok((
            Self {
                state,
                events,
                timing,
                pending: None,
            },
            rx,
        ))
    }

    /// Same as [`SearchController::new`], taking the debounce from config.
    pub fn from_config(
        config: &SearchConfig,
        query: impl Into<String>,
        filters: Vec<Filter>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SearchEvent>), SearchError> {
        Self::new(query, filters, config.debounce())
    }

    // -- Accessors ----------------------------------------------------------

    /// Current query text. Always reflects the latest `set_query`.
    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Active filters in display order.
    pub fn filters(&self) -> Vec<Filter> {
        self.state.borrow().filters.clone()
    }

    pub fn debounce(&self) -> Duration {
        match &self.timing {
            Timing::Immediate => Duration::ZERO,
            Timing::Debounced { delay, .. } => *delay,
        }
    }

    /// True while a debounced search is scheduled but has not fired yet.
    pub fn has_pending_search(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Whether a clear affordance makes sense (the query is non-empty).
    pub fn is_clearable(&self) -> bool {
        !self.state.borrow().query.is_empty()
    }

    // -- Operations ---------------------------------------------------------

    /// Replace the query text.
    ///
    /// Emits `QueryChanged` immediately and (re)schedules a `Search`. Any
    /// previously scheduled search that has not fired is cancelled, so a
    /// burst of calls inside the debounce window yields one search carrying
    /// the last value. With a zero debounce the search is emitted before
    /// this returns.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cancel_pending();
        self.state.send_modify(|s| s.query.clone_from(&text));
        tracing::debug!(query = %text, "search: query set");
        self.emit(SearchEvent::QueryChanged(text));

        match &self.timing {
            Timing::Immediate => self.emit_search(),
            Timing::Debounced { delay, runtime } => {
                let delay = *delay;
                let epoch = self.state.borrow().epoch;
                let state = self.state.subscribe();
                let events = self.events.clone();

                self.pending = Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let snapshot = state.borrow();
                    if snapshot.epoch != epoch {
                        tracing::trace!(epoch, "search: superseded timer woke, dropping");
                        return;
                    }
                    tracing::debug!(query = %snapshot.query, "search: debounce elapsed");
                    let search = SearchEvent::Search {
                        query: snapshot.query.clone(),
                        filters: snapshot.filters.clone(),
                    };
                    if events.send(search).is_err() {
                        tracing::trace!("search: event receiver dropped");
                    }
                }));
                tracing::trace!(epoch, delay_ms = delay.as_millis() as u64, "search: timer scheduled");
            }
        }
    }

    /// Equivalent to `set_query("")`.
    pub fn clear(&mut self) {
        self.set_query(String::new());
    }

    /// Remove the filter with `id` from the active set.
    ///
    /// An unknown id is a silent no-op: nothing changes and nothing is
    /// emitted. On a hit, `FilterRemoved` and then a `Search` are emitted
    /// immediately. This search bypasses the debounce and does not touch a
    /// pending debounced search, which still fires later with whatever query
    /// is current then.
    pub fn remove_filter(&mut self, id: FilterId) -> Option<Filter> {
        let mut removed = None;
        self.state.send_if_modified(|s| match s.filters.iter().position(|f| f.id == id) {
            Some(pos) => {
                removed = Some(s.filters.remove(pos));
                true
            }
            None => false,
        });

        let Some(filter) = removed else {
            tracing::trace!(%id, "search: remove_filter on unknown id ignored");
            return None;
        };

        tracing::debug!(%id, label = %filter.label, "search: filter removed");
        self.emit(SearchEvent::FilterRemoved(filter.clone()));
        self.emit_search();
        Some(filter)
    }

    /// Ask the host to open its filter picker. No state changes.
    pub fn request_filter_picker(&self) {
        self.emit(SearchEvent::FilterPickerRequested);
    }

    /// Cancel the pending debounced search, if any. Returns true when a live
    /// timer was cancelled.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(task) = self.pending.take() else {
            return false;
        };
        let live = !task.is_finished();
        self.state.send_modify(|s| s.epoch += 1);
        task.abort();
        if live {
            tracing::trace!("search: pending timer cancelled");
        }
        live
    }

    // -- Internals ----------------------------------------------------------

    fn emit_search(&self) {
        let event = {
            let s = self.state.borrow();
            SearchEvent::Search {
                query: s.query.clone(),
                filters: s.filters.clone(),
            }
        };
        self.emit(event);
    }

    fn emit(&self, event: SearchEvent) {
        tracing::trace!(action = event.action(), "search: emit");
        if self.events.send(event).is_err() {
            tracing::trace!("search: event receiver dropped");
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("SearchController")
            .field("query", &s.query)
            .field("filters", &s.filters)
            .field("debounce", &self.debounce())
            .field("pending", &self.has_pending_search())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn chips() -> Vec<Filter> {
        vec![
            Filter::new(1, "Sampling").with_badge(5, "i-badge"),
            Filter::new(2, "Image").with_badge(3, "o-badge"),
            Filter::new(3, "Advanced").with_badge(12, "c-badge"),
        ]
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<SearchEvent>) -> Vec<SearchEvent> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push(ev);
        }
        out
    }

    fn searches(events: &[SearchEvent]) -> Vec<&SearchEvent> {
        events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Search { .. }))
            .collect()
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[test]
    fn duplicate_ids_rejected() {
        let filters = vec![Filter::new(1, "a"), Filter::new(1, "b")];
        let err = SearchController::new("", filters, Duration::ZERO).unwrap_err();
        assert_eq!(err, SearchError::DuplicateFilter(FilterId(1)));
    }

    #[test]
    fn debounce_outside_runtime_rejected() {
        let err = SearchController::new("", vec![], Duration::from_millis(300)).unwrap_err();
        assert_eq!(err, SearchError::NoRuntime { debounce_ms: 300 });
    }

    #[rstest]
    #[case::single_char("k")]
    #[case::empty("")]
    #[case::unicode("Ünïcödé ×")]
    fn zero_debounce_needs_no_runtime(#[case] text: &str) {
        let (mut c, mut rx) = SearchController::new("", vec![], Duration::ZERO).unwrap();
        c.set_query(text);
        assert!(!c.has_pending_search());
        assert_eq!(
            drain(&mut rx),
            vec![
                SearchEvent::QueryChanged(text.into()),
                SearchEvent::Search { query: text.into(), filters: vec![] },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn query_is_visible_before_timer_fires() {
        let (mut c, mut rx) = SearchController::new("", vec![], Duration::from_millis(300)).unwrap();
        c.set_query("sdxl");
        assert_eq!(c.query(), "sdxl");
        assert!(c.has_pending_search());
        assert_eq!(drain(&mut rx), vec![SearchEvent::QueryChanged("sdxl".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_coalesces_to_last_value() {
        let (mut c, mut rx) =
            SearchController::new("", chips(), Duration::from_millis(300)).unwrap();

        c.set_query("a");
        sleep_ms(100).await;
        c.set_query("ab");
        sleep_ms(50).await;
        c.set_query("abc");

        // t = 449: nothing fired, neither from the first call nor the last.
        sleep_ms(299).await;
        assert!(searches(&drain(&mut rx)).is_empty());

        sleep_ms(2).await;
        let events = drain(&mut rx);
        assert_eq!(
            events,
            vec![SearchEvent::Search { query: "abc".into(), filters: chips() }]
        );
        assert!(!c.has_pending_search());
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_search_sees_filters_removed_meanwhile() {
        let (mut c, mut rx) =
            SearchController::new("", chips(), Duration::from_millis(200)).unwrap();
        c.set_query("vae");
        c.remove_filter(FilterId(2));

        let immediate = drain(&mut rx);
        assert_eq!(
            immediate,
            vec![
                SearchEvent::QueryChanged("vae".into()),
                SearchEvent::FilterRemoved(chips()[1].clone()),
                SearchEvent::Search {
                    query: "vae".into(),
                    filters: vec![chips()[0].clone(), chips()[2].clone()],
                },
            ]
        );

        // The removal did not cancel the pending debounced search.
        sleep_ms(201).await;
        assert_eq!(
            drain(&mut rx),
            vec![SearchEvent::Search {
                query: "vae".into(),
                filters: vec![chips()[0].clone(), chips()[2].clone()],
            }]
        );
    }

    proptest! {
        #[test]
        fn remove_unknown_id_is_silent(id in 4u64.., query in "[a-z ]{0,12}") {
            let (mut c, mut rx) =
                SearchController::new(query.clone(), chips(), Duration::ZERO).unwrap();
            prop_assert_eq!(c.remove_filter(FilterId(id)), None);
            prop_assert_eq!(c.filters(), chips());
            prop_assert_eq!(c.query(), query);
            prop_assert!(drain(&mut rx).is_empty());
        }
    }

    #[test]
    fn picker_request_changes_nothing() {
        let (c, mut rx) = SearchController::new("q", chips(), Duration::ZERO).unwrap();
        c.request_filter_picker();
        assert_eq!(drain(&mut rx), vec![SearchEvent::FilterPickerRequested]);
        assert_eq!(c.query(), "q");
        assert_eq!(c.filters(), chips());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_twice_yields_one_search() {
        let (mut c, mut rx) =
            SearchController::new("Sample search text", vec![], Duration::from_millis(300))
                .unwrap();
        assert!(c.is_clearable());

        c.clear();
        assert_eq!(c.query(), "");
        c.clear();
        assert_eq!(c.query(), "");
        assert!(!c.is_clearable());

        sleep_ms(301).await;
        let events = drain(&mut rx);
        assert_eq!(
            events,
            vec![
                SearchEvent::QueryChanged(String::new()),
                SearchEvent::QueryChanged(String::new()),
                SearchEvent::Search { query: String::new(), filters: vec![] },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_timer() {
        let (mut c, mut rx) = SearchController::new("", vec![], Duration::from_millis(100)).unwrap();
        c.set_query("late");
        drop(c);

        sleep_ms(500).await;
        assert_eq!(drain(&mut rx), vec![SearchEvent::QueryChanged("late".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_pending_reports_live_timer() {
        let (mut c, mut rx) = SearchController::new("", vec![], Duration::from_millis(100)).unwrap();
        assert!(!c.cancel_pending());

        c.set_query("x");
        assert!(c.cancel_pending());
        assert!(!c.has_pending_search());

        sleep_ms(200).await;
        assert!(searches(&drain(&mut rx)).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_tolerates_dropped_receiver() {
        let (mut c, rx) = SearchController::new("", vec![], Duration::from_millis(100)).unwrap();
        drop(rx);
        c.set_query("orphan");
        assert!(c.has_pending_search());

        sleep_ms(101).await;
        assert!(!c.has_pending_search());
        assert_eq!(c.query(), "orphan");
    }

    #[tokio::test(start_paused = true)]
    async fn from_config_uses_configured_debounce() {
        let cfg = SearchConfig { debounce_ms: 150 };
        let (c, _rx) = SearchController::from_config(&cfg, "", vec![]).unwrap();
        assert_eq!(c.debounce(), Duration::from_millis(150));
    }
}
