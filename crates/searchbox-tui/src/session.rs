//! One live scenario: a controller, its event stream, and the demo counters
//! fed by that stream.
//!
//! Dropping a [`Session`] drops its controller, which cancels any pending
//! debounced search. Switching scenarios therefore never leaks a timer into
//! the next one.

use searchbox_core::{config::SearchConfig, SearchController, SearchError, SearchEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{action_log::ActionLog, event::AppEvent, scenarios::Scenario};

pub struct Session {
    pub scenario: &'static Scenario,
    pub controller: SearchController,
    events: UnboundedReceiver<SearchEvent>,
    /// Index into the controller's filters of the highlighted chip.
    pub selected_chip: usize,
    /// Number of `Search` events seen.
    pub search_count: u64,
    /// Number of times the query became empty.
    pub clear_count: u64,
    /// Simulated result lines, for scenarios that ask for them.
    pub results: Vec<String>,
}

impl Session {
    pub fn new(scenario: &'static Scenario, config: &SearchConfig) -> Result<Self, SearchError> {
        let (controller, events) = SearchController::new(
            scenario.query,
            scenario.filters(),
            scenario.debounce(config),
        )?;
        tracing::debug!(scenario = scenario.name, "session started");
        Ok(Self {
            scenario,
            controller,
            events,
            selected_chip: 0,
            search_count: 0,
            clear_count: 0,
            results: Vec::new(),
        })
    }

    /// Apply a key event to the controller.
    pub fn handle(&mut self, event: &AppEvent) {
        let c = &mut self.controller;
        match event {
            AppEvent::Char(ch) => {
                let mut query = c.query();
                query.push(*ch);
                c.set_query(query);
            }
            AppEvent::Backspace => {
                // An empty input produces no input event.
                let mut query = c.query();
                if query.pop().is_some() {
                    c.set_query(query);
                }
            }
            AppEvent::ClearQuery => {
                // The clear affordance only exists while there is text.
                if c.is_clearable() {
                    c.clear();
                }
            }
            AppEvent::ChipPrev => {
                self.selected_chip = self.selected_chip.saturating_sub(1);
            }
            AppEvent::ChipNext => {
                let last = c.filters().len().saturating_sub(1);
                self.selected_chip = (self.selected_chip + 1).min(last);
            }
            AppEvent::RemoveChip => {
                if let Some(filter) = c.filters().get(self.selected_chip) {
                    c.remove_filter(filter.id);
                }
                let remaining = c.filters().len();
                self.selected_chip = self.selected_chip.min(remaining.saturating_sub(1));
            }
            AppEvent::FilterPicker => c.request_filter_picker(),
            _ => {}
        }
    }

    /// Drain everything the controller has emitted so far into the counters
    /// and `log`. Returns the number of events processed.
    pub fn pump(&mut self, log: &mut ActionLog) -> usize {
        let mut n = 0;
        while let Ok(event) = self.events.try_recv() {
            n += 1;
            match &event {
                SearchEvent::QueryChanged(text) if text.is_empty() => self.clear_count += 1,
                SearchEvent::Search { query, filters } => {
                    self.search_count += 1;
                    if self.scenario.simulate_results {
                        let labels: Vec<&str> = filters.iter().map(|f| f.label.as_str()).collect();
                        self.results = vec![
                            format!("Found nodes matching \"{query}\""),
                            format!("Active filters: {}", labels.join(", ")),
                        ];
                    }
                }
                _ => {}
            }
            log.record(&event);
        }
        n
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
