//! Bounded, newest-first log of controller events for the demo side panel.
//!
//! Entries read `"<action>: <json> (<time>)"`, or `"<action> (<time>)"` when
//! the payload is falsy (null, false, 0, empty string). An unparseable
//! strftime format falls back to [`DEFAULT_TIMESTAMP_FORMAT`].

use std::collections::VecDeque;

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local,
};
use searchbox_core::SearchEvent;
use serde_json::Value;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<String>,
    capacity: usize,
    timestamp_format: String,
}

impl ActionLog {
    pub fn new(capacity: usize, timestamp_format: impl Into<String>) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            timestamp_format: checked_format(timestamp_format.into()),
        }
    }

    /// Record a controller event stamped with the local wall clock.
    pub fn record(&mut self, event: &SearchEvent) {
        self.log(event.action(), event.payload().as_ref());
    }

    pub fn log(&mut self, action: &str, data: Option<&Value>) {
        self.log_at(action, data, Local::now());
    }

    pub fn log_at(&mut self, action: &str, data: Option<&Value>, at: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }
        let ts = at.format(&self.timestamp_format);
        let message = match data.filter(|v| is_truthy(v)) {
            Some(v) => format!("{action}: {v} ({ts})"),
            None => format!("{action} ({ts})"),
        };
        tracing::trace!(%message, "action log");
        self.entries.push_front(message);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `fmt` if chrono can render it, otherwise the default format.
fn checked_format(fmt: String) -> String {
    if StrftimeItems::new(&fmt).any(|item| matches!(item, Item::Error)) {
        tracing::warn!(format = %fmt, "invalid timestamp format, using default");
        return DEFAULT_TIMESTAMP_FORMAT.to_string();
    }
    fmt
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 5).unwrap()
    }

    #[test]
    fn formats_with_and_without_data() {
        let mut log = ActionLog::new(5, "%H:%M:%S");
        log.log_at("refresh", None, noon());
        log.log_at("query changed", Some(&json!("ab")), noon());

        let entries: Vec<_> = log.entries().collect();
        assert_eq!(
            entries,
            vec!["query changed: \"ab\" (12:00:05)", "refresh (12:00:05)"]
        );
    }

    #[test]
    fn falsy_payload_is_omitted() {
        let mut log = ActionLog::new(5, "%H:%M:%S");
        log.log_at("query changed", Some(&json!("")), noon());
        log.log_at("count", Some(&json!(0)), noon());
        let entries: Vec<_> = log.entries().collect();
        assert_eq!(entries, vec!["count (12:00:05)", "query changed (12:00:05)"]);
    }

    #[test]
    fn keeps_only_newest_entries() {
        let mut log = ActionLog::new(5, "%H:%M:%S");
        for i in 1..=7 {
            log.log_at(&format!("a{i}"), None, noon());
        }
        assert_eq!(log.len(), 5);
        assert_eq!(log.entries().next(), Some("a7 (12:00:05)"));
        assert_eq!(log.entries().last(), Some("a3 (12:00:05)"));
    }

    #[test]
    fn zero_capacity_logs_nothing() {
        let mut log = ActionLog::new(0, "%H:%M:%S");
        log.log_at("search", Some(&json!({"query": "x"})), noon());
        assert!(log.is_empty());
    }

    #[test]
    fn invalid_timestamp_format_falls_back_to_default() {
        let mut log = ActionLog::new(5, "%Q");
        log.log_at("search", None, noon());
        log.log("search", None);
        assert_eq!(log.entries().last(), Some("search (12:00:05)"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn records_picker_event_without_payload() {
        let mut log = ActionLog::new(5, "");
        log.record(&SearchEvent::FilterPickerRequested);
        assert_eq!(log.entries().next(), Some("filter picker requested ()"));
    }
}
