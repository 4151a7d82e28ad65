//! Login history domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of entries retained in a [`HistoryLog`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// One successful login event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub email: String,
    /// Serialized as an ISO-8601 / RFC 3339 string.
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            at,
        }
    }

    /// Entry stamped with the current wall-clock time.
    pub fn now(email: impl Into<String>) -> Self {
        Self::new(email, Utc::now())
    }
}

/// Capped login history, most recent first.
///
/// Serialized transparently as a JSON array of [`HistoryEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `entry` and drop the oldest entries beyond `capacity`.
    pub fn record(&mut self, entry: HistoryEntry, capacity: usize) {
        self.entries.insert(0, entry);
        self.entries.truncate(capacity);
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_prepends_newest() {
        let mut log = HistoryLog::new();
        log.record(HistoryEntry::now("a@x.com"), DEFAULT_HISTORY_CAPACITY);
        log.record(HistoryEntry::now("b@x.com"), DEFAULT_HISTORY_CAPACITY);

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].email, "b@x.com");
        assert_eq!(log.entries()[1].email, "a@x.com");
        assert_eq!(log.latest().unwrap().email, "b@x.com");
    }

    #[test]
    fn record_discards_oldest_beyond_capacity() {
        let mut log = HistoryLog::new();
        for i in 0..=DEFAULT_HISTORY_CAPACITY {
            log.record(
                HistoryEntry::now(format!("user{i}@x.com")),
                DEFAULT_HISTORY_CAPACITY,
            );
        }

        assert_eq!(log.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(log.entries()[0].email, "user50@x.com");
        assert!(!log.entries().iter().any(|e| e.email == "user0@x.com"));
    }

    #[test]
    fn parses_browser_encoded_history() {
        // Millisecond precision with a `Z` suffix, as written by browsers.
        let raw = r#"[{"email":"b@x.com","at":"2025-03-01T10:15:30.123Z"},
                      {"email":"a@x.com","at":"2025-03-01T09:00:00.000Z"}]"#;
        let log: HistoryLog = serde_json::from_str(raw).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].email, "a@x.com");
        assert_eq!(
            log.entries()[1].at,
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut log = HistoryLog::new();
        log.record(
            HistoryEntry::new("a@x.com", Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
            DEFAULT_HISTORY_CAPACITY,
        );
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"email":"a@x.com","at":"2025-01-02T03:04:05Z"}]"#);
    }
}
