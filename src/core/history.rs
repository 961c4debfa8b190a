//! Bounded calculation history.
//!
//! Entries are kept most-recent-first; recording past the limit evicts the
//! oldest entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::HistoryItem;
///
/// let item = HistoryItem::new("5 + 3", "8");
/// assert_eq!(item.calculation, "5 + 3");
/// assert_eq!(item.result, "8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Stable identity for selecting the entry from a list
    pub id: Uuid,
    /// Human-readable description, e.g. `"5 + 3"` or `"√16"`
    pub calculation: String,
    /// Result text as it was displayed
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Create an entry stamped with the current time.
    pub fn new(calculation: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            calculation: calculation.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }

    /// Relative age of the entry as seen at `now`, e.g. `"2 minutes ago"`.
    ///
    /// Timestamps in the future read as `"just now"`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let seconds = now
            .signed_duration_since(self.timestamp)
            .num_seconds()
            .max(0);

        let (count, unit) = match seconds {
            s if s < 60 => return "just now".to_string(),
            s if s < 3_600 => (s / 60, "minute"),
            s if s < 86_400 => (s / 3_600, "hour"),
            s => (s / 86_400, "day"),
        };

        if count == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{count} {unit}s ago")
        }
    }
}

/// Most-recent-first history with a fixed capacity.
///
/// Serialize-only: a history is never restored, so the limit set through
/// [`CalculatorConfig`](crate::config::CalculatorConfig) always holds.
#[derive(Clone, Debug, Serialize)]
pub struct History {
    items: VecDeque<HistoryItem>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history holding at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Put `item` at the front, dropping the oldest entries past the limit.
    pub fn record(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(self.limit);
    }

    /// Look up an entry by id.
    pub fn find(&self, id: Uuid) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
