use chrono::{DateTime, Utc};
use serde::Serialize;

use super::labels::PatternLabel;

/// One detected pattern, anchored at the timestamp of the last bar of the
/// formation (single-bar patterns anchor at their own bar).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PatternEvent {
    pub timestamp: DateTime<Utc>,
    pub label: PatternLabel,
}

/// All events detected in one scan, in emission order.
///
/// Emission order is scan-position order, with family order within a
/// position. Because multi-bar rules anchor at a bar ahead of the scan
/// position, the report is NOT guaranteed to be sorted by timestamp; callers
/// that need timestamp order must sort it themselves.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatternReport {
    events: Vec<PatternEvent>,
}

impl PatternReport {
    pub(crate) fn new(events: Vec<PatternEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[PatternEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternEvent> {
        self.events.iter()
    }
}

impl IntoIterator for PatternReport {
    type Item = PatternEvent;
    type IntoIter = std::vec::IntoIter<PatternEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
