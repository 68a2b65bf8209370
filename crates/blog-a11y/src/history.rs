//! Announcement History
//!
//! Bounded log of what was announced, oldest dropped first.

use std::collections::VecDeque;
use std::time::Instant;

use crate::politeness::Politeness;

/// One announcement as it was made
#[derive(Debug, Clone)]
pub struct AnnouncementRecord {
    pub text: String,
    pub politeness: Politeness,
    pub at: Instant,
}

/// Announcement history
#[derive(Debug, Default)]
pub struct AnnouncementHistory {
    records: VecDeque<AnnouncementRecord>,
    max_size: usize,
}

impl AnnouncementHistory {
    pub fn new(max_size: usize) -> Self { Self { records: VecDeque::new(), max_size } }

    pub fn push(&mut self, record: AnnouncementRecord) {
        if self.max_size == 0 { return; }
        self.records.push_back(record);
        while self.records.len() > self.max_size { self.records.pop_front(); }
    }

    pub fn last(&self) -> Option<&AnnouncementRecord> { self.records.back() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn clear(&mut self) { self.records.clear(); }

    /// Texts in announcement order
    pub fn texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> AnnouncementRecord {
        AnnouncementRecord { text: text.into(), politeness: Politeness::Polite, at: Instant::now() }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = AnnouncementHistory::new(2);
        history.push(record("a"));
        history.push(record("b"));
        history.push(record("c"));
        assert_eq!(history.texts(), vec!["b", "c"]);
        assert_eq!(history.last().unwrap().text, "c");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = AnnouncementHistory::new(0);
        history.push(record("a"));
        assert!(history.is_empty());
    }
}
