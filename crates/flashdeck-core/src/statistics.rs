//! Per-term mistake counters.
//!
//! Every card in the deck has a counter, created at zero when the card is
//! added or imported and removed along with the card.

use std::collections::BTreeMap;

/// Mistake counts keyed by term.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    mistakes: BTreeMap<String, u32>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `term` at zero. Leaves an existing counter alone.
    pub fn track(&mut self, term: &str) {
        self.mistakes.entry(term.to_string()).or_insert(0);
    }

    /// Count one wrong answer for `term`, starting an untracked term at 1.
    pub fn record_mistake(&mut self, term: &str) -> u32 {
        let count = self.mistakes.entry(term.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Overwrite the counter for `term`.
    pub fn set(&mut self, term: &str, count: u32) {
        self.mistakes.insert(term.to_string(), count);
    }

    /// Zero every counter, keeping the entries.
    pub fn reset(&mut self) {
        for count in self.mistakes.values_mut() {
            *count = 0;
        }
    }

    /// Forget `term` entirely.
    pub fn drop_term(&mut self, term: &str) -> Option<u32> {
        self.mistakes.remove(term)
    }

    /// Mistakes for `term`, zero if untracked.
    pub fn get(&self, term: &str) -> u32 {
        self.mistakes.get(term).copied().unwrap_or(0)
    }

    pub fn is_tracked(&self, term: &str) -> bool {
        self.mistakes.contains_key(term)
    }

    /// Every `(term, count)` pair in lexicographic term order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.mistakes.iter().map(|(t, c)| (t.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.mistakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mistakes.is_empty()
    }
}
