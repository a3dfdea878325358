//! Hardest-card ranking.

use crate::statistics::StatsTracker;

/// The term(s) sharing the highest non-zero mistake count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hardest {
    /// Terms in lexicographic order. Empty when no card has a mistake.
    pub terms: Vec<String>,
    /// The shared mistake count, zero when `terms` is empty.
    pub mistakes: u32,
}

impl Hardest {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Find every term whose mistake count equals the maximum.
///
/// Returns an empty result when nothing is tracked or every counter is zero.
pub fn find_hardest(stats: &StatsTracker) -> Hardest {
    if stats.is_empty() {
        return Hardest::default();
    }
    let max = stats.entries().map(|(_, c)| c).max().unwrap_or(0);
    if max == 0 {
        return Hardest::default();
    }

    // entries() is already in term order
    let terms = stats
        .entries()
        .filter(|&(_, c)| c == max)
        .map(|(t, _)| t.to_string())
        .collect();

    Hardest {
        terms,
        mistakes: max,
    }
}
