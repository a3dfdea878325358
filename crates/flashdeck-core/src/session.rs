//! The session context: a deck and its mistake counters.
//!
//! All mutation goes through `Session` so the deck and the counters stay in
//! step: a counter exists for exactly the terms on the deck.

use crate::deck::{Card, Deck};
use crate::error::DeckError;
use crate::hardest::{find_hardest, Hardest};
use crate::statistics::StatsTracker;

/// A card with its mistake count, as read from or written to a deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub card: Card,
    pub mistakes: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    deck: Deck,
    stats: StatsTracker,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn add_card(&mut self, term: &str, definition: &str) -> Result<(), DeckError> {
        self.deck.add_card(term, definition)?;
        self.stats.track(term);
        tracing::debug!(term, definition, "card added");
        Ok(())
    }

    pub fn remove_card(&mut self, term: &str) -> Result<(), DeckError> {
        self.deck.remove_card(term)?;
        self.stats.drop_term(term);
        tracing::debug!(term, "card removed");
        Ok(())
    }

    /// Count a wrong answer for `term`.
    pub fn record_mistake(&mut self, term: &str) -> u32 {
        self.stats.record_mistake(term)
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        tracing::debug!(tracked = self.stats.len(), "statistics reset");
    }

    pub fn hardest(&self) -> Hardest {
        find_hardest(&self.stats)
    }

    /// Upsert imported records, overwriting definitions and mistake counts.
    ///
    /// Returns the number of records applied.
    pub fn apply_records(&mut self, records: Vec<CardRecord>) -> usize {
        let applied = records.len();
        for record in records {
            let Card { term, definition } = record.card;
            if let Some(evicted) = self.deck.upsert(&term, &definition) {
                tracing::warn!(
                    term = %term,
                    evicted = %evicted,
                    "imported definition already belonged to another card, replacing it"
                );
                self.stats.drop_term(&evicted);
            }
            self.stats.set(&term, record.mistakes);
        }
        applied
    }

    /// Snapshot of every card with its mistakes, in term order.
    pub fn records(&self) -> Vec<CardRecord> {
        self.deck
            .cards()
            .map(|(term, definition)| CardRecord {
                card: Card::new(term, definition),
                mistakes: self.stats.get(term),
            })
            .collect()
    }
}
