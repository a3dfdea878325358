//! Bidirectional term/definition store.
//!
//! A card is a term paired with a definition. Both sides are unique across the
//! deck, so the deck keeps a forward (term → definition) and a reverse
//! (definition → term) map that are always mutual inverses.

use std::collections::BTreeMap;

use crate::error::DeckError;

/// A single term/definition pair, as stored in a deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// The full collection of cards.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    by_term: BTreeMap<String, String>,
    by_definition: BTreeMap<String, String>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new card. Fails without touching the deck if either side is
    /// empty or already present.
    pub fn add_card(&mut self, term: &str, definition: &str) -> Result<(), DeckError> {
        self.check_term(term)?;
        self.check_definition(definition)?;

        self.by_term.insert(term.to_string(), definition.to_string());
        self.by_definition
            .insert(definition.to_string(), term.to_string());
        Ok(())
    }

    /// Check that `term` could start a new card.
    pub fn check_term(&self, term: &str) -> Result<(), DeckError> {
        if term.is_empty() {
            return Err(DeckError::EmptyTerm);
        }
        if self.by_term.contains_key(term) {
            return Err(DeckError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Check that `definition` could complete a new card.
    pub fn check_definition(&self, definition: &str) -> Result<(), DeckError> {
        if definition.is_empty() {
            return Err(DeckError::EmptyDefinition);
        }
        if self.by_definition.contains_key(definition) {
            return Err(DeckError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// Remove the card for `term`, returning its definition.
    pub fn remove_card(&mut self, term: &str) -> Result<String, DeckError> {
        let definition = self
            .by_term
            .remove(term)
            .ok_or_else(|| DeckError::NotFound(term.to_string()))?;
        self.by_definition.remove(&definition);
        Ok(definition)
    }

    /// Insert `term ↔ definition`, evicting whatever stood in the way.
    ///
    /// Returns the term of another card that owned `definition` and was
    /// removed to keep definitions unique.
    pub fn upsert(&mut self, term: &str, definition: &str) -> Option<String> {
        if let Some(old_definition) = self.by_term.remove(term) {
            self.by_definition.remove(&old_definition);
        }

        let evicted = self.by_definition.remove(definition);
        if let Some(other) = &evicted {
            self.by_term.remove(other);
        }

        self.by_term.insert(term.to_string(), definition.to_string());
        self.by_definition
            .insert(definition.to_string(), term.to_string());
        evicted
    }

    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.by_term.get(term).map(String::as_str)
    }

    pub fn reverse_lookup(&self, definition: &str) -> Option<&str> {
        self.by_definition.get(definition).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.by_term.contains_key(term)
    }

    /// All terms in lexicographic order.
    pub fn terms(&self) -> Vec<String> {
        self.by_term.keys().cloned().collect()
    }

    /// All cards in lexicographic term order.
    pub fn cards(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_term
            .iter()
            .map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_term.is_empty()
    }
}
