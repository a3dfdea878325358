//! Deck and codec error types.
//!
//! `DeckError` covers the recoverable mistakes a user can make while editing
//! or quizzing a deck. `CodecError` covers reading and writing deck files,
//! where only a missing file is recoverable.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from editing or quizzing a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// An empty string was given as a term.
    #[error("empty terms are not allowed")]
    EmptyTerm,

    /// An empty string was given as a definition.
    #[error("empty definitions are not allowed")]
    EmptyDefinition,

    /// The term is already on a card.
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    /// The definition is already used by another card.
    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    /// No card has this term.
    #[error("there is no such card: \"{0}\"")]
    NotFound(String),

    /// A quiz was requested but the deck has no cards.
    #[error("there are no cards to ask")]
    EmptyDeck,
}

/// Errors from reading or writing a deck file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file to import does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line does not match `("term":"definition"):(count)`.
    #[error("malformed card on line {line_no}: {line:?}")]
    Malformed { line_no: usize, line: String },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    /// Returns `true` if the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CodecError::FileNotFound(_))
    }
}
