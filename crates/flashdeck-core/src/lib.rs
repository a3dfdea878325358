//! flashdeck-core — Deck, mistake statistics, quizzing, and deck files.
//!
//! This crate holds everything the interactive trainer needs apart from
//! terminal I/O: the bidirectional deck, per-term mistake counters, the
//! quiz engine, hardest-card ranking, and the flat deck file format.

pub mod codec;
pub mod config;
pub mod deck;
pub mod error;
pub mod hardest;
pub mod quiz;
pub mod session;
pub mod statistics;
pub mod transcript;

pub use deck::{Card, Deck};
pub use error::{CodecError, DeckError};
pub use hardest::{find_hardest, Hardest};
pub use quiz::{Examinee, QuizEngine, QuizOutcome, QuizSummary};
pub use session::{CardRecord, Session};
pub use statistics::StatsTracker;
pub use transcript::Transcript;
