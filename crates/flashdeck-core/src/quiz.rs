//! Quiz engine.
//!
//! A quiz draws terms uniformly at random from a snapshot of the deck taken
//! when the quiz starts, asks for each term's definition and counts a mistake
//! against the term on every wrong answer.

use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::DeckError;
use crate::session::Session;

/// The result of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    /// The term that was asked.
    pub term: String,
    /// The definition on the card.
    pub expected: String,
    /// What the examinee answered.
    pub answer: String,
    /// Whether `answer` matched `expected` exactly.
    pub correct: bool,
    /// Another card whose definition is `answer`, for wrong answers only.
    pub cross_match: Option<String>,
}

/// Totals for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizSummary {
    pub asked: usize,
    pub wrong: usize,
}

/// The party answering questions, typically a terminal.
pub trait Examinee {
    /// Ask for the definition of `term` and return the answer.
    fn answer(&mut self, term: &str) -> Result<String>;

    /// Called after each question has been scored.
    fn on_outcome(&mut self, _outcome: &QuizOutcome) -> Result<()> {
        Ok(())
    }
}

/// Draws questions from a fixed term pool.
pub struct QuizEngine<R = ThreadRng> {
    pool: Vec<String>,
    rng: R,
}

impl QuizEngine<ThreadRng> {
    /// Snapshot the session's current terms.
    pub fn new(session: &Session) -> Self {
        Self::with_rng(session.deck().terms(), rand::thread_rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(pool: Vec<String>, rng: R) -> Self {
        Self { pool, rng }
    }

    /// Ask one random question and score it against `session`.
    pub fn ask_once(
        &mut self,
        session: &mut Session,
        examinee: &mut dyn Examinee,
    ) -> Result<QuizOutcome> {
        let term = self
            .pool
            .choose(&mut self.rng)
            .ok_or(DeckError::EmptyDeck)?
            .clone();
        let expected = session
            .deck()
            .lookup(&term)
            .ok_or_else(|| DeckError::NotFound(term.clone()))?
            .to_string();

        let answer = examinee.answer(&term)?;
        let outcome = score(session, term, expected, answer);
        examinee.on_outcome(&outcome)?;
        Ok(outcome)
    }

    /// Ask `n` questions in a row from the same pool.
    pub fn ask(
        &mut self,
        n: usize,
        session: &mut Session,
        examinee: &mut dyn Examinee,
    ) -> Result<QuizSummary> {
        if n > 0 && self.pool.is_empty() {
            return Err(DeckError::EmptyDeck.into());
        }

        let mut summary = QuizSummary::default();
        for _ in 0..n {
            let outcome = self.ask_once(session, examinee)?;
            summary.asked += 1;
            if !outcome.correct {
                summary.wrong += 1;
            }
        }

        tracing::debug!(asked = summary.asked, wrong = summary.wrong, "quiz finished");
        Ok(summary)
    }
}

fn score(session: &mut Session, term: String, expected: String, answer: String) -> QuizOutcome {
    if answer == expected {
        return QuizOutcome {
            term,
            expected,
            answer,
            correct: true,
            cross_match: None,
        };
    }

    let mistakes = session.record_mistake(&term);
    tracing::debug!(term = %term, mistakes, "wrong answer");
    let cross_match = session
        .deck()
        .reverse_lookup(&answer)
        .filter(|other| *other != term)
        .map(str::to_string);

    QuizOutcome {
        term,
        expected,
        answer,
        correct: false,
        cross_match,
    }
}
