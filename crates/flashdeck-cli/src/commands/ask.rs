//! The `ask` action.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use flashdeck_core::{DeckError, QuizEngine, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
) -> Result<()> {
    let input = console.ask("How many times to ask?")?;
    let times: usize = input
        .parse()
        .with_context(|| format!("invalid number of questions: {input:?}"))?;

    let mut engine = QuizEngine::new(session);
    match engine.ask(times, session, console) {
        Ok(_) => {}
        Err(e) if e.downcast_ref::<DeckError>() == Some(&DeckError::EmptyDeck) => {
            console.say("There are no cards to ask.")?;
        }
        Err(e) => return Err(e),
    }
    console.blank()
}
