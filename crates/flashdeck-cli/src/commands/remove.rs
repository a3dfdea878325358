//! The `remove` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::{DeckError, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
) -> Result<()> {
    let term = console.ask("Which card?")?;
    match session.remove_card(&term) {
        Ok(()) => console.say("The card has been removed.")?,
        Err(DeckError::NotFound(term)) => {
            console.say(&format!("Can't remove \"{term}\": there is no such card."))?
        }
        Err(e) => return Err(e.into()),
    }
    console.blank()
}
