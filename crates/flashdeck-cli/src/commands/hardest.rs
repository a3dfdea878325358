//! The `hardest card` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::{Hardest, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &Session,
) -> Result<()> {
    console.say(&describe(&session.hardest()))?;
    console.blank()
}

fn describe(hardest: &Hardest) -> String {
    match hardest.terms.as_slice() {
        [] => "There are no cards with errors.".to_string(),
        [term] => format!(
            "The hardest card is \"{term}\". You have {} errors answering it.",
            hardest.mistakes
        ),
        terms => {
            let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                quoted.join(", "),
                hardest.mistakes
            )
        }
    }
}
