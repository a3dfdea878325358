//! The `add` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::{DeckError, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
) -> Result<()> {
    console.say("The card:")?;
    let term = read_until_valid(console, |input| session.deck().check_term(input))?;

    console.say("The definition of the card:")?;
    let definition = read_until_valid(console, |input| session.deck().check_definition(input))?;

    session.add_card(&term, &definition)?;
    console.say(&format!(
        "The pair (\"{term}\":\"{definition}\") has been added."
    ))?;
    console.blank()
}

/// Keep reading lines until `check` accepts one.
fn read_until_valid(
    console: &mut Console<impl BufRead, impl Write>,
    check: impl Fn(&str) -> Result<(), DeckError>,
) -> Result<String> {
    loop {
        let input = console.read_line()?;
        match check(&input) {
            Ok(()) => return Ok(input),
            Err(e) => console.say(&retry_message(&e))?,
        }
    }
}

fn retry_message(err: &DeckError) -> String {
    match err {
        DeckError::EmptyTerm => "Empty terms are not allowed. Try again:".to_string(),
        DeckError::EmptyDefinition => "Empty definitions are not allowed. Try again:".to_string(),
        DeckError::DuplicateTerm(term) => format!("The card \"{term}\" already exists. Try again:"),
        DeckError::DuplicateDefinition(definition) => {
            format!("The definition \"{definition}\" already exists. Try again:")
        }
        other => format!("{other}. Try again:"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{output_of, scripted};

    #[test]
    fn adds_card() {
        let mut session = Session::new();
        let mut console = scripted("cat\nanimal\n");
        execute(&mut console, &mut session).unwrap();

        assert_eq!(session.deck().lookup("cat"), Some("animal"));
        assert_eq!(
            output_of(console),
            "The card:\nThe definition of the card:\nThe pair (\"cat\":\"animal\") has been added.\n\n"
        );
    }

    #[test]
    fn retries_empty_and_duplicates() {
        let mut session = Session::new();
        session.add_card("cat", "animal").unwrap();
        let mut console = scripted("\ncat\ndog\nanimal\npet\n");
        execute(&mut console, &mut session).unwrap();

        assert_eq!(session.deck().lookup("dog"), Some("pet"));
        let out = output_of(console);
        assert!(out.contains("Empty terms are not allowed. Try again:\n"));
        assert!(out.contains("The card \"cat\" already exists. Try again:\n"));
        assert!(out.contains("The definition \"animal\" already exists. Try again:\n"));
    }
}
