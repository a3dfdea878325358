//! The `export` action.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use flashdeck_core::{codec, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &Session,
) -> Result<()> {
    let path = console.ask("File name:")?;
    save(console, session, Path::new(&path))?;
    console.blank()
}

/// Write the deck to `path` and report how many cards were saved.
pub fn save(
    console: &mut Console<impl BufRead, impl Write>,
    session: &Session,
    path: &Path,
) -> Result<()> {
    let saved = codec::export_file(path, session)?;
    console.say(&format!("{saved} cards have been saved."))
}
