//! The `import` action.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use flashdeck_core::{codec, Session};

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
) -> Result<()> {
    let path = console.ask("File name:")?;
    load(console, session, Path::new(&path))
}

/// Import `path` into the session. A missing file is reported and skipped;
/// any other failure is returned.
pub fn load(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
    path: &Path,
) -> Result<()> {
    match codec::import_file(path, session) {
        Ok(loaded) => console.say(&format!("{loaded} cards have been loaded."))?,
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "import skipped");
            console.say("File not found.")?
        }
        Err(e) => return Err(e.into()),
    }
    console.blank()
}
