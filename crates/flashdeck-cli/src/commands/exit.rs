//! The `exit` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::config::FlashdeckConfig;
use flashdeck_core::Session;

use crate::commands::export;
use crate::console::Console;

/// Say goodbye and, when configured, export the deck.
pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &Session,
    config: &FlashdeckConfig,
) -> Result<()> {
    console.say("Bye bye!")?;
    if let Some(path) = &config.export_to {
        export::save(console, session, path)?;
    }
    Ok(())
}
