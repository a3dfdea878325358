//! The interactive action loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::config::FlashdeckConfig;
use flashdeck_core::Session;

use crate::commands::{self, Action};
use crate::console::Console;

/// Run a session until `exit`.
///
/// Returns an error for anything the session cannot recover from: a
/// malformed deck file, a non-numeric quiz length, I/O failures, or input
/// ending before `exit`.
pub fn run(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
    config: &FlashdeckConfig,
) -> Result<()> {
    if let Some(path) = &config.import_from {
        commands::import::load(console, session, path)?;
    }

    let prompt = Action::prompt();
    loop {
        let input = console.ask(&prompt)?;
        let action = match input.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                tracing::debug!("{e}");
                console.say("No valid input")?;
                console.blank()?;
                continue;
            }
        };

        tracing::debug!(%action, "dispatching");
        match action {
            Action::Add => commands::add::execute(console, session)?,
            Action::Remove => commands::remove::execute(console, session)?,
            Action::Import => commands::import::execute(console, session)?,
            Action::Export => commands::export::execute(console, session)?,
            Action::Ask => commands::ask::execute(console, session)?,
            Action::Log => commands::log::execute(console)?,
            Action::HardestCard => commands::hardest::execute(console, session)?,
            Action::ResetStats => commands::reset::execute(console, session)?,
            Action::Exit => return commands::exit::execute(console, session, config),
        }
    }
}
