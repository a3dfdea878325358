//! The `reset stats` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::Session;

use crate::console::Console;

pub fn execute(
    console: &mut Console<impl BufRead, impl Write>,
    session: &mut Session,
) -> Result<()> {
    session.reset_stats();
    console.say("Card statistics have been reset.")?;
    console.blank()
}
