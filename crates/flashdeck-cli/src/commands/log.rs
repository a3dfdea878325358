//! The `log` action.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::console::Console;

pub fn execute(console: &mut Console<impl BufRead, impl Write>) -> Result<()> {
    let path = console.ask("File name:")?;
    console.transcript().save(Path::new(&path))?;
    console.say("The log has been saved.")?;
    console.blank()
}
