//! flashdeck CLI — an interactive flashcard trainer.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flashdeck_core::config::{load_config_from, FlashdeckConfig};
use flashdeck_core::Session;

mod commands;
mod console;
mod repl;

use console::Console;

#[derive(Parser)]
#[command(name = "flashdeck", version, about = "Interactive flashcard trainer")]
struct Cli {
    /// Deck file to import before the first prompt
    #[arg(long = "import_from", value_name = "PATH")]
    import_from: Option<PathBuf>,

    /// Deck file to export to on exit
    #[arg(long = "export_to", value_name = "PATH")]
    export_to: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = load_config_from(cli.config.as_deref()).and_then(|config| {
        let config = config.with_overrides(cli.import_from, cli.export_to);
        init_tracing(&config);
        run(&config)
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(config: &FlashdeckConfig) {
    let level = &config.log_level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("flashdeck={level},flashdeck_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &FlashdeckConfig) -> Result<()> {
    tracing::debug!(?config, "starting session");
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new();
    repl::run(&mut console, &mut session, config)
}
