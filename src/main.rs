// Chunk: docs/chunks/settings - JSON settings + userscript header
//!
//! smart-home-end: build-side helper for the userscript.
//!
//! `header` prints the `// ==UserScript==` block the userscript manager needs
//! in front of the wasm loader; `settings` prints the default settings so they
//! can be edited and passed back with `--config` (or to `installWithConfig` in
//! the page).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use smart_home_end::{logging, Settings};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "smart-home-end", version, about = "Smart Home/End userscript helper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the userscript metadata header
    Header {
        /// Settings JSON file (defaults apply to anything it omits)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the default settings as JSON
    Settings,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    Settings::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Header { config } => {
            let settings = load_settings(config.as_ref())?;
            logging::init(&settings);
            debug!(matches = settings.userscript.matches.len(), "rendering header");
            print!("{}", settings.userscript.render());
        }
        Command::Settings => {
            let settings = Settings::default();
            logging::init(&settings);
            println!("{}", settings.to_json_pretty()?);
        }
    }

    Ok(())
}
