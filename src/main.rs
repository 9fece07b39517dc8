//! scamlist - check names against a scam watchlist.
//!
//! The watchlist is a JSON array of strings loaded once per invocation.
//! Long-running use goes through scamlist-daemon / scamlist-client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use scamlist::commands;
use scamlist::namelist::store;
use scamlist::output::OutputControls;

/// Check names and users against a watchlist of known scammers.
#[derive(Parser, Debug)]
#[command(name = "scamlist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// Path to the names file (default: SCAMLIST_NAMES_PATH or ~/.scamlist/names.json)
    #[arg(long, global = true)]
    names_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a name or user against the watchlist
    Check {
        /// Name to check (multiple words are joined with spaces)
        name: Vec<String>,
    },

    /// Print the bot welcome/instructions message
    Start,

    /// List all names on the watchlist
    Names,

    /// Add a name to the watchlist file
    AddName {
        /// Name to add
        name: String,
    },

    /// Create an empty names file if none exists
    Init,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output = OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    let names_file = cli.names_file.unwrap_or_else(store::default_names_path);

    let result = match cli.command {
        Command::Check { name } => {
            commands::check::run(&name.join(" "), &names_file, &output)
        }
        Command::Start => commands::check::start(&output),
        Command::Names => commands::names::list(&names_file, &output),
        Command::AddName { name } => commands::names::add(&name, &names_file),
        Command::Init => commands::names::init(&names_file),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
