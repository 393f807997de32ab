//! Command-line interface for `track_issues`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::error::TrackerError;
use crate::logging;

/// `track_issues` (ti) - Flat-file issue tracker.
#[derive(Parser, Debug)]
#[command(name = "ti")]
#[command(
    author,
    version,
    about = "Flat-file issue tracker (single JSON store)",
    long_about = None,
    after_help = "Types: todo, bug, idea, test\n\
                  Priorities: high, medium, low\n\n\
                  The store is one JSON file (project_issues.json) rewritten in full\n\
                  on every command; not safe for concurrent invocations."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new issue
    Add(AddArgs),

    /// List issues grouped by type
    List(ListArgs),

    /// Mark an issue as completed
    Done(DoneArgs),

    /// Show project statistics
    Stats,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Issue title
    pub title: String,

    /// Issue type (todo, bug, idea, test); unknown values are stored as-is
    pub issue_type: Option<String>,

    /// Priority (high, medium, low); unknown values are stored as-is
    pub priority: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Status to list (default: open)
    pub status: Option<String>,

    /// Restrict to one issue type
    pub issue_type: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct DoneArgs {
    /// Issue id
    pub id: u64,
}

/// Run the CLI.
///
/// Recoverable tracker errors (missing issue, corrupt store file) are
/// printed and the process still exits 0; each invocation is independent.
///
/// # Errors
///
/// Returns an error only for setup failures (e.g. logging init).
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::Add(args) => commands::add::execute(args, cli.json),
        Commands::List(args) => commands::list::execute(&args, cli.json),
        Commands::Done(args) => commands::done::execute(&args, cli.json),
        Commands::Stats => commands::stats::execute(cli.json),
    };

    if let Err(e) = result {
        report(&e);
    }
    Ok(())
}

fn report(err: &TrackerError) {
    eprintln!("Error: {err}");
}
