//! `track_issues` (ti) - Flat-file issue tracker
//!
//! One JSON file, four commands (add, list, done, stats). No daemon, no
//! database, no background processes.

use track_issues::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
