use std::str::FromStr;

use crate::cli::AddArgs;
use crate::error::Result;
use crate::format::icons;
use crate::model::{IssueType, Priority};
use crate::store::{DEFAULT_STORE_FILE, IssueStore};

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the title is empty, the store file is corrupt, or
/// the store cannot be written.
pub fn execute(args: AddArgs, json: bool) -> Result<()> {
    // FromStr on these is infallible: unknown values become Custom.
    let issue_type = match args.issue_type {
        Some(t) => IssueType::from_str(&t)?,
        None => IssueType::Todo,
    };
    let priority = match args.priority {
        Some(p) => Priority::from_str(&p)?,
        None => Priority::Medium,
    };

    let mut store = IssueStore::open(DEFAULT_STORE_FILE)?;
    let issue = store.add(args.title, issue_type, priority)?;
    store.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!("{} Added #{}: {}", icons::OK, issue.id, issue.title);
    }

    Ok(())
}
