use crate::cli::DoneArgs;
use crate::error::{Result, TrackerError};
use crate::format::icons;
use crate::store::{DEFAULT_STORE_FILE, IssueStore};

/// Execute the done command.
///
/// A missing id is reported inline, not as a process failure; the store
/// file is left untouched in that case.
///
/// # Errors
///
/// Returns an error if the store file is corrupt or cannot be written.
pub fn execute(args: &DoneArgs, json: bool) -> Result<()> {
    let mut store = IssueStore::open(DEFAULT_STORE_FILE)?;

    match store.complete(args.id) {
        Ok(issue) => {
            store.save()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&issue)?);
            } else {
                println!("{} Completed #{}: {}", icons::OK, issue.id, issue.title);
            }
        }
        Err(TrackerError::IssueNotFound { id }) => {
            println!("{} Issue #{} not found", icons::FAIL, id);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
