use crate::error::Result;
use crate::format::render_stats;
use crate::store::{DEFAULT_STORE_FILE, IssueStore};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the store file is corrupt.
pub fn execute(json: bool) -> Result<()> {
    let store = IssueStore::open(DEFAULT_STORE_FILE)?;
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_stats(&stats));
    }

    Ok(())
}
