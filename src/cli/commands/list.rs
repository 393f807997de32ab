//! List command implementation.
//!
//! Primary discovery interface: filter by status (and optionally type),
//! then render in fixed group order with priority-descending sections.

use std::str::FromStr;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::format::render_groups;
use crate::model::{IssueType, Status};
use crate::query::{ListFilters, group_by_type};
use crate::store::{DEFAULT_STORE_FILE, IssueStore};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the store file is corrupt.
pub fn execute(args: &ListArgs, json: bool) -> Result<()> {
    let filters = build_filters(args)?;
    let store = IssueStore::open(DEFAULT_STORE_FILE)?;
    let issues = store.list_issues(&filters);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("No {} issues found", filters.status);
        return Ok(());
    }

    print!("{}", render_groups(&group_by_type(&issues)));
    Ok(())
}

fn build_filters(args: &ListArgs) -> Result<ListFilters> {
    let status = match args.status.as_deref() {
        Some(s) => Status::from_str(s)?,
        None => Status::Open,
    };
    let issue_type = args
        .issue_type
        .as_deref()
        .map(IssueType::from_str)
        .transpose()?;

    Ok(ListFilters { status, issue_type })
}
