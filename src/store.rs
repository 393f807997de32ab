//! File-backed issue store.
//!
//! All data lives in memory. Use `open()` to load from a JSON file and
//! `save()` to persist back. Every CLI invocation does a full
//! load-mutate-save cycle with no locking, so the store is not safe for
//! concurrent invocations: the last writer wins.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::model::{Issue, IssueType, Priority, Status};
use crate::query::ListFilters;

/// Default store file name, resolved against the working directory.
pub const DEFAULT_STORE_FILE: &str = "project_issues.json";

/// Persisted store layout: `{ "issues": [...], "next_id": N }`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    issues: Vec<Issue>,
    next_id: u64,
}

/// Aggregate statistics over a store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub open: usize,
    pub open_bugs: usize,
    pub open_todos: usize,
    /// Ideas regardless of status.
    pub ideas: usize,
    /// Completion percentage; absent when the store is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<f64>,
}

/// File-backed issue store.
pub struct IssueStore {
    issues: Vec<Issue>,
    next_id: u64,
    path: Option<PathBuf>,
}

impl IssueStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store with `next_id = 1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            next_id: 1,
            path: None,
        }
    }

    /// Open a store file, yielding an empty store when the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the file is present but not valid JSON for the
    /// store layout, or `Io` on read failure.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "store file missing, starting empty");
            let mut store = Self::new();
            store.path = Some(path.to_path_buf());
            return Ok(store);
        }

        let contents = fs::read_to_string(path)?;
        let data: StoreFile =
            serde_json::from_str(&contents).map_err(|e| TrackerError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), issues = data.issues.len(), "loaded store");
        Ok(Self {
            issues: data.issues,
            next_id: data.next_id,
            path: Some(path.to_path_buf()),
        })
    }

    /// Save to the file that was opened.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if no file path is set, or `Io` on write failure.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| TrackerError::Storage("No file path set; use save_to()".to_string()))?;
        self.save_to(path.clone())
    }

    /// Save the full store to a specific path as indented JSON.
    ///
    /// Uses write-to-temp + rename for atomicity.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = StoreFile {
            issues: self.issues.clone(),
            next_id: self.next_id,
        };

        let json = serde_json::to_string_pretty(&data)?;

        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        writeln!(file, "{json}")?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, path)?;
        debug!(path = %path.display(), issues = self.issues.len(), "saved store");
        Ok(())
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a new open issue with `id = next_id` and `created = now`.
    ///
    /// `type` and `priority` accept any value; unknown ones are stored
    /// verbatim via the `Custom` variants.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the title is empty or whitespace-only.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        issue_type: IssueType,
        priority: Priority,
    ) -> Result<Issue> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TrackerError::validation("title", "cannot be empty"));
        }

        let issue = Issue::new(self.next_id, title, issue_type, priority);
        self.next_id += 1;
        self.issues.push(issue.clone());

        debug!(id = issue.id, "added issue");
        Ok(issue)
    }

    /// Mark an issue as completed and set its completion timestamp.
    ///
    /// Re-completing silently overwrites the timestamp.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no issue has that id; the store is left
    /// unchanged in that case.
    pub fn complete(&mut self, id: u64) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(TrackerError::IssueNotFound { id })?;

        issue.status = Status::Completed;
        issue.completed = Some(Utc::now());

        debug!(id, "completed issue");
        Ok(issue.clone())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get a single issue by id.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: u64) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or(TrackerError::IssueNotFound { id })
    }

    /// List issues matching the filters, in insertion order.
    ///
    /// An empty result is not an error.
    #[must_use]
    pub fn list_issues(&self, filters: &ListFilters) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.status == filters.status)
            .filter(|issue| {
                filters
                    .issue_type
                    .as_ref()
                    .is_none_or(|t| &issue.issue_type == t)
            })
            .collect()
    }

    /// Compute aggregate statistics for the current snapshot.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let total = self.issues.len();
        let completed = self
            .issues
            .iter()
            .filter(|i| i.status == Status::Completed)
            .count();
        let open_bugs = self
            .issues
            .iter()
            .filter(|i| i.issue_type == IssueType::Bug && i.status.is_open())
            .count();
        let open_todos = self
            .issues
            .iter()
            .filter(|i| i.issue_type == IssueType::Todo && i.status.is_open())
            .count();
        let ideas = self
            .issues
            .iter()
            .filter(|i| i.issue_type == IssueType::Idea)
            .count();

        let completion = if total > 0 {
            Some(completed as f64 / total as f64 * 100.0)
        } else {
            None
        };

        Stats {
            total,
            completed,
            open: total - completed,
            open_bugs,
            open_todos,
            ideas,
            completion,
        }
    }

    /// All issues in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The next id to be assigned.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// The total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}
