//! Core data types for `track_issues`.
//!
//! Same serde field names as the original `project_issues.json` layout,
//! so existing store files load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    Completed,
    #[serde(untagged)]
    Custom(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
            Self::Custom(value) => value,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::TrackerError;

    // Unknown statuses are kept verbatim so that `list <status>` matches
    // nothing instead of failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}

/// Issue type category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    #[default]
    Todo,
    Bug,
    Idea,
    Test,
    #[serde(untagged)]
    Custom(String),
}

impl IssueType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::Bug => "bug",
            Self::Idea => "idea",
            Self::Test => "test",
            Self::Custom(value) => value,
        }
    }

    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "bug" => Ok(Self::Bug),
            "idea" => Ok(Self::Idea),
            "test" => Ok(Self::Test),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}

/// Issue priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    #[serde(untagged)]
    Custom(String),
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Custom(value) => value,
        }
    }

    /// Sort rank for descending-priority ordering: high before medium
    /// before low, unknown values last.
    #[must_use]
    pub const fn sort_rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::Custom(_) => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}

/// A tracked unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Unique id, monotonically assigned, never reused.
    pub id: u64,

    /// Title (non-empty).
    pub title: String,

    /// Issue type (todo, bug, idea, test).
    #[serde(rename = "type", default)]
    pub issue_type: IssueType,

    /// Priority (high, medium, low).
    #[serde(default)]
    pub priority: Priority,

    /// Workflow status.
    #[serde(default)]
    pub status: Status,

    /// Creation timestamp, immutable.
    pub created: DateTime<Utc>,

    /// Completion timestamp. Serialized as `null` until the issue is
    /// completed, matching the original file layout.
    #[serde(default)]
    pub completed: Option<DateTime<Utc>>,
}

impl Issue {
    /// Construct a fresh open issue with `created = now`.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, issue_type: IssueType, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            issue_type,
            priority,
            status: Status::Open,
            created: Utc::now(),
            completed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_permissive() {
        assert_eq!(Status::from_str("open").unwrap(), Status::Open);
        assert_eq!(Status::from_str("COMPLETED").unwrap(), Status::Completed);
        assert_eq!(
            Status::from_str("archived").unwrap(),
            Status::Custom("archived".to_string())
        );
    }

    #[test]
    fn test_type_from_str_permissive() {
        assert_eq!(IssueType::from_str("bug").unwrap(), IssueType::Bug);
        assert_eq!(
            IssueType::from_str("spike").unwrap(),
            IssueType::Custom("spike".to_string())
        );
    }

    #[test]
    fn test_priority_sort_rank() {
        assert!(Priority::High.sort_rank() < Priority::Medium.sort_rank());
        assert!(Priority::Medium.sort_rank() < Priority::Low.sort_rank());
        assert!(Priority::Low.sort_rank() < Priority::Custom("urgent".to_string()).sort_rank());
    }

    #[test]
    fn test_issue_serde_field_names() {
        let issue = Issue::new(1, "Fix bug", IssueType::Bug, Priority::High);
        let json = serde_json::to_value(&issue).unwrap();

        // Field names must match the original file layout verbatim.
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "bug");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "open");
        assert!(json["completed"].is_null());
        assert!(json.get("issue_type").is_none());
    }

    #[test]
    fn test_issue_roundtrip_custom_values() {
        let mut issue = Issue::new(7, "Odd one", IssueType::Custom("spike".to_string()), Priority::Medium);
        issue.priority = Priority::Custom("urgent".to_string());

        let json = serde_json::to_string(&issue).unwrap();
        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, issue);
        assert_eq!(back.issue_type.as_str(), "spike");
        assert_eq!(back.priority.as_str(), "urgent");
    }
}
