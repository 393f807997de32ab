//! Query and grouping types for issue listings.

use crate::model::{Issue, IssueType, Status};

/// Filter options for listing issues.
#[derive(Debug, Clone)]
pub struct ListFilters {
    /// Status to match (default open).
    pub status: Status,
    /// Optional type to match.
    pub issue_type: Option<IssueType>,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self {
            status: Status::Open,
            issue_type: None,
        }
    }
}

/// Fixed display order for type groups.
pub const GROUP_ORDER: [IssueType; 4] = [
    IssueType::Bug,
    IssueType::Todo,
    IssueType::Idea,
    IssueType::Test,
];

/// A display group of issues sharing one type.
#[derive(Debug)]
pub struct IssueGroup<'a> {
    pub issue_type: IssueType,
    pub issues: Vec<&'a Issue>,
}

/// Group issues by type in the fixed display order, each group sorted by
/// priority descending (high first, unknown priorities last). The sort is
/// stable, so ties keep encounter order.
///
/// Issues with a type outside the four standard groups fall outside the
/// display buckets and are dropped, matching the original behavior.
#[must_use]
pub fn group_by_type<'a>(issues: &[&'a Issue]) -> Vec<IssueGroup<'a>> {
    GROUP_ORDER
        .iter()
        .filter_map(|group_type| {
            let mut group: Vec<&Issue> = issues
                .iter()
                .filter(|i| &i.issue_type == group_type)
                .copied()
                .collect();
            if group.is_empty() {
                return None;
            }
            group.sort_by_key(|i| i.priority.sort_rank());
            Some(IssueGroup {
                issue_type: group_type.clone(),
                issues: group,
            })
        })
        .collect()
}
