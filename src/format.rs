//! Text formatting for terminal output.
//!
//! Provides the emoji-decorated rendering used by the CLI:
//! - Priority icons (🔥 ⚡ 📌)
//! - Type group headings (🐛 Bugs, 📝 TODOs, 💡 Ideas, 🧪 Tests)
//! - Issue line and statistics block formatting

use crate::model::{Issue, IssueType, Priority};
use crate::query::IssueGroup;
use crate::store::Stats;

/// Icon characters.
pub mod icons {
    /// High priority (fire).
    pub const HIGH: &str = "🔥";
    /// Medium priority (zap).
    pub const MEDIUM: &str = "⚡";
    /// Low priority (pushpin).
    pub const LOW: &str = "📌";
    /// Confirmation prefix.
    pub const OK: &str = "✅";
    /// Failure prefix.
    pub const FAIL: &str = "❌";
    /// Statistics heading.
    pub const STATS: &str = "📊";
}

/// Return the icon for a priority, empty for unknown values.
#[must_use]
pub const fn format_priority_icon(priority: &Priority) -> &'static str {
    match priority {
        Priority::High => icons::HIGH,
        Priority::Medium => icons::MEDIUM,
        Priority::Low => icons::LOW,
        Priority::Custom(_) => "",
    }
}

/// Return the heading for a type group, `None` for types outside the
/// display buckets.
#[must_use]
pub const fn format_type_heading(issue_type: &IssueType) -> Option<&'static str> {
    match issue_type {
        IssueType::Bug => Some("🐛 Bugs"),
        IssueType::Todo => Some("📝 TODOs"),
        IssueType::Idea => Some("💡 Ideas"),
        IssueType::Test => Some("🧪 Tests"),
        IssueType::Custom(_) => None,
    }
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} - {title} ({priority})`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} #{} - {} ({})",
        format_priority_icon(&issue.priority),
        issue.id,
        issue.title,
        issue.priority,
    )
}

/// Render type groups as headed sections separated by a dash rule.
#[must_use]
pub fn render_groups(groups: &[IssueGroup<'_>]) -> String {
    let mut out = String::new();
    for group in groups {
        let Some(heading) = format_type_heading(&group.issue_type) else {
            continue;
        };
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for issue in &group.issues {
            out.push_str(&format_issue_line(issue));
            out.push('\n');
        }
    }
    out
}

/// Render the statistics block.
#[must_use]
pub fn render_stats(stats: &Stats) -> String {
    let mut out = format!(
        "\n{} Project Statistics\n{}\n",
        icons::STATS,
        "=".repeat(30)
    );
    out.push_str(&format!("Total Issues: {}\n", stats.total));
    out.push_str(&format!("Completed: {}\n", stats.completed));
    out.push_str(&format!("Open: {}\n", stats.open));
    out.push('\n');
    out.push_str(&format!("🐛 Open Bugs: {}\n", stats.open_bugs));
    out.push_str(&format!("📝 Open TODOs: {}\n", stats.open_todos));
    out.push_str(&format!("💡 Ideas: {}\n", stats.ideas));

    if let Some(completion) = stats.completion {
        out.push('\n');
        out.push_str(&format!("Progress: {completion:.1}% complete\n"));
    }
    out
}
