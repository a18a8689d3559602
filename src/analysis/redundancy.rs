// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Redundancy analyzer - several tools covering one category

use crate::types::{Category, Issue, IssueCategory, PlacedTool, Severity};
use tracing::debug;

/// Tools in one category before the overlap is flagged
pub const REDUNDANCY_THRESHOLD: usize = 3;

/// Group placed tools by category, categories in first-seen order
///
/// Tools whose catalog ID does not resolve belong to no group.
#[must_use]
pub fn group_by_category(tools: &[PlacedTool]) -> Vec<(Category, Vec<&PlacedTool>)> {
    let mut groups: Vec<(Category, Vec<&PlacedTool>)> = Vec::new();
    for tool in tools {
        let Some(category) = tool.category() else {
            continue;
        };
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(tool),
            None => groups.push((category, vec![tool])),
        }
    }
    groups
}

/// One redundancy warning per category at or above the threshold
#[must_use]
pub fn find_overlaps(tools: &[PlacedTool]) -> Vec<Issue> {
    let issues: Vec<Issue> = group_by_category(tools)
        .into_iter()
        .filter(|(_, members)| members.len() >= REDUNDANCY_THRESHOLD)
        .map(|(category, members)| {
            let label = category.style().label;
            let names: Vec<&str> = members.iter().map(|t| t.display_name()).collect();
            Issue {
                id: format!("redundant-{}", category.slug()),
                severity: Severity::Warning,
                title: format!("{} overlapping {label} tools", members.len()),
                description: format!(
                    "You are paying for {} which all cover {label}. Consolidating onto one keeps the data in a single place and cuts the bill.",
                    names.join(", ")
                ),
                affected_tools: members.iter().map(|t| t.instance_id.clone()).collect(),
                category: IssueCategory::Redundancy,
            }
        })
        .collect();

    debug!(overlaps = issues.len(), "Redundancy checked");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::placed;

    #[test]
    fn test_two_in_a_category_is_fine() {
        let tools = vec![placed("a", "asana"), placed("b", "trello"), placed("c", "hubspot")];
        assert!(find_overlaps(&tools).is_empty());
    }

    #[test]
    fn test_three_in_a_category_flags_all_names() {
        let tools = vec![placed("a", "asana"), placed("b", "trello"), placed("c", "monday")];
        let issues = find_overlaps(&tools);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "redundant-project-management");
        assert_eq!(issues[0].affected_tools, vec!["a", "b", "c"]);
        for name in ["Asana", "Trello", "monday.com"] {
            assert!(issues[0].description.contains(name));
        }
    }

    #[test]
    fn test_five_in_a_category_is_still_one_issue() {
        let tools = vec![
            placed("a", "asana"),
            placed("b", "trello"),
            placed("c", "monday"),
            placed("d", "clickup"),
            placed("e", "asana"),
        ];
        let issues = find_overlaps(&tools);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].affected_tools.len(), 5);
        assert_eq!(issues[0].title, "5 overlapping Project Management tools");
    }

    #[test]
    fn test_unknown_tools_are_not_grouped() {
        let tools = vec![placed("a", "x"), placed("b", "y"), placed("c", "z")];
        assert!(group_by_category(&tools).is_empty());
        assert!(find_overlaps(&tools).is_empty());
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let tools = vec![placed("a", "slack"), placed("b", "hubspot"), placed("c", "gmail")];
        let groups = group_by_category(&tools);
        assert_eq!(groups[0].0, Category::Communication);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, Category::Crm);
    }
}
