// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Missing-connection analyzer - checks the stack against the rule table

use super::push_unique;
use crate::types::{Category, Connection, ConnectionRule, Issue, PlacedTool};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Emit the configured finding for every applicable rule left unsatisfied
///
/// A rule applies only when both of its categories are present in the stack.
/// It is satisfied by any connection, in either direction and of any quality,
/// between an instance of one category and an instance of the other.
#[must_use]
pub fn check_rules(
    tools: &[PlacedTool],
    connections: &[Connection],
    rules: &[ConnectionRule],
) -> Vec<Issue> {
    let categories: HashMap<&str, Category> = tools
        .iter()
        .filter_map(|t| t.category().map(|c| (t.instance_id.as_str(), c)))
        .collect();

    let members = |category: Category| {
        tools
            .iter()
            .filter(|t| t.category() == Some(category))
            .map(|t| t.instance_id.as_str())
            .collect::<Vec<_>>()
    };

    let mut issues = Vec::new();
    for rule in rules {
        let sources = members(rule.source);
        let targets = members(rule.target);
        if sources.is_empty() || targets.is_empty() {
            trace!(rule = rule.issue.id, "Rule does not apply");
            continue;
        }

        let links = |a: Option<&Category>, b: Option<&Category>| {
            a == Some(&rule.source) && b == Some(&rule.target)
        };
        let satisfied = connections.iter().any(|c| {
            let from = categories.get(c.from.as_str());
            let to = categories.get(c.to.as_str());
            links(from, to) || links(to, from)
        });
        if satisfied {
            continue;
        }

        let mut affected = Vec::with_capacity(sources.len() + targets.len());
        push_unique(&mut affected, sources.iter().chain(&targets));
        issues.push(Issue {
            id: format!("missing-{}", rule.issue.id),
            severity: rule.issue.severity,
            title: rule.issue.title.to_string(),
            description: rule.issue.description.to_string(),
            affected_tools: affected,
            category: rule.issue.category,
        });
    }

    debug!(unsatisfied = issues.len(), rules = rules.len(), "Rules checked");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{conn, placed};
    use crate::rules::CONNECTION_RULES;
    use crate::types::{ConnectionQuality, IssueCategory, Severity};

    fn website_crm_rule() -> &'static ConnectionRule {
        CONNECTION_RULES
            .iter()
            .find(|r| r.issue.id == "website-crm")
            .unwrap()
    }

    #[test]
    fn test_rule_skipped_when_category_absent() {
        let tools = vec![placed("site", "wix"), placed("site2", "wordpress")];
        let issues = check_rules(&tools, &[], std::slice::from_ref(website_crm_rule()));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unsatisfied_rule_lists_both_categories() {
        let tools = vec![
            placed("site", "wix"),
            placed("crm1", "hubspot"),
            placed("crm2", "pipedrive"),
            placed("chat", "slack"),
        ];
        let issues = check_rules(&tools, &[], std::slice::from_ref(website_crm_rule()));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "missing-website-crm");
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].category, IssueCategory::MissingIntegration);
        assert_eq!(issues[0].affected_tools, vec!["site", "crm1", "crm2"]);
    }

    #[test]
    fn test_rule_satisfied_in_reverse_direction() {
        let tools = vec![placed("site", "wix"), placed("crm", "hubspot")];
        let connections = vec![conn("c1", "crm", "site", ConnectionQuality::Manual)];
        let issues = check_rules(&tools, &connections, std::slice::from_ref(website_crm_rule()));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_rule_satisfied_by_any_instance_pair() {
        let tools = vec![
            placed("site", "wix"),
            placed("crm1", "hubspot"),
            placed("crm2", "pipedrive"),
        ];
        let connections = vec![conn("c1", "site", "crm2", ConnectionQuality::Native)];
        let issues = check_rules(&tools, &connections, std::slice::from_ref(website_crm_rule()));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_dangling_connection_does_not_satisfy() {
        let tools = vec![placed("site", "wix"), placed("crm", "hubspot")];
        let connections = vec![conn("c1", "site", "ghost", ConnectionQuality::Native)];
        let issues = check_rules(&tools, &connections, std::slice::from_ref(website_crm_rule()));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_one_issue_per_rule() {
        let tools = vec![
            placed("site", "wix"),
            placed("crm", "hubspot"),
            placed("form", "typeform"),
            placed("pay", "stripe"),
            placed("books", "xero"),
        ];
        let issues = check_rules(&tools, &[], CONNECTION_RULES);
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "missing-website-crm",
                "missing-forms-crm",
                "missing-payments-accounting",
                "missing-crm-payments",
            ]
        );
    }
}
