// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Isolation analyzer - finds tools that share data with nothing

use crate::types::{Connection, Issue, IssueCategory, PlacedTool, Severity};
use std::collections::HashSet;
use tracing::debug;

/// Every instance ID that appears as either end of a connection
#[must_use]
pub fn connected_ids(connections: &[Connection]) -> HashSet<&str> {
    connections
        .iter()
        .flat_map(|c| [c.from.as_str(), c.to.as_str()])
        .collect()
}

/// Placed tools with no incident connection, in input order
#[must_use]
pub fn siloed_tools<'a>(tools: &'a [PlacedTool], connections: &[Connection]) -> Vec<&'a PlacedTool> {
    let connected = connected_ids(connections);
    tools
        .iter()
        .filter(|t| !connected.contains(t.instance_id.as_str()))
        .collect()
}

/// One data-silo warning per unconnected tool
#[must_use]
pub fn find_silos(tools: &[PlacedTool], connections: &[Connection]) -> Vec<Issue> {
    let issues: Vec<Issue> = siloed_tools(tools, connections)
        .into_iter()
        .map(|tool| {
            let name = tool.display_name();
            Issue {
                id: format!("silo-{}", tool.instance_id),
                severity: Severity::Warning,
                title: format!("{name} is isolated"),
                description: format!(
                    "{name} doesn't exchange data with any other tool, so whatever lives there is re-typed elsewhere or lost."
                ),
                affected_tools: vec![tool.instance_id.clone()],
                category: IssueCategory::DataSilo,
            }
        })
        .collect();

    debug!(silos = issues.len(), "Isolation checked");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{conn, placed};
    use crate::types::ConnectionQuality;

    #[test]
    fn test_unconnected_tools_flagged_once_each() {
        let tools = vec![placed("a", "hubspot"), placed("b", "slack"), placed("c", "notion")];
        let connections = vec![conn("c1", "a", "b", ConnectionQuality::Native)];
        let issues = find_silos(&tools, &connections);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].affected_tools, vec!["c"]);
        assert_eq!(issues[0].title, "Notion is isolated");
    }

    #[test]
    fn test_incoming_edge_counts_as_connected() {
        let tools = vec![placed("a", "hubspot"), placed("b", "slack")];
        let connections = vec![conn("c1", "a", "b", ConnectionQuality::Broken)];
        assert!(find_silos(&tools, &connections).is_empty());
    }

    #[test]
    fn test_dangling_edge_still_connects_its_live_end() {
        let tools = vec![placed("a", "hubspot")];
        let connections = vec![conn("c1", "ghost", "a", ConnectionQuality::Manual)];
        assert!(find_silos(&tools, &connections).is_empty());
    }

    #[test]
    fn test_no_connections_every_tool_is_a_silo() {
        let tools = vec![placed("a", "hubspot"), placed("b", "slack"), placed("c", "mystery")];
        let issues = find_silos(&tools, &[]);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[2].title, "Unknown tool is isolated");
    }
}
