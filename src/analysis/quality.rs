// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Connection-quality analyzer

use super::{plural, push_unique, ToolIndex};
use crate::types::{Connection, ConnectionQuality, Issue, IssueCategory, PlacedTool, Severity};
use tracing::debug;

/// Automation-platform connections needed before dependency is flagged
pub const AUTOMATION_DEPENDENCY_THRESHOLD: usize = 3;

/// Flag broken, manual and automation-heavy connections
///
/// Each broken connection yields its own critical finding. Manual transfers are
/// rolled into one warning. Automation-platform connections only raise a
/// cost warning once there are [`AUTOMATION_DEPENDENCY_THRESHOLD`] of them.
#[must_use]
pub fn check_connections(tools: &[PlacedTool], connections: &[Connection]) -> Vec<Issue> {
    let index = ToolIndex::new(tools);
    let mut issues = Vec::new();

    for connection in connections.iter().filter(|c| c.quality == ConnectionQuality::Broken) {
        let from = index.name(&connection.from);
        let to = index.name(&connection.to);
        let mut affected = Vec::with_capacity(2);
        push_unique(&mut affected, [&connection.from, &connection.to]);
        issues.push(Issue {
            id: format!("broken-{}", connection.id),
            severity: Severity::Critical,
            title: format!("Broken integration: {from} → {to}"),
            description: format!(
                "The integration from {from} to {to} is failing. Anything entered in {from} since it broke has not reached {to}."
            ),
            affected_tools: affected,
            category: IssueCategory::MissingIntegration,
        });
    }

    let manual: Vec<&Connection> = connections
        .iter()
        .filter(|c| c.quality == ConnectionQuality::Manual)
        .collect();
    if !manual.is_empty() {
        issues.push(Issue {
            id: "manual-transfers".into(),
            severity: Severity::Warning,
            title: format!(
                "{} manual data {}",
                manual.len(),
                plural(manual.len(), "transfer", "transfers")
            ),
            description: format!(
                "Data is copied by hand between {}. Every hand-off costs staff time and invites typos.",
                pair_list(&index, &manual)
            ),
            affected_tools: endpoints(&manual),
            category: IssueCategory::ManualProcess,
        });
    }

    let automated: Vec<&Connection> = connections
        .iter()
        .filter(|c| c.quality == ConnectionQuality::Automation)
        .collect();
    if automated.len() >= AUTOMATION_DEPENDENCY_THRESHOLD {
        issues.push(Issue {
            id: "automation-dependency".into(),
            severity: Severity::Warning,
            title: "Heavy reliance on automation platforms".into(),
            description: format!(
                "{} connections run through a paid automation platform: {}. Each one adds task fees and another point of failure.",
                automated.len(),
                pair_list(&index, &automated)
            ),
            affected_tools: endpoints(&automated),
            category: IssueCategory::CostWaste,
        });
    }

    debug!(
        broken = issues.iter().filter(|i| i.severity == Severity::Critical).count(),
        manual = manual.len(),
        automated = automated.len(),
        "Connection quality checked"
    );

    issues
}

fn pair_list(index: &ToolIndex<'_>, connections: &[&Connection]) -> String {
    connections
        .iter()
        .map(|c| index.pair_label(c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn endpoints(connections: &[&Connection]) -> Vec<String> {
    let mut out = Vec::new();
    for connection in connections {
        push_unique(&mut out, [&connection.from, &connection.to]);
    }
    out
}
