// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Analyzer pipeline - turns a stack into findings, statistics and a score
//!
//! Four independent analyzers each look at one kind of weakness:
//!
//! - [`quality`]: broken, manual and automation-platform connections
//! - [`missing`]: category pairs the rule table expects to be connected
//! - [`isolation`]: tools with no connection at all
//! - [`redundancy`]: several tools doing the same job
//!
//! [`analyze`] runs them all, orders the merged findings by severity and
//! derives the statistics block in [`stats`].

pub mod isolation;
pub mod missing;
pub mod quality;
pub mod redundancy;
pub mod stats;

use crate::catalog::UNKNOWN_TOOL;
use crate::rules::CONNECTION_RULES;
use crate::types::{AnalysisResult, Connection, ConnectionRule, PlacedTool};
use std::collections::HashMap;
use tracing::debug;

/// Analyze a stack against the built-in rule table
#[must_use]
pub fn analyze(tools: &[PlacedTool], connections: &[Connection]) -> AnalysisResult {
    analyze_with_rules(tools, connections, CONNECTION_RULES)
}

/// Analyze a stack against a caller-supplied rule table
#[must_use]
pub fn analyze_with_rules(
    tools: &[PlacedTool],
    connections: &[Connection],
    rules: &[ConnectionRule],
) -> AnalysisResult {
    if tools.is_empty() {
        debug!("Empty stack, nothing to analyze");
        return AnalysisResult::perfect();
    }

    let mut issues = quality::check_connections(tools, connections);
    issues.extend(missing::check_rules(tools, connections, rules));
    issues.extend(isolation::find_silos(tools, connections));
    issues.extend(redundancy::find_overlaps(tools));

    // sort_by_key is stable, so analyzer order survives within a severity
    issues.sort_by_key(|issue| issue.severity.rank());

    let tally = stats::Tally::new(tools, connections, &issues);
    let score = tally.health_score();

    debug!(
        tools = tools.len(),
        connections = connections.len(),
        issues = issues.len(),
        score,
        "Analysis complete"
    );

    AnalysisResult {
        score,
        issues,
        stats: tally.stats(),
        pain_points: tally.pain_points(),
    }
}

/// Instance ID to placed tool lookup, first instance wins on duplicates
pub struct ToolIndex<'a> {
    by_instance: HashMap<&'a str, &'a PlacedTool>,
}

impl<'a> ToolIndex<'a> {
    /// Index the given tools
    #[must_use]
    pub fn new(tools: &'a [PlacedTool]) -> Self {
        let mut by_instance = HashMap::with_capacity(tools.len());
        for tool in tools {
            by_instance.entry(tool.instance_id.as_str()).or_insert(tool);
        }
        Self { by_instance }
    }

    /// Placed tool for an instance ID
    #[must_use]
    pub fn get(&self, instance_id: &str) -> Option<&'a PlacedTool> {
        self.by_instance.get(instance_id).copied()
    }

    /// Display name for an instance ID, with a placeholder for dangling references
    #[must_use]
    pub fn name(&self, instance_id: &str) -> &'static str {
        self.get(instance_id).map_or(UNKNOWN_TOOL, PlacedTool::display_name)
    }

    /// "A → B" label for a connection
    #[must_use]
    pub fn pair_label(&self, connection: &Connection) -> String {
        format!("{} → {}", self.name(&connection.from), self.name(&connection.to))
    }
}

/// Push IDs into `out`, skipping ones already present
pub(crate) fn push_unique(out: &mut Vec<String>, ids: impl IntoIterator<Item = impl AsRef<str>>) {
    for id in ids {
        let id = id.as_ref();
        if !out.iter().any(|existing| existing == id) {
            out.push(id.to_string());
        }
    }
}

/// Pick the singular or plural word for a count
pub(crate) fn plural<'w>(count: usize, one: &'w str, many: &'w str) -> &'w str {
    if count == 1 {
        one
    } else {
        many
    }
}
