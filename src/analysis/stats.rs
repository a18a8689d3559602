// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Score and statistics calculator
//!
//! The weights below are product heuristics and are kept exactly as tuned.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

use super::{isolation, plural};
use crate::catalog;
use crate::types::{Connection, ConnectionQuality, Issue, IssueCategory, PlacedTool, Severity, Stats};

/// Weight of the siloed-tool ratio in data-lost percentage
pub const SILO_DATA_WEIGHT: f64 = 40.0;
/// Weight of the broken-connection ratio in data-lost percentage
pub const BROKEN_DATA_WEIGHT: f64 = 30.0;
/// Weight of the manual-connection ratio in data-lost percentage
pub const MANUAL_DATA_WEIGHT: f64 = 15.0;
/// Ceiling on data-lost percentage
pub const DATA_LOST_CAP: u32 = 95;

/// Weekly hours per manual connection
pub const HOURS_PER_MANUAL: f64 = 3.0;
/// Weekly hours per broken connection
pub const HOURS_PER_BROKEN: f64 = 2.0;
/// Weekly hours per siloed tool
pub const HOURS_PER_SILO: f64 = 1.5;

/// Leads-lost points per critical finding
pub const LEADS_PER_CRITICAL: u32 = 8;
/// Leads-lost points per siloed tool
pub const LEADS_PER_SILO: u32 = 3;
/// Ceiling on leads-lost percentage
pub const LEADS_LOST_CAP: u32 = 40;

/// Waste fraction per redundancy finding
pub const WASTE_PER_REDUNDANCY: f64 = 0.1;
/// Waste fraction per data-silo finding
pub const WASTE_PER_SILO: f64 = 0.05;
/// Ceiling on the waste fraction
pub const WASTE_FRACTION_CAP: f64 = 0.4;
/// Flat monthly dollars wasted per data-silo finding
pub const SILO_FLAT_WASTE: f64 = 50.0;

/// Score deduction per critical finding
pub const CRITICAL_PENALTY: i64 = 15;
/// Score deduction per warning finding
pub const WARNING_PENALTY: i64 = 5;
/// Score deduction per siloed tool
pub const SILO_PENALTY: i64 = 3;
/// Score deduction per manual connection
pub const MANUAL_PENALTY: i64 = 2;
/// Lowest possible score
pub const MIN_SCORE: i64 = 5;
/// Highest possible score
pub const MAX_SCORE: i64 = 100;

/// Counts every statistic is derived from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    /// Placed tools
    pub tools: usize,
    /// Connections, dangling ones included
    pub connections: usize,
    /// Tools with no incident connection
    pub siloed: usize,
    /// Manual connections
    pub manual: usize,
    /// Broken connections
    pub broken: usize,
    /// Critical findings
    pub critical: usize,
    /// Warning findings
    pub warning: usize,
    /// Findings in the redundancy category
    pub redundancy_findings: usize,
    /// Findings in the data-silo category
    pub silo_findings: usize,
    /// Sum of catalog monthly prices
    pub monthly_spend: f64,
}

impl Tally {
    /// Count everything the formulas need
    #[must_use]
    pub fn new(tools: &[PlacedTool], connections: &[Connection], issues: &[Issue]) -> Self {
        let quality = |q: ConnectionQuality| connections.iter().filter(|c| c.quality == q).count();
        let severity = |s: Severity| issues.iter().filter(|i| i.severity == s).count();
        let category = |c: IssueCategory| issues.iter().filter(|i| i.category == c).count();

        Self {
            tools: tools.len(),
            connections: connections.len(),
            siloed: isolation::siloed_tools(tools, connections).len(),
            manual: quality(ConnectionQuality::Manual),
            broken: quality(ConnectionQuality::Broken),
            critical: severity(Severity::Critical),
            warning: severity(Severity::Warning),
            redundancy_findings: category(IssueCategory::Redundancy),
            silo_findings: category(IssueCategory::DataSilo),
            monthly_spend: catalog::monthly_cost(tools),
        }
    }

    /// Estimated share of data lost, 0 to [`DATA_LOST_CAP`]
    #[must_use]
    pub fn data_lost_percent(&self) -> u32 {
        let silo_ratio = ratio(self.siloed, self.tools);
        let broken_ratio = ratio(self.broken, self.connections);
        let manual_ratio = ratio(self.manual, self.connections);
        let raw = silo_ratio * SILO_DATA_WEIGHT
            + broken_ratio * BROKEN_DATA_WEIGHT
            + manual_ratio * MANUAL_DATA_WEIGHT;
        (raw.round() as u32).min(DATA_LOST_CAP)
    }

    /// Hours per week spent moving data by hand
    #[must_use]
    pub fn manual_hours_per_week(&self) -> u32 {
        let raw = HOURS_PER_MANUAL * self.manual as f64
            + HOURS_PER_BROKEN * self.broken as f64
            + HOURS_PER_SILO * self.siloed as f64;
        raw.round() as u32
    }

    /// Estimated share of leads lost, 0 to [`LEADS_LOST_CAP`]
    #[must_use]
    pub fn leads_lost_percent(&self) -> u32 {
        let raw = LEADS_PER_CRITICAL.saturating_mul(self.critical as u32)
            .saturating_add(LEADS_PER_SILO.saturating_mul(self.siloed as u32));
        raw.min(LEADS_LOST_CAP)
    }

    /// Fraction of spend considered wasted
    #[must_use]
    pub fn waste_fraction(&self) -> f64 {
        let raw = WASTE_PER_REDUNDANCY * self.redundancy_findings as f64
            + WASTE_PER_SILO * self.silo_findings as f64;
        raw.min(WASTE_FRACTION_CAP)
    }

    /// Estimated monthly dollars wasted
    #[must_use]
    pub fn monthly_waste(&self) -> u32 {
        let raw = self.monthly_spend * self.waste_fraction()
            + SILO_FLAT_WASTE * self.silo_findings as f64;
        raw.round() as u32
    }

    /// Composite health score, [`MIN_SCORE`] to [`MAX_SCORE`]
    #[must_use]
    pub fn health_score(&self) -> u32 {
        let deductions = CRITICAL_PENALTY * self.critical as i64
            + WARNING_PENALTY * self.warning as i64
            + SILO_PENALTY * self.siloed as i64
            + MANUAL_PENALTY * self.manual as i64;
        (MAX_SCORE - deductions).clamp(MIN_SCORE, MAX_SCORE) as u32
    }

    /// The statistics block
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            tools_siloed: self.siloed as u32,
            data_lost_percent: self.data_lost_percent(),
            manual_hours_per_week: self.manual_hours_per_week(),
            leads_lost_percent: self.leads_lost_percent(),
            monthly_waste: self.monthly_waste(),
        }
    }

    /// Plain-language pain points, only for nonzero counts
    #[must_use]
    pub fn pain_points(&self) -> Vec<String> {
        let mut points = Vec::new();

        if self.siloed > 0 {
            let n = self.siloed;
            points.push(format!(
                "{n} {} {} completely disconnected, so {} data never reaches the rest of your stack",
                plural(n, "tool", "tools"),
                plural(n, "is", "are"),
                plural(n, "its", "their"),
            ));
        }
        if self.manual > 0 {
            let n = self.manual;
            points.push(format!(
                "{n} {} on someone copying data by hand",
                plural(n, "connection relies", "connections rely"),
            ));
        }
        if self.broken > 0 {
            let n = self.broken;
            points.push(format!(
                "{n} broken {} silently dropping data",
                plural(n, "integration is", "integrations are"),
            ));
        }
        if self.critical > 0 {
            let n = self.critical;
            points.push(format!(
                "{n} critical {} immediate attention",
                plural(n, "issue needs", "issues need"),
            ));
        }

        points
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
