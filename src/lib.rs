// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Stackyard library - diagnostics for a business's tool stack
//!
//! This crate models the tools a business runs as a graph of placed tool
//! instances joined by typed connections, infers weaknesses from the graph's
//! shape and edge quality, and scores the result. Static catalog, rule and
//! scenario tables parameterize the analysis; the layout engine places nodes
//! for visualization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod rules;
pub mod scenarios;

/// Core data types shared by the catalog, analyzers, scenarios and layout
pub mod types {
    use crate::error::StackError;
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    // =========================================================================
    // Categories
    // =========================================================================

    /// Closed set of tool categories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum Category {
        /// Customer relationship management
        Crm,
        /// Newsletters and drip campaigns
        EmailMarketing,
        /// Booking and calendars
        Scheduling,
        /// Card processing and invoicing payments
        Payments,
        /// Bookkeeping
        Accounting,
        /// Chat, mail and phone
        Communication,
        /// Tasks and delivery tracking
        ProjectManagement,
        /// Intake forms and surveys
        Forms,
        /// Website builders and storefronts
        Website,
        /// Integration platforms
        Automation,
        /// Traffic and behaviour analytics
        Analytics,
        /// File storage, contracts and docs
        Documents,
    }

    /// Presentation color and label for a category
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct CategoryStyle {
        /// Hex color used by canvas and report renderers
        pub color: &'static str,
        /// Human-readable label
        pub label: &'static str,
    }

    impl Category {
        /// Every category, in catalog order
        pub const ALL: [Self; 12] = [
            Self::Crm,
            Self::EmailMarketing,
            Self::Scheduling,
            Self::Payments,
            Self::Accounting,
            Self::Communication,
            Self::ProjectManagement,
            Self::Forms,
            Self::Website,
            Self::Automation,
            Self::Analytics,
            Self::Documents,
        ];

        /// Get the kebab-case tag for this category
        #[must_use]
        pub fn slug(self) -> &'static str {
            match self {
                Self::Crm => "crm",
                Self::EmailMarketing => "email-marketing",
                Self::Scheduling => "scheduling",
                Self::Payments => "payments",
                Self::Accounting => "accounting",
                Self::Communication => "communication",
                Self::ProjectManagement => "project-management",
                Self::Forms => "forms",
                Self::Website => "website",
                Self::Automation => "automation",
                Self::Analytics => "analytics",
                Self::Documents => "documents",
            }
        }

        /// Get the fixed presentation style for this category
        #[must_use]
        pub fn style(self) -> CategoryStyle {
            let (color, label) = match self {
                Self::Crm => ("#3b82f6", "CRM"),
                Self::EmailMarketing => ("#ec4899", "Email Marketing"),
                Self::Scheduling => ("#14b8a6", "Scheduling"),
                Self::Payments => ("#22c55e", "Payments"),
                Self::Accounting => ("#84cc16", "Accounting"),
                Self::Communication => ("#8b5cf6", "Communication"),
                Self::ProjectManagement => ("#f97316", "Project Management"),
                Self::Forms => ("#eab308", "Forms"),
                Self::Website => ("#06b6d4", "Website"),
                Self::Automation => ("#f43f5e", "Automation"),
                Self::Analytics => ("#6366f1", "Analytics"),
                Self::Documents => ("#64748b", "Documents"),
            };
            CategoryStyle { color, label }
        }
    }

    impl fmt::Display for Category {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.style().label)
        }
    }

    impl FromStr for Category {
        type Err = StackError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
            Self::ALL
                .into_iter()
                .find(|c| c.slug() == wanted)
                .ok_or_else(|| StackError::UnknownCategory(s.to_string()))
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Immutable reference row describing an available tool
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct CatalogTool {
        /// Catalog identifier, e.g. "hubspot"
        pub id: &'static str,
        /// Display name
        pub name: &'static str,
        /// Category tag
        pub category: Category,
        /// Icon glyph
        pub icon: &'static str,
        /// Short description
        pub description: &'static str,
        /// Monthly price in dollars, if the tool has a flat subscription
        pub monthly_price: Option<f64>,
    }

    // =========================================================================
    // Graph Model
    // =========================================================================

    /// Position in canvas pixel space
    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Position {
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
    }

    impl Position {
        /// Create a position
        #[must_use]
        pub fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }
    }

    /// One instance of a catalog tool placed in a diagnostic session
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PlacedTool {
        /// Instance identifier, unique within the session
        pub instance_id: String,
        /// Catalog tool identifier
        pub tool_id: String,
        /// Canvas position
        #[serde(default)]
        pub position: Position,
    }

    /// Quality of an integration between two placed tools
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ConnectionQuality {
        /// Built-in integration between the two tools
        Native,
        /// Glued together through an automation platform
        Automation,
        /// Someone copies the data by hand
        Manual,
        /// Integration exists but does not work
        Broken,
    }

    impl ConnectionQuality {
        /// Human-readable label
        #[must_use]
        pub fn label(self) -> &'static str {
            match self {
                Self::Native => "native integration",
                Self::Automation => "automation platform",
                Self::Manual => "manual transfer",
                Self::Broken => "broken",
            }
        }
    }

    /// Declared integration between two placed tools
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Connection {
        /// Connection identifier
        pub id: String,
        /// Source instance ID
        pub from: String,
        /// Target instance ID
        pub to: String,
        /// Integration quality
        pub quality: ConnectionQuality,
    }

    impl Connection {
        /// Does this connection touch the given instance in either direction?
        #[must_use]
        pub fn touches(&self, instance_id: &str) -> bool {
            self.from == instance_id || self.to == instance_id
        }
    }

    /// A user's current stack: placed tools plus connections
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct StackStore {
        /// Placed tool instances
        #[serde(default)]
        pub tools: Vec<PlacedTool>,
        /// Connections between instances
        #[serde(default)]
        pub connections: Vec<Connection>,
    }

    // =========================================================================
    // Findings
    // =========================================================================

    /// Severity of a finding; declaration order is report order
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Severity {
        /// Losing data or leads right now
        Critical,
        /// Costing time or money
        Warning,
        /// Worth knowing about
        Info,
    }

    impl Severity {
        /// Sort rank, lower sorts first
        #[must_use]
        pub fn rank(self) -> u8 {
            match self {
                Self::Critical => 0,
                Self::Warning => 1,
                Self::Info => 2,
            }
        }

        /// Display icon
        #[must_use]
        pub fn icon(self) -> &'static str {
            match self {
                Self::Critical => "🔴",
                Self::Warning => "🟡",
                Self::Info => "🔵",
            }
        }
    }

    impl fmt::Display for Severity {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Self::Critical => "critical",
                Self::Warning => "warning",
                Self::Info => "info",
            })
        }
    }

    /// What kind of problem a finding describes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum IssueCategory {
        /// Tool holds data nothing else can see
        DataSilo,
        /// Expected integration is absent or broken
        MissingIntegration,
        /// Data moves by hand
        ManualProcess,
        /// Paying for glue or overlap
        CostWaste,
        /// Several tools doing one job
        Redundancy,
    }

    impl fmt::Display for IssueCategory {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Self::DataSilo => "data-silo",
                Self::MissingIntegration => "missing-integration",
                Self::ManualProcess => "manual-process",
                Self::CostWaste => "cost-waste",
                Self::Redundancy => "redundancy",
            })
        }
    }

    /// One detected architectural problem
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Issue {
        /// Deterministic identifier
        pub id: String,
        /// Severity
        pub severity: Severity,
        /// Short title
        pub title: String,
        /// Templated description
        pub description: String,
        /// Instance IDs of the affected placed tools
        pub affected_tools: Vec<String>,
        /// Problem category
        pub category: IssueCategory,
    }

    /// Finding template carried by a static rule
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct IssueTemplate {
        /// Identifier stem
        pub id: &'static str,
        /// Severity to raise
        pub severity: Severity,
        /// Title
        pub title: &'static str,
        /// Description
        pub description: &'static str,
        /// Category to raise
        pub category: IssueCategory,
    }

    /// Expected connection between two categories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct ConnectionRule {
        /// Source category
        pub source: Category,
        /// Target category
        pub target: Category,
        /// Quality the connection is expected to have
        pub expected: ConnectionQuality,
        /// Finding to emit when no connection exists in either direction
        pub issue: IssueTemplate,
    }

    // =========================================================================
    // Analysis Result
    // =========================================================================

    /// Summary metrics derived from a stack
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Stats {
        /// Tools with no incident connection
        pub tools_siloed: u32,
        /// Estimated share of data lost between tools (0-95)
        pub data_lost_percent: u32,
        /// Hours per week spent moving data by hand
        pub manual_hours_per_week: u32,
        /// Estimated share of leads lost (0-40)
        pub leads_lost_percent: u32,
        /// Estimated monthly spend wasted, in dollars
        pub monthly_waste: u32,
    }

    /// Complete output of one analysis run
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct AnalysisResult {
        /// Health score (5-100)
        pub score: u32,
        /// Findings, critical first
        pub issues: Vec<Issue>,
        /// Summary metrics
        pub stats: Stats,
        /// Plain-language pain points
        pub pain_points: Vec<String>,
    }

    impl AnalysisResult {
        /// The result for an empty stack
        #[must_use]
        pub fn perfect() -> Self {
            Self {
                score: 100,
                issues: Vec::new(),
                stats: Stats::default(),
                pain_points: Vec::new(),
            }
        }

        /// Count findings with the given severity
        #[must_use]
        pub fn count_severity(&self, severity: Severity) -> usize {
            self.issues.iter().filter(|i| i.severity == severity).count()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Connection in a scenario's starter graph, keyed by catalog ID
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct ScenarioConnection {
        /// Source catalog tool
        pub from: &'static str,
        /// Target catalog tool
        pub to: &'static str,
        /// Integration quality
        pub quality: ConnectionQuality,
    }

    /// Central platform of a target architecture
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct HubDescriptor {
        /// Hub name
        pub name: &'static str,
        /// What the hub does
        pub capabilities: &'static [&'static str],
        /// Icon glyph
        pub icon: &'static str,
    }

    /// Peripheral module of a target architecture
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct SatelliteModule {
        /// Module name
        pub name: &'static str,
        /// Catalog tools this module replaces
        pub replaces: &'static [&'static str],
        /// Feature list
        pub features: &'static [&'static str],
        /// Icon glyph
        pub icon: &'static str,
    }

    /// Projected metrics once the target architecture is in place
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct SolutionStats {
        /// Tools left without a connection
        pub tools_siloed: u32,
        /// Projected data-lost percentage
        pub data_lost_percent: u32,
        /// Projected manual hours per week
        pub manual_hours_per_week: u32,
        /// Projected leads-lost percentage
        pub leads_lost_percent: u32,
        /// Projected monthly savings, in dollars
        pub monthly_savings: u32,
    }

    /// Recommended hub-and-satellite architecture
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Solution {
        /// Architecture name
        pub name: &'static str,
        /// Central hub
        pub hub: HubDescriptor,
        /// Satellite modules
        pub satellites: &'static [SatelliteModule],
        /// Projected metrics
        pub stats: SolutionStats,
    }

    /// Industry starting point: starter graph, narrative and target architecture
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Scenario {
        /// Identifier, e.g. "home-services"
        pub id: &'static str,
        /// Display name
        pub name: &'static str,
        /// Icon glyph
        pub icon: &'static str,
        /// Description
        pub description: &'static str,
        /// Default tools, by catalog ID
        pub tools: &'static [&'static str],
        /// Default connections
        pub connections: &'static [ScenarioConnection],
        /// Narrative pain points
        pub pain_points: &'static [&'static str],
        /// Target architecture
        pub solution: Solution,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::analysis::analyze;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
