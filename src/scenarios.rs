// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Scenario library - industry starter stacks and their target architectures
//!
//! A scenario seeds an initial stack for the canvas and carries a static
//! "after" picture. Nothing here feeds back into the analyzers.

use crate::error::StackError;
use crate::layout::{self, HubLayout, InstanceIds};
use crate::types::{
    AnalysisResult, Connection, ConnectionQuality, HubDescriptor, Position, SatelliteModule,
    Scenario, ScenarioConnection, Solution, SolutionStats, StackStore, Stats,
};
use serde::Serialize;
use tracing::debug;

const fn link(from: &'static str, to: &'static str, quality: ConnectionQuality) -> ScenarioConnection {
    ScenarioConnection { from, to, quality }
}

/// Every industry template
pub static TEMPLATES: &[Scenario] = &[
    Scenario {
        id: "home-services",
        name: "Home Services",
        icon: "🔧",
        description: "Plumbers, electricians, cleaners and landscapers juggling quotes, crews and invoices.",
        tools: &["wix", "paper-forms", "jobber", "google-calendar", "quickbooks", "square", "gmail", "excel", "zapier"],
        connections: &[
            link("wix", "jobber", ConnectionQuality::Manual),
            link("paper-forms", "excel", ConnectionQuality::Manual),
            link("jobber", "quickbooks", ConnectionQuality::Automation),
            link("square", "quickbooks", ConnectionQuality::Broken),
            link("google-calendar", "gmail", ConnectionQuality::Native),
            link("jobber", "google-calendar", ConnectionQuality::Automation),
            link("zapier", "quickbooks", ConnectionQuality::Automation),
        ],
        pain_points: &[
            "Website inquiries get typed into Jobber by hand, sometimes days later",
            "Paper intake sheets pile up in the truck before anyone enters them",
            "Square payouts stopped syncing to QuickBooks and nobody noticed",
            "There is no single place to see which jobs are booked, done and paid",
        ],
        solution: Solution {
            name: "Field Service Command Center",
            hub: HubDescriptor {
                name: "Unified Service CRM",
                capabilities: &[
                    "Lead capture from web and phone",
                    "Quotes, jobs and invoices",
                    "Full customer history",
                    "Automated follow-ups",
                ],
                icon: "🏠",
            },
            satellites: &[
                SatelliteModule {
                    name: "Online Booking",
                    replaces: &["google-calendar"],
                    features: &["Real-time crew availability", "Automatic reminders"],
                    icon: "📅",
                },
                SatelliteModule {
                    name: "Digital Intake",
                    replaces: &["paper-forms", "excel"],
                    features: &["Mobile forms", "Photos and signatures on site"],
                    icon: "📱",
                },
                SatelliteModule {
                    name: "Payments & Books Sync",
                    replaces: &["square"],
                    features: &["Card on file", "Nightly ledger sync"],
                    icon: "💳",
                },
                SatelliteModule {
                    name: "Website Lead Capture",
                    replaces: &["zapier"],
                    features: &["Web form straight into the CRM", "Instant lead alerts"],
                    icon: "🌐",
                },
            ],
            stats: SolutionStats {
                tools_siloed: 0,
                data_lost_percent: 5,
                manual_hours_per_week: 2,
                leads_lost_percent: 4,
                monthly_savings: 210,
            },
        },
    },
    Scenario {
        id: "med-spa",
        name: "Med Spa & Clinic",
        icon: "💆",
        description: "Appointment-driven practices handling intake, consent, memberships and rebooking.",
        tools: &["squarespace", "acuity", "typeform", "mailchimp", "square", "xero", "outlook", "dropbox", "docusign"],
        connections: &[
            link("squarespace", "acuity", ConnectionQuality::Native),
            link("acuity", "outlook", ConnectionQuality::Native),
            link("acuity", "mailchimp", ConnectionQuality::Automation),
            link("typeform", "dropbox", ConnectionQuality::Automation),
            link("square", "xero", ConnectionQuality::Broken),
            link("docusign", "dropbox", ConnectionQuality::Manual),
        ],
        pain_points: &[
            "Intake answers and consent forms live in different folders from the appointment",
            "Front desk re-enters every new client three times",
            "Card payments no longer reach Xero, so month-end takes days",
            "Lapsed clients are never invited back",
        ],
        solution: Solution {
            name: "Client Experience Platform",
            hub: HubDescriptor {
                name: "Practice Management Hub",
                capabilities: &[
                    "Client profiles and treatment history",
                    "Online booking",
                    "Memberships and packages",
                    "Consent tracking",
                ],
                icon: "🩺",
            },
            satellites: &[
                SatelliteModule {
                    name: "Smart Intake",
                    replaces: &["typeform", "docusign"],
                    features: &["Pre-visit questionnaires", "Signed consent on file"],
                    icon: "📝",
                },
                SatelliteModule {
                    name: "Retention Marketing",
                    replaces: &["mailchimp"],
                    features: &["Rebooking nudges", "Membership renewals"],
                    icon: "💌",
                },
                SatelliteModule {
                    name: "Integrated POS",
                    replaces: &["square"],
                    features: &["Checkout at the chair", "Automatic reconciliation"],
                    icon: "💳",
                },
                SatelliteModule {
                    name: "Secure Records",
                    replaces: &["dropbox"],
                    features: &["Photos attached to the client", "Access controls"],
                    icon: "🔒",
                },
            ],
            stats: SolutionStats {
                tools_siloed: 0,
                data_lost_percent: 4,
                manual_hours_per_week: 1,
                leads_lost_percent: 3,
                monthly_savings: 145,
            },
        },
    },
    Scenario {
        id: "ecommerce",
        name: "E-commerce Brand",
        icon: "🛒",
        description: "Online stores stitching together checkout, email, fulfilment and the books.",
        tools: &[
            "shopify", "mailchimp", "stripe", "paypal", "quickbooks", "google-analytics", "hotjar", "slack", "trello", "zapier",
        ],
        connections: &[
            link("shopify", "mailchimp", ConnectionQuality::Native),
            link("shopify", "stripe", ConnectionQuality::Native),
            link("paypal", "quickbooks", ConnectionQuality::Manual),
            link("stripe", "quickbooks", ConnectionQuality::Automation),
            link("shopify", "google-analytics", ConnectionQuality::Native),
            link("shopify", "slack", ConnectionQuality::Automation),
            link("shopify", "trello", ConnectionQuality::Automation),
        ],
        pain_points: &[
            "PayPal sales are exported to a spreadsheet and keyed into QuickBooks",
            "Order alerts depend on a chain of zaps that breaks every few weeks",
            "Heatmap insights never make it back to the people running campaigns",
        ],
        solution: Solution {
            name: "Commerce Operating System",
            hub: HubDescriptor {
                name: "Commerce Hub",
                capabilities: &["Orders, customers and inventory", "Unified checkout", "Customer segments"],
                icon: "🛍️",
            },
            satellites: &[
                SatelliteModule {
                    name: "Lifecycle Email",
                    replaces: &["mailchimp"],
                    features: &["Abandoned cart flows", "Post-purchase sequences"],
                    icon: "📧",
                },
                SatelliteModule {
                    name: "Finance Sync",
                    replaces: &["paypal", "zapier"],
                    features: &["Every payout reconciled", "Fee and refund tracking"],
                    icon: "📒",
                },
                SatelliteModule {
                    name: "Insights",
                    replaces: &["google-analytics", "hotjar"],
                    features: &["Revenue by channel", "Behaviour on key pages"],
                    icon: "📊",
                },
                SatelliteModule {
                    name: "Fulfilment Board",
                    replaces: &["trello"],
                    features: &["Orders become pick lists", "Shipping status in chat"],
                    icon: "📦",
                },
            ],
            stats: SolutionStats {
                tools_siloed: 0,
                data_lost_percent: 3,
                manual_hours_per_week: 2,
                leads_lost_percent: 2,
                monthly_savings: 120,
            },
        },
    },
    Scenario {
        id: "agency",
        name: "Agency & Consulting",
        icon: "💼",
        description: "Service firms moving clients from first call to signed proposal to delivery and invoice.",
        tools: &[
            "webflow", "hubspot", "pipedrive", "typeform", "asana", "clickup", "monday", "freshbooks", "stripe", "slack",
            "google-drive", "docusign", "calendly",
        ],
        connections: &[
            link("webflow", "hubspot", ConnectionQuality::Native),
            link("typeform", "hubspot", ConnectionQuality::Automation),
            link("hubspot", "asana", ConnectionQuality::Automation),
            link("pipedrive", "freshbooks", ConnectionQuality::Manual),
            link("freshbooks", "stripe", ConnectionQuality::Native),
            link("calendly", "hubspot", ConnectionQuality::Native),
            link("docusign", "google-drive", ConnectionQuality::Manual),
            link("slack", "asana", ConnectionQuality::Native),
        ],
        pain_points: &[
            "Two CRMs disagree about which deals are open",
            "Each team picked its own project tool, so nobody sees the whole workload",
            "Signed proposals are downloaded and re-uploaded by hand",
            "Invoices are built from memory at the end of the month",
        ],
        solution: Solution {
            name: "Agency Delivery Platform",
            hub: HubDescriptor {
                name: "Client Lifecycle Hub",
                capabilities: &[
                    "One pipeline from lead to invoice",
                    "Proposals and contracts",
                    "Client portal",
                ],
                icon: "🧭",
            },
            satellites: &[
                SatelliteModule {
                    name: "Project Delivery",
                    replaces: &["asana", "clickup", "monday"],
                    features: &["Projects spun up from won deals", "Capacity planning"],
                    icon: "🎯",
                },
                SatelliteModule {
                    name: "Billing",
                    replaces: &["freshbooks"],
                    features: &["Invoices from tracked time", "Retainers"],
                    icon: "🧾",
                },
                SatelliteModule {
                    name: "Contracts",
                    replaces: &["docusign"],
                    features: &["E-signature on proposals", "Filed to the client record"],
                    icon: "✍️",
                },
                SatelliteModule {
                    name: "Pipeline",
                    replaces: &["pipedrive", "typeform"],
                    features: &["Single deal board", "Qualification forms"],
                    icon: "📈",
                },
            ],
            stats: SolutionStats {
                tools_siloed: 0,
                data_lost_percent: 6,
                manual_hours_per_week: 3,
                leads_lost_percent: 5,
                monthly_savings: 260,
            },
        },
    },
];

/// Look up a template by ID
#[must_use]
pub fn template_by_id(id: &str) -> Option<&'static Scenario> {
    TEMPLATES.iter().find(|s| s.id == id)
}

/// Look up a template by ID, failing on unknown IDs
pub fn require_template(id: &str) -> Result<&'static Scenario, StackError> {
    template_by_id(id).ok_or_else(|| StackError::UnknownScenario(id.to_string()))
}

impl Scenario {
    /// Build the starter stack for this scenario
    ///
    /// Tools are placed with the grid layout. Each default connection is mapped
    /// onto the first placed instance of its catalog tools; connections naming a
    /// tool the scenario does not place are dropped.
    #[must_use]
    pub fn seed(&self, canvas_width: f64, ids: &mut InstanceIds) -> StackStore {
        let tools = layout::layout_grid(self.tools, canvas_width, ids);
        let instance_of = |catalog_id: &str| {
            tools
                .iter()
                .find(|t| t.tool_id == catalog_id)
                .map(|t| t.instance_id.clone())
        };

        let mut connections = Vec::with_capacity(self.connections.len());
        for link in self.connections {
            let (Some(from), Some(to)) = (instance_of(link.from), instance_of(link.to)) else {
                debug!(scenario = self.id, from = link.from, to = link.to, "Skipping unplaced link");
                continue;
            };
            connections.push(Connection {
                id: format!("{}-link-{}", self.id, connections.len() + 1),
                from,
                to,
                quality: link.quality,
            });
        }

        StackStore { tools, connections }
    }

    /// Compare a live analysis of this scenario's stack against the solution's projection
    #[must_use]
    pub fn compare(&self, current: &AnalysisResult) -> Comparison {
        Comparison {
            scenario_id: self.id,
            current_score: current.score,
            current: current.stats,
            projected: self.solution.stats,
        }
    }
}

impl Solution {
    /// Catalog tools absorbed by the satellites, first mention wins
    #[must_use]
    pub fn replaced_tools(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for satellite in self.satellites {
            for &tool in satellite.replaces {
                if !out.contains(&tool) {
                    out.push(tool);
                }
            }
        }
        out
    }

    /// Catalog IDs in the stack that no satellite replaces
    #[must_use]
    pub fn unreplaced(&self, store: &StackStore) -> Vec<String> {
        let replaced = self.replaced_tools();
        let mut out: Vec<String> = Vec::new();
        for tool in &store.tools {
            if !replaced.contains(&tool.tool_id.as_str()) && !out.contains(&tool.tool_id) {
                out.push(tool.tool_id.clone());
            }
        }
        out
    }

    /// Radial positions for the hub and this solution's satellites
    #[must_use]
    pub fn layout(&self, center: Position, radius: f64) -> HubLayout {
        layout::layout_hub_satellite(self.satellites.len(), center, radius)
    }
}

/// Current metrics next to a solution's projected metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Scenario compared
    pub scenario_id: &'static str,
    /// Health score of the current stack
    pub current_score: u32,
    /// Metrics of the current stack
    pub current: Stats,
    /// Projected metrics with the solution in place
    pub projected: SolutionStats,
}

impl Comparison {
    /// Weekly hours no longer spent on manual work
    #[must_use]
    pub fn hours_reclaimed(&self) -> u32 {
        self.current
            .manual_hours_per_week
            .saturating_sub(self.projected.manual_hours_per_week)
    }

    /// Percentage points of data loss removed
    #[must_use]
    pub fn data_loss_reduction(&self) -> u32 {
        self.current
            .data_lost_percent
            .saturating_sub(self.projected.data_lost_percent)
    }

    /// Percentage points of leads recovered
    #[must_use]
    pub fn leads_recovered(&self) -> u32 {
        self.current
            .leads_lost_percent
            .saturating_sub(self.projected.leads_lost_percent)
    }
}
