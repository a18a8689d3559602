// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the stack analyzer
//!
//! These tests verify critical invariants:
//! 1. Empty stacks are perfect regardless of connections
//! 2. Each analyzer emits exactly the findings its counts call for
//! 3. Score and percentages stay inside their bounds
//! 4. Analysis is deterministic and severity-ordered
//! 5. Hub layouts put satellites on the ring

use proptest::prelude::*;
use stackyard::analysis::analyze;
use stackyard::graph::StackGraph;
use stackyard::layout::{self, InstanceIds, SATELLITE_HEIGHT, SATELLITE_WIDTH};
use stackyard::types::{
    AnalysisResult, Connection, ConnectionQuality, IssueCategory, PlacedTool, Position, Severity,
    Stats,
};
use std::collections::HashSet;

// =============================================================================
// Test Helpers
// =============================================================================

fn make_tool(instance: &str, tool_id: &str) -> PlacedTool {
    PlacedTool {
        instance_id: instance.into(),
        tool_id: tool_id.into(),
        position: Position::default(),
    }
}

fn make_conn(id: &str, from: &str, to: &str, quality: ConnectionQuality) -> Connection {
    Connection {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        quality,
    }
}

/// Tools from distinct categories so redundancy and rules stay quiet
fn spread_tools(n: usize) -> Vec<PlacedTool> {
    ["notion", "trello", "hotjar", "zapier", "dropbox", "gmail"]
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, id)| make_tool(&format!("t{i}"), id))
        .collect()
}

fn count_category(result: &AnalysisResult, category: IssueCategory) -> usize {
    result.issues.iter().filter(|i| i.category == category).count()
}

// =============================================================================
// Empty Stack
// =============================================================================

#[test]
fn test_empty_stack_perfect_with_any_connections() {
    let connections = vec![
        make_conn("c1", "ghost-a", "ghost-b", ConnectionQuality::Broken),
        make_conn("c2", "ghost-b", "ghost-c", ConnectionQuality::Manual),
    ];
    for conns in [&[][..], &connections[..]] {
        let result = analyze(&[], conns);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
        assert!(result.pain_points.is_empty());
        assert_eq!(result.stats, Stats::default());
    }
}

// =============================================================================
// Connection Quality
// =============================================================================

#[test]
fn test_each_broken_connection_is_its_own_critical() {
    let tools = spread_tools(4);
    let connections = vec![
        make_conn("c1", "t0", "t1", ConnectionQuality::Broken),
        make_conn("c2", "t1", "t2", ConnectionQuality::Broken),
        make_conn("c3", "t2", "t3", ConnectionQuality::Broken),
    ];
    let result = analyze(&tools, &connections);

    let broken: Vec<_> = result.issues.iter().filter(|i| i.id.starts_with("broken-")).collect();
    assert_eq!(broken.len(), 3);
    for (issue, conn) in broken.iter().zip(&connections) {
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.affected_tools, vec![conn.from.clone(), conn.to.clone()]);
    }
}

#[test]
fn test_manual_warning_iff_manual_connection() {
    let tools = spread_tools(4);
    let none = vec![make_conn("c1", "t0", "t1", ConnectionQuality::Native)];
    assert!(!analyze(&tools, &none).issues.iter().any(|i| i.id == "manual-transfers"));

    let some = vec![
        make_conn("c1", "t0", "t1", ConnectionQuality::Manual),
        make_conn("c2", "t2", "t3", ConnectionQuality::Manual),
        make_conn("c3", "t1", "t2", ConnectionQuality::Native),
    ];
    let result = analyze(&tools, &some);
    let manual: Vec<_> = result.issues.iter().filter(|i| i.id == "manual-transfers").collect();
    assert_eq!(manual.len(), 1);
    assert_eq!(manual[0].severity, Severity::Warning);
    let affected: HashSet<_> = manual[0].affected_tools.iter().map(String::as_str).collect();
    assert_eq!(affected, HashSet::from(["t0", "t1", "t2", "t3"]));
}

#[test]
fn test_automation_cost_threshold() {
    let tools = spread_tools(4);
    let two = vec![
        make_conn("c1", "t0", "t1", ConnectionQuality::Automation),
        make_conn("c2", "t1", "t2", ConnectionQuality::Automation),
    ];
    assert_eq!(count_category(&analyze(&tools, &two), IssueCategory::CostWaste), 0);

    let mut three = two.clone();
    three.push(make_conn("c3", "t2", "t3", ConnectionQuality::Automation));
    assert_eq!(count_category(&analyze(&tools, &three), IssueCategory::CostWaste), 1);
}

// =============================================================================
// Isolation and Redundancy
// =============================================================================

#[test]
fn test_one_silo_per_unconnected_tool() {
    let tools = spread_tools(5);
    let connections = vec![make_conn("c1", "t0", "t1", ConnectionQuality::Native)];
    let result = analyze(&tools, &connections);

    let silos: Vec<_> = result.issues.iter().filter(|i| i.id.starts_with("silo-")).collect();
    assert_eq!(silos.len(), 3);
    let named: HashSet<_> = silos.iter().map(|i| i.affected_tools[0].as_str()).collect();
    assert_eq!(named, HashSet::from(["t2", "t3", "t4"]));
    assert!(silos.iter().all(|i| i.affected_tools.len() == 1));
    assert_eq!(result.stats.tools_siloed, 3);
}

#[test]
fn test_redundancy_threshold() {
    let crm = ["hubspot", "salesforce", "pipedrive", "zoho-crm", "jobber"];
    let redundancy = |n: usize| {
        let tools: Vec<_> = crm
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, id)| make_tool(&format!("crm{i}"), id))
            .collect();
        analyze(&tools, &[])
            .issues
            .into_iter()
            .filter(|i| i.category == IssueCategory::Redundancy)
            .collect::<Vec<_>>()
    };

    assert!(redundancy(2).is_empty());

    let three = redundancy(3);
    assert_eq!(three.len(), 1);
    assert_eq!(three[0].affected_tools.len(), 3);
    for name in ["HubSpot", "Salesforce", "Pipedrive"] {
        assert!(three[0].description.contains(name), "missing {name}");
    }

    let five = redundancy(5);
    assert_eq!(five.len(), 1);
    assert_eq!(five[0].affected_tools.len(), 5);
}

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn test_automation_heavy_stack_with_broken_link() {
    let tools = vec![
        make_tool("site", "wix"),
        make_tool("crm", "hubspot"),
        make_tool("mail", "mailchimp"),
        make_tool("pay", "stripe"),
        make_tool("books", "quickbooks"),
    ];
    let connections = vec![
        make_conn("c1", "site", "crm", ConnectionQuality::Automation),
        make_conn("c2", "crm", "mail", ConnectionQuality::Automation),
        make_conn("c3", "pay", "books", ConnectionQuality::Automation),
        make_conn("c4", "crm", "pay", ConnectionQuality::Broken),
    ];
    let result = analyze(&tools, &connections);

    assert!(result.issues.len() >= 2);
    assert!(result.score <= 80);
    assert_eq!(result.issues[0].severity, Severity::Critical);
    assert!(result.issues.iter().any(|i| i.id == "automation-dependency"));
}

// =============================================================================
// Graph Wrapper
// =============================================================================

#[test]
fn test_graph_analysis_matches_free_function() {
    let mut graph = StackGraph::new();
    graph.add_tool(make_tool("a", "typeform"));
    graph.add_tool(make_tool("b", "hubspot"));
    graph.add_tool(make_tool("c", "slack"));
    graph
        .add_connection(make_conn("c1", "a", "b", ConnectionQuality::Manual))
        .unwrap();

    assert_eq!(graph.analyze(), analyze(graph.tools(), graph.connections()));
    assert_eq!(graph.islands().len(), 2);
}

// =============================================================================
// Property Tests
// =============================================================================

const TOOL_POOL: &[&str] = &[
    "hubspot", "pipedrive", "salesforce", "mailchimp", "calendly", "stripe", "square",
    "quickbooks", "xero", "slack", "gmail", "asana", "trello", "typeform", "wix", "shopify",
    "zapier", "google-analytics", "notion", "dropbox", "mystery-tool",
];

fn quality_strategy() -> impl Strategy<Value = ConnectionQuality> {
    prop_oneof![
        Just(ConnectionQuality::Native),
        Just(ConnectionQuality::Automation),
        Just(ConnectionQuality::Manual),
        Just(ConnectionQuality::Broken),
    ]
}

/// Random stacks; endpoint index `n` is a dangling reference
fn stack_strategy() -> impl Strategy<Value = (Vec<PlacedTool>, Vec<Connection>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::sample::select(TOOL_POOL), n),
            prop::collection::vec((0..=n, 0..=n, quality_strategy()), 0..20),
        )
            .prop_map(move |(ids, links)| {
                let tools: Vec<_> = ids
                    .iter()
                    .enumerate()
                    .map(|(i, id)| make_tool(&format!("tool-{i}"), id))
                    .collect();
                let endpoint = |i: usize| if i == n { "ghost".to_string() } else { format!("tool-{i}") };
                let connections = links
                    .into_iter()
                    .filter(|(a, b, _)| a != b)
                    .enumerate()
                    .map(|(k, (a, b, q))| make_conn(&format!("c{k}"), &endpoint(a), &endpoint(b), q))
                    .collect();
                (tools, connections)
            })
    })
}

proptest! {
    #[test]
    fn proptest_bounds((tools, connections) in stack_strategy()) {
        let result = analyze(&tools, &connections);
        prop_assert!((5..=100).contains(&result.score));
        prop_assert!(result.stats.data_lost_percent <= 95);
        prop_assert!(result.stats.leads_lost_percent <= 40);
    }

    #[test]
    fn proptest_severity_order((tools, connections) in stack_strategy()) {
        let result = analyze(&tools, &connections);
        let ranks: Vec<_> = result.issues.iter().map(|i| i.severity.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn proptest_idempotent((tools, connections) in stack_strategy()) {
        let first = serde_json::to_string(&analyze(&tools, &connections)).unwrap();
        let second = serde_json::to_string(&analyze(&tools, &connections)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn proptest_broken_and_silo_counts((tools, connections) in stack_strategy()) {
        let result = analyze(&tools, &connections);
        let broken = connections.iter().filter(|c| c.quality == ConnectionQuality::Broken).count();
        let broken_issues = result.issues.iter().filter(|i| i.id.starts_with("broken-")).count();
        prop_assert_eq!(broken, broken_issues);

        let endpoints: HashSet<_> = connections.iter().flat_map(|c| [c.from.as_str(), c.to.as_str()]).collect();
        let unconnected = tools.iter().filter(|t| !endpoints.contains(t.instance_id.as_str())).count();
        let silo_issues = result.issues.iter().filter(|i| i.id.starts_with("silo-")).count();
        prop_assert_eq!(unconnected, silo_issues);
        prop_assert_eq!(result.stats.tools_siloed as usize, unconnected);
    }

    #[test]
    fn proptest_hub_satellites_on_ring(count in 1usize..24, radius in 10.0f64..1000.0) {
        let center = Position::new(640.0, 360.0);
        let hub = layout::layout_hub_satellite(count, center, radius);
        prop_assert_eq!(hub.satellites.len(), count);
        for (i, p) in hub.satellites.iter().enumerate() {
            let dx = p.x + SATELLITE_WIDTH / 2.0 - center.x;
            let dy = p.y + SATELLITE_HEIGHT / 2.0 - center.y;
            prop_assert!(((dx * dx + dy * dy).sqrt() - radius).abs() < 1e-6);
            let expected = -std::f64::consts::FRAC_PI_2
                + i as f64 * std::f64::consts::TAU / count as f64;
            prop_assert!((dx / radius - expected.cos()).abs() < 1e-9);
            prop_assert!((dy / radius - expected.sin()).abs() < 1e-9);
        }
    }

    #[test]
    fn proptest_grid_ids_fresh(ids in prop::collection::vec(prop::sample::select(TOOL_POOL), 0..30)) {
        let placed = layout::layout_grid(&ids, 1200.0, &mut InstanceIds::default());
        prop_assert_eq!(placed.len(), ids.len());
        let unique: HashSet<_> = placed.iter().map(|t| t.instance_id.as_str()).collect();
        prop_assert_eq!(unique.len(), placed.len());
    }
}
