// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Scenario command - browse industry templates and compare before/after

use super::analyze::print_report;
use super::{print_json, Output};
use crate::analysis::analyze as analyze_stack;
use crate::catalog;
use crate::layout::InstanceIds;
use crate::scenarios::{self, Comparison, TEMPLATES};
use crate::types::{ConnectionQuality, Scenario, StackStore};
use anyhow::Result;
use owo_colors::Style;
use serde_json::json;
use tracing::info;

fn quality_style(quality: ConnectionQuality) -> Style {
    match quality {
        ConnectionQuality::Native => Style::new().green(),
        ConnectionQuality::Automation => Style::new().cyan(),
        ConnectionQuality::Manual => Style::new().yellow(),
        ConnectionQuality::Broken => Style::new().red().bold(),
    }
}

/// List every template
pub fn list(out: Output) -> Result<()> {
    if out.json {
        return print_json(TEMPLATES);
    }

    println!("{}", out.heading(&format!("Scenarios ({})", TEMPLATES.len())));
    for scenario in TEMPLATES {
        println!(
            "  {} {:<22} {}",
            scenario.icon,
            scenario.name,
            out.dim(format!("{} · {} tools", scenario.id, scenario.tools.len()))
        );
        println!("      {}", scenario.description);
    }
    Ok(())
}

/// Show a template's starter stack and target architecture
pub fn show(id: &str, out: Output) -> Result<()> {
    let scenario = scenarios::require_template(id)?;
    if out.json {
        return print_json(scenario);
    }

    print_header(scenario, out);

    println!("{}", out.heading("Starting stack"));
    for tool_id in scenario.tools {
        println!("  • {} {}", catalog::tool_name(tool_id), out.dim(tool_id));
    }
    println!();

    println!("{}", out.heading("Connections"));
    for link in scenario.connections {
        println!(
            "  {} → {} {}",
            catalog::tool_name(link.from),
            catalog::tool_name(link.to),
            out.paint(format!("[{}]", link.quality.label()), quality_style(link.quality))
        );
    }
    println!();

    println!("{}", out.heading("Pain points"));
    for point in scenario.pain_points {
        println!("  • {point}");
    }
    println!();

    print_solution(scenario, out);
    Ok(())
}

/// Seed a template, analyze it live and compare with its solution
pub fn analyze(id: &str, canvas_width: f64, out: Output) -> Result<()> {
    let scenario = scenarios::require_template(id)?;
    info!("Seeding scenario {}", scenario.id);

    let store = scenario.seed(canvas_width, &mut InstanceIds::default());
    let result = analyze_stack(&store.tools, &store.connections);
    let comparison = scenario.compare(&result);

    if out.json {
        return print_json(&json!({
            "scenario": scenario.id,
            "stack": store,
            "analysis": result,
            "comparison": comparison,
        }));
    }

    print_header(scenario, out);
    print_report(&store.tools, &result, out);
    print_comparison(scenario, &comparison, &store, out);
    Ok(())
}

fn print_header(scenario: &Scenario, out: Output) {
    println!("{} {}", scenario.icon, out.heading(scenario.name));
    println!("   {}", scenario.description);
    println!();
}

fn print_solution(scenario: &Scenario, out: Output) {
    let solution = &scenario.solution;
    println!("{} {}", out.heading("Target architecture:"), solution.name);
    println!("  {} {}", solution.hub.icon, out.paint(solution.hub.name, Style::new().bold().cyan()));
    for capability in solution.hub.capabilities {
        println!("      {}", out.dim(capability));
    }
    for satellite in solution.satellites {
        let replaces: Vec<_> = satellite.replaces.iter().map(|id| catalog::tool_name(id)).collect();
        println!("  {} {}", satellite.icon, satellite.name);
        println!("      replaces {}", replaces.join(", "));
        println!("      {}", out.dim(satellite.features.join(" · ")));
    }
    println!();
}

fn print_comparison(scenario: &Scenario, comparison: &Comparison, store: &StackStore, out: Output) {
    let now = &comparison.current;
    let after = &comparison.projected;
    let good = Style::new().green();

    println!("{} {}", out.heading("With"), scenario.solution.name);
    println!("  {:<20} {:>8} {:>8}", "", "now", "after");
    println!("  {:<20} {:>8} {:>8}", "Tools siloed", now.tools_siloed, after.tools_siloed);
    println!(
        "  {:<20} {:>7}% {:>7}%",
        "Data lost", now.data_lost_percent, after.data_lost_percent
    );
    println!(
        "  {:<20} {:>8} {:>8}",
        "Manual hours/week", now.manual_hours_per_week, after.manual_hours_per_week
    );
    println!(
        "  {:<20} {:>7}% {:>7}%",
        "Leads lost", now.leads_lost_percent, after.leads_lost_percent
    );
    println!();
    println!(
        "  {} hours a week back, {} fewer points of data loss, {} more leads kept, ${} saved each month",
        out.paint(comparison.hours_reclaimed(), good),
        out.paint(comparison.data_loss_reduction(), good),
        out.paint(format!("{}%", comparison.leads_recovered()), good),
        out.paint(after.monthly_savings, good)
    );

    let kept = scenario.solution.unreplaced(store);
    if !kept.is_empty() {
        let names: Vec<_> = kept.iter().map(|id| catalog::tool_name(id)).collect();
        println!("  {} {}", out.dim("Kept alongside the hub:"), names.join(", "));
    }
    println!();
}
