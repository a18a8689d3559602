// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Analyze command - diagnoses a saved stack and prints the report

use super::{print_json, Output};
use crate::analysis::ToolIndex;
use crate::graph::StackGraph;
use crate::types::{AnalysisResult, PlacedTool, Severity};
use anyhow::Result;
use owo_colors::Style;
use std::path::Path;
use tracing::info;

/// Run the analyze command
pub fn run(session: &Path, out: Output) -> Result<()> {
    info!("Analyzing {}", session.display());

    let graph = StackGraph::load(session)?;
    if graph.is_empty() {
        eprintln!("Warning: {} has no tools placed.", session.display());
    }

    let result = graph.analyze();
    if out.json {
        return print_json(&result);
    }

    print_report(graph.tools(), &result, out);

    let islands = graph.islands();
    if islands.len() > 1 {
        println!("{}", out.heading(&format!("Islands ({})", islands.len())));
        for (i, island) in islands.iter().enumerate() {
            let names: Vec<_> = island.iter().map(|id| graph.tool_name(id)).collect();
            println!("  {}. {}", i + 1, names.join(", "));
        }
        println!();
    }

    Ok(())
}

fn score_style(score: u32) -> Style {
    match score {
        80.. => Style::new().green().bold(),
        50..=79 => Style::new().yellow().bold(),
        _ => Style::new().red().bold(),
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Style::new().red().bold(),
        Severity::Warning => Style::new().yellow(),
        Severity::Info => Style::new().blue(),
    }
}

/// Print a full report: score, findings, statistics and pain points
pub fn print_report(tools: &[PlacedTool], result: &AnalysisResult, out: Output) {
    let index = ToolIndex::new(tools);

    println!(
        "🩺 Stack health: {}",
        out.paint(format!("{}/100", result.score), score_style(result.score))
    );
    println!(
        "   {} critical, {} warning, {} info",
        result.count_severity(Severity::Critical),
        result.count_severity(Severity::Warning),
        result.count_severity(Severity::Info)
    );
    println!();

    if result.issues.is_empty() {
        println!("✅ No issues found");
        println!();
    } else {
        println!("{}", out.heading(&format!("Findings ({})", result.issues.len())));
        for issue in &result.issues {
            let tag = format!("[{}]", issue.severity);
            println!(
                "  {} {} {}",
                issue.severity.icon(),
                out.paint(tag, severity_style(issue.severity)),
                issue.title
            );
            println!("      {}", issue.description);
            if !issue.affected_tools.is_empty() {
                let names: Vec<_> = issue.affected_tools.iter().map(|id| index.name(id)).collect();
                println!("      {}", out.dim(format!("{} · {}", issue.category, names.join(", "))));
            }
        }
        println!();
    }

    let stats = &result.stats;
    println!("{}", out.heading("Impact"));
    println!("  Tools siloed:        {}", stats.tools_siloed);
    println!("  Data lost:           {}%", stats.data_lost_percent);
    println!("  Manual hours/week:   {}", stats.manual_hours_per_week);
    println!("  Leads lost:          {}%", stats.leads_lost_percent);
    println!("  Monthly waste:       ${}", stats.monthly_waste);
    println!();

    if !result.pain_points.is_empty() {
        println!("{}", out.heading("What this means"));
        for point in &result.pain_points {
            println!("  • {point}");
        }
        println!();
    }
}
