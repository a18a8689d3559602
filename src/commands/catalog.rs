// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Catalog command - lists the tools that can be placed on a stack

use super::{print_json, Output};
use crate::catalog;
use crate::rules;
use crate::types::{CatalogTool, Category};
use anyhow::Result;
use owo_colors::Style;

/// Run the catalog command
pub fn run(category: Option<Category>, out: Output) -> Result<()> {
    let categories = match category {
        Some(c) => vec![c],
        None => catalog::categories(),
    };

    if out.json {
        let tools: Vec<&CatalogTool> = categories
            .iter()
            .flat_map(|c| catalog::tools_by_category(*c))
            .collect();
        return print_json(&tools);
    }

    for category in categories {
        let tools = catalog::tools_by_category(category);
        println!(
            "{} {}",
            out.heading(category.style().label),
            out.dim(format!("({}, {} tools)", category.slug(), tools.len()))
        );
        for tool in tools {
            let price = match tool.monthly_price {
                Some(p) if p > 0.0 => format!("${p:.2}/mo"),
                Some(_) => "free".to_string(),
                None => "usage-based".to_string(),
            };
            println!(
                "  {} {:<24} {:<22} {}",
                tool.icon,
                tool.name,
                out.paint(tool.id, Style::new().cyan()),
                out.dim(price)
            );
            println!("      {}", tool.description);
        }
        println!();
    }

    if let Some(category) = category {
        print_expected_links(category, out);
    }

    Ok(())
}

/// Categories the rule table expects this one to be wired to
fn print_expected_links(category: Category, out: Output) {
    let expected = rules::rules_involving(category);
    if expected.is_empty() {
        return;
    }

    println!("{}", out.heading("Expected connections"));
    for rule in expected {
        let other = if rule.source == category { rule.target } else { rule.source };
        println!(
            "  {} {:<20} {} {}",
            rule.issue.severity.icon(),
            other.style().label,
            out.dim(format!("({})", rule.expected.label())),
            rule.issue.title
        );
    }
    println!();
}
