// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Layout command - prints node positions as JSON

use super::print_json;
use crate::catalog;
use crate::layout::{self, InstanceIds};
use crate::types::Position;
use anyhow::{bail, Result};
use tracing::{info, warn};

/// Place catalog tools on a grid
pub fn grid(tool_ids: &[String], canvas_width: f64) -> Result<()> {
    if tool_ids.is_empty() {
        bail!("No tools given. Pass catalog IDs, e.g. 'stackyard layout grid hubspot stripe'");
    }
    for id in tool_ids {
        if catalog::tool_by_id(id).is_none() {
            warn!("Unknown catalog tool: {}", id);
        }
    }

    info!("Grid layout for {} tools at width {}", tool_ids.len(), canvas_width);
    let placed = layout::layout_grid(tool_ids, canvas_width, &mut InstanceIds::default());
    print_json(&placed)
}

/// Arrange a hub and its satellites
pub fn hub(satellites: usize, center: Position, radius: f64) -> Result<()> {
    info!("Hub layout with {} satellites, radius {}", satellites, radius);
    print_json(&layout::layout_hub_satellite(satellites, center, radius))
}
