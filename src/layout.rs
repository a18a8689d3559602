// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Layout engine - deterministic node placement for the canvas
//!
//! Two pure layouts: a category-grouped grid for a freshly seeded stack, and a
//! radial hub-and-satellite arrangement for a target architecture.

use crate::catalog;
use crate::types::{Category, PlacedTool, Position};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::trace;

/// Width of a tool node
pub const NODE_WIDTH: f64 = 180.0;
/// Height of a tool node
pub const NODE_HEIGHT: f64 = 80.0;
/// Horizontal gap between grid nodes
pub const H_GAP: f64 = 40.0;
/// Vertical gap between grid rows
pub const V_GAP: f64 = 40.0;
/// Offset of the first grid node from the canvas origin
pub const CANVAS_PADDING: f64 = 40.0;

/// Width of the hub node
pub const HUB_WIDTH: f64 = 240.0;
/// Height of the hub node
pub const HUB_HEIGHT: f64 = 100.0;
/// Width of a satellite node
pub const SATELLITE_WIDTH: f64 = NODE_WIDTH;
/// Height of a satellite node
pub const SATELLITE_HEIGHT: f64 = NODE_HEIGHT;

/// Monotonic instance ID source threaded through layout calls
#[derive(Debug, Clone)]
pub struct InstanceIds {
    prefix: String,
    next: u64,
}

impl Default for InstanceIds {
    fn default() -> Self {
        Self::new("tool")
    }
}

impl InstanceIds {
    /// Start a sequence at `<prefix>-1`
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }

    /// Continue a sequence after IDs already handed out
    #[must_use]
    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self { prefix: prefix.into(), next }
    }

    /// Hand out the next ID
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Columns that fit in a canvas of the given width, at least one
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grid_columns(canvas_width: f64) -> usize {
    let columns = (canvas_width / (NODE_WIDTH + H_GAP)).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

/// Place catalog tools on a grid, same-category tools contiguous
///
/// Categories keep the order in which they first appear in `tool_ids`. Tools
/// with unknown catalog IDs are grouped together the same way. Each tool gets a
/// fresh ID from `ids`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_grid<S: AsRef<str>>(
    tool_ids: &[S],
    canvas_width: f64,
    ids: &mut InstanceIds,
) -> Vec<PlacedTool> {
    let mut groups: Vec<(Option<Category>, Vec<&str>)> = Vec::new();
    for id in tool_ids {
        let id = id.as_ref();
        let category = catalog::tool_by_id(id).map(|t| t.category);
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(id),
            None => groups.push((category, vec![id])),
        }
    }

    let columns = grid_columns(canvas_width);
    trace!(columns, groups = groups.len(), "Grid layout");

    groups
        .into_iter()
        .flat_map(|(_, members)| members)
        .enumerate()
        .map(|(i, tool_id)| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            PlacedTool {
                instance_id: ids.next_id(),
                tool_id: tool_id.to_string(),
                position: Position::new(
                    CANVAS_PADDING + col * (NODE_WIDTH + H_GAP),
                    CANVAS_PADDING + row * (NODE_HEIGHT + V_GAP),
                ),
            }
        })
        .collect()
}

/// Hub and satellite positions (top-left corners of their nodes)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubLayout {
    /// Hub node position
    pub hub: Position,
    /// Satellite node positions, clockwise from the top
    pub satellites: Vec<Position>,
}

/// Angle of satellite `index` out of `count`, radians, starting at the top
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn satellite_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + index as f64 * TAU / count as f64
}

/// Arrange a hub at `center` with `count` satellites on a circle of `radius`
///
/// Satellites start at -90° and proceed clockwise in screen space (y down),
/// spaced by 2π/count.
#[must_use]
pub fn layout_hub_satellite(count: usize, center: Position, radius: f64) -> HubLayout {
    let hub = Position::new(center.x - HUB_WIDTH / 2.0, center.y - HUB_HEIGHT / 2.0);
    let satellites = (0..count)
        .map(|i| {
            let angle = satellite_angle(i, count);
            Position::new(
                center.x + radius * angle.cos() - SATELLITE_WIDTH / 2.0,
                center.y + radius * angle.sin() - SATELLITE_HEIGHT / 2.0,
            )
        })
        .collect();
    HubLayout { hub, satellites }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_instance_ids_monotonic() {
        let mut ids = InstanceIds::new("n");
        assert_eq!(ids.next_id(), "n-1");
        assert_eq!(ids.next_id(), "n-2");
        let mut resumed = InstanceIds::starting_at("n", 10);
        assert_eq!(resumed.next_id(), "n-10");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(1200.0), 5);
        assert_eq!(grid_columns(219.0), 1);
        assert_eq!(grid_columns(0.0), 1);
        assert_eq!(grid_columns(-50.0), 1);
        assert_eq!(grid_columns(f64::NAN), 1);
    }

    #[test]
    fn test_grid_groups_categories_contiguously() {
        let ids = ["hubspot", "slack", "pipedrive", "gmail", "asana"];
        let placed = layout_grid(&ids, 1200.0, &mut InstanceIds::default());
        let order: Vec<_> = placed.iter().map(|t| t.tool_id.as_str()).collect();
        assert_eq!(order, vec!["hubspot", "pipedrive", "slack", "gmail", "asana"]);
    }

    #[test]
    fn test_grid_wraps_rows() {
        let ids = ["hubspot", "pipedrive", "salesforce"];
        let placed = layout_grid(&ids, 500.0, &mut InstanceIds::default());
        // 500 / 220 -> 2 columns
        assert_eq!(placed[0].position, Position::new(40.0, 40.0));
        assert_eq!(placed[1].position, Position::new(260.0, 40.0));
        assert_eq!(placed[2].position, Position::new(40.0, 160.0));
    }

    #[test]
    fn test_grid_is_deterministic() {
        let ids = ["wix", "hubspot", "stripe", "quickbooks"];
        let a = layout_grid(&ids, 900.0, &mut InstanceIds::default());
        let b = layout_grid(&ids, 900.0, &mut InstanceIds::default());
        assert_eq!(a, b);
        assert_eq!(a[0].instance_id, "tool-1");
        assert_eq!(a[3].instance_id, "tool-4");
    }

    #[test]
    fn test_grid_keeps_unknown_ids() {
        let ids = ["mystery", "hubspot", "enigma"];
        let placed = layout_grid(&ids, 1200.0, &mut InstanceIds::default());
        let order: Vec<_> = placed.iter().map(|t| t.tool_id.as_str()).collect();
        assert_eq!(order, vec!["mystery", "enigma", "hubspot"]);
    }

    #[test]
    fn test_hub_centered() {
        let layout = layout_hub_satellite(0, Position::new(500.0, 400.0), 250.0);
        assert_eq!(layout.hub, Position::new(380.0, 350.0));
        assert!(layout.satellites.is_empty());
    }

    #[test]
    fn test_first_satellite_at_top() {
        let layout = layout_hub_satellite(4, Position::new(500.0, 400.0), 250.0);
        let first = layout.satellites[0];
        assert!((first.x + SATELLITE_WIDTH / 2.0 - 500.0).abs() < EPS);
        assert!((first.y + SATELLITE_HEIGHT / 2.0 - 150.0).abs() < EPS);
        // clockwise on screen: second satellite sits to the right
        let second = layout.satellites[1];
        assert!((second.x + SATELLITE_WIDTH / 2.0 - 750.0).abs() < EPS);
    }

    #[test]
    fn test_satellites_on_circle() {
        let center = Position::new(0.0, 0.0);
        let layout = layout_hub_satellite(7, center, 300.0);
        for (i, p) in layout.satellites.iter().enumerate() {
            let dx = p.x + SATELLITE_WIDTH / 2.0;
            let dy = p.y + SATELLITE_HEIGHT / 2.0;
            let angle = satellite_angle(i, 7);
            assert!(((dx * dx + dy * dy).sqrt() - 300.0).abs() < 1e-6);
            assert!((dx / 300.0 - angle.cos()).abs() < 1e-9);
            assert!((dy / 300.0 - angle.sin()).abs() < 1e-9);
        }
    }
}
