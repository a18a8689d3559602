// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Stack graph - placed tools and connections with petgraph backing

use crate::analysis::{self, ToolIndex};
use crate::catalog::UNKNOWN_TOOL;
use crate::error::StackError;
use crate::types::{AnalysisResult, Connection, ConnectionQuality, PlacedTool, StackStore};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A diagnostic session's stack, kept in sync with an undirected petgraph
pub struct StackGraph {
    /// Undirected view; node weights are instance IDs
    graph: UnGraph<String, ConnectionQuality>,
    /// Map from instance ID to node index, dangling endpoints included
    node_indices: HashMap<String, NodeIndex>,
    /// The placed tools and connections
    pub store: StackStore,
}

impl Default for StackGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl StackGraph {
    /// Create a new empty stack graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_indices: HashMap::new(),
            store: StackStore::default(),
        }
    }

    /// Wrap an existing store
    #[must_use]
    pub fn from_store(store: StackStore) -> Self {
        let mut stack = Self {
            graph: UnGraph::new_undirected(),
            node_indices: HashMap::new(),
            store,
        };
        stack.rebuild_graph();
        stack
    }

    /// Parse a session document
    pub fn from_json(json: &str, path: &Path) -> Result<Self, StackError> {
        let store: StackStore = serde_json::from_str(json).map_err(|source| StackError::SessionParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_store(store))
    }

    /// Load a session document from disk
    pub fn load(path: &Path) -> Result<Self, StackError> {
        let content = fs::read_to_string(path).map_err(|source| StackError::SessionRead {
            path: path.to_path_buf(),
            source,
        })?;
        let stack = Self::from_json(&content, path)?;
        debug!(
            tools = stack.tool_count(),
            connections = stack.connection_count(),
            "Loaded {}",
            path.display()
        );
        Ok(stack)
    }

    /// Rebuild the petgraph from the store
    fn rebuild_graph(&mut self) {
        self.graph.clear();
        self.node_indices.clear();

        let instances: Vec<String> = self.store.tools.iter().map(|t| t.instance_id.clone()).collect();
        for instance_id in instances {
            self.ensure_node(&instance_id);
        }

        // Unresolved endpoints become placeholder nodes rather than being dropped
        let edges: Vec<(String, String, ConnectionQuality)> = self
            .store
            .connections
            .iter()
            .map(|c| (c.from.clone(), c.to.clone(), c.quality))
            .collect();
        for (from, to, quality) in edges {
            let a = self.ensure_node(&from);
            let b = self.ensure_node(&to);
            self.graph.add_edge(a, b, quality);
        }
    }

    fn ensure_node(&mut self, instance_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(instance_id) {
            return idx;
        }
        let idx = self.graph.add_node(instance_id.to_string());
        self.node_indices.insert(instance_id.to_string(), idx);
        idx
    }

    /// Add a placed tool, replacing any tool with the same instance ID
    pub fn add_tool(&mut self, tool: PlacedTool) {
        if let Some(existing) = self.store.tools.iter_mut().find(|t| t.instance_id == tool.instance_id) {
            *existing = tool;
        } else {
            self.ensure_node(&tool.instance_id);
            self.store.tools.push(tool);
        }
    }

    /// Remove a placed tool and every connection touching it
    pub fn remove_tool(&mut self, instance_id: &str) -> Option<PlacedTool> {
        let pos = self.store.tools.iter().position(|t| t.instance_id == instance_id)?;
        let removed = self.store.tools.remove(pos);
        self.store.connections.retain(|c| !c.touches(instance_id));
        self.rebuild_graph();
        Some(removed)
    }

    /// Add a connection
    ///
    /// Self-loops are rejected. Adding a connection whose ID already exists is a
    /// no-op. Endpoints that are not placed tools are tolerated.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), StackError> {
        if connection.from == connection.to {
            return Err(StackError::SelfLoop(connection.id));
        }
        if self.store.connections.iter().any(|c| c.id == connection.id) {
            return Ok(());
        }

        let a = self.ensure_node(&connection.from);
        let b = self.ensure_node(&connection.to);
        self.graph.add_edge(a, b, connection.quality);
        self.store.connections.push(connection);
        Ok(())
    }

    /// Remove a connection by ID
    pub fn remove_connection(&mut self, id: &str) -> Option<Connection> {
        let pos = self.store.connections.iter().position(|c| c.id == id)?;
        let removed = self.store.connections.remove(pos);
        self.rebuild_graph();
        Some(removed)
    }

    /// Get a placed tool by instance ID
    #[must_use]
    pub fn get_tool(&self, instance_id: &str) -> Option<&PlacedTool> {
        self.store.tools.iter().find(|t| t.instance_id == instance_id)
    }

    /// Display name for an instance ID
    #[must_use]
    pub fn tool_name(&self, instance_id: &str) -> &'static str {
        self.get_tool(instance_id).map_or(UNKNOWN_TOOL, PlacedTool::display_name)
    }

    /// Get all placed tools
    #[must_use]
    pub fn tools(&self) -> &[PlacedTool] {
        &self.store.tools
    }

    /// Get all connections
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.store.connections
    }

    /// Number of distinct neighbours of a tool
    #[must_use]
    pub fn degree(&self, instance_id: &str) -> usize {
        self.node_indices.get(instance_id).map_or(0, |&idx| {
            let mut neighbours: Vec<_> = self.graph.neighbors(idx).collect();
            neighbours.sort_unstable();
            neighbours.dedup();
            neighbours.len()
        })
    }

    /// Get tool count
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.store.tools.len()
    }

    /// Get connection count
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.store.connections.len()
    }

    /// Check if the stack is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.tools.is_empty()
    }

    /// Groups of placed tools that can reach each other, in tool order
    ///
    /// Placeholder nodes for dangling endpoints join components but are not
    /// listed. A stack with no connections has one island per tool.
    #[must_use]
    pub fn islands(&self) -> Vec<Vec<String>> {
        let mut sets = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }

        let mut islands: Vec<(usize, Vec<String>)> = Vec::new();
        for tool in &self.store.tools {
            let Some(idx) = self.node_indices.get(&tool.instance_id) else {
                continue;
            };
            let root = sets.find(idx.index());
            match islands.iter_mut().find(|(r, _)| *r == root) {
                Some((_, members)) => {
                    if !members.contains(&tool.instance_id) {
                        members.push(tool.instance_id.clone());
                    }
                }
                None => islands.push((root, vec![tool.instance_id.clone()])),
            }
        }
        islands.into_iter().map(|(_, members)| members).collect()
    }

    /// Run the analyzer pipeline over this stack
    #[must_use]
    pub fn analyze(&self) -> AnalysisResult {
        analysis::analyze(&self.store.tools, &self.store.connections)
    }

    /// Export to DOT format for Graphviz, edges styled by quality
    #[must_use]
    pub fn to_dot(&self) -> String {
        let index = ToolIndex::new(&self.store.tools);
        let mut dot = String::from("graph stack {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for tool in &self.store.tools {
            let (label, color) = match tool.catalog() {
                Some(t) => (t.name, t.category.style().color),
                None => (UNKNOWN_TOOL, "#9ca3af"),
            };
            let _ = writeln!(
                dot,
                "  \"{}\" [label=\"{}\", color=\"{}\"];",
                dot_escape(&tool.instance_id),
                label,
                color
            );
        }

        dot.push('\n');

        for connection in &self.store.connections {
            let style = match connection.quality {
                ConnectionQuality::Native => "solid",
                ConnectionQuality::Automation => "dashed",
                ConnectionQuality::Manual => "dotted",
                ConnectionQuality::Broken => "bold, color=red",
            };
            let _ = writeln!(
                dot,
                "  \"{}\" -- \"{}\" [label=\"{}\", style={}, tooltip=\"{}\"];",
                dot_escape(&connection.from),
                dot_escape(&connection.to),
                connection.quality.label(),
                style,
                index.pair_label(connection)
            );
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.store)
    }
}

/// Escape a string for use inside a quoted DOT identifier
fn dot_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
