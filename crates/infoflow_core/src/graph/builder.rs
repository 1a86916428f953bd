//! Abstract workflow graph builder.
//!
//! # Responsibility
//! - Register tool-phase and source nodes with idempotent identity keys.
//! - Walk each item's toolflow and connect frontier sets phase by phase.
//! - Colour tool-phase nodes via the fixed quality lattice.
//!
//! # Invariants
//! - Node identity is `{tool_slug}_{phase}` for tool-phase nodes and
//!   `source_{type_tag}` for source nodes.
//! - No node or edge identity appears twice in one build.
//! - An absent phase leaves an item's frontier unchanged, producing a
//!   direct edge across the skipped phase.

use crate::model::phase::{InformationType, Phase, PhaseQuality};
use crate::model::registry::{ItemSet, ToolSet};
use crate::slug;
use log::debug;
use std::collections::HashSet;

/// Domain identity of a rendered graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A tool working in one specific phase.
    ToolPhase { tool_slug: String, phase: Phase },
    /// The entry point of one information type.
    Source { info_type: InformationType },
}

/// One node of the abstract graph; created fresh on every build, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Identity key, unique within one build.
    pub id: String,
    /// Display label; tool-phase labels carry two lines.
    pub label: String,
    /// Fill colour from the quality lattice; source nodes are unfilled.
    pub fill: Option<&'static str>,
    pub kind: NodeKind,
}

/// One directed edge, deduplicated by the (from, to) pair across the build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Immutable snapshot of one graph build.
#[derive(Debug, Default)]
pub struct WorkflowGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    node_ids: HashSet<String>,
    edge_keys: HashSet<(String, String)>,
}

impl WorkflowGraph {
    /// Nodes in registration order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in registration order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge_keys
            .contains(&(from.to_string(), to.to_string()))
    }

    /// Tool-phase nodes belonging to one phase rank, in registration order.
    pub fn phase_rank(&self, phase: Phase) -> Vec<&GraphNode> {
        self.nodes
            .iter()
            .filter(|node| matches!(&node.kind, NodeKind::ToolPhase { phase: p, .. } if *p == phase))
            .collect()
    }

    /// Source nodes, in registration order.
    pub fn source_rank(&self) -> Vec<&GraphNode> {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Source { .. }))
            .collect()
    }

    /// Registers a node unless its identity key is already present.
    fn add_node(&mut self, node: GraphNode) -> bool {
        if !self.node_ids.insert(node.id.clone()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Registers an edge unless the (from, to) pair is already present.
    fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if !self
            .edge_keys
            .insert((from.to_string(), to.to_string()))
        {
            return false;
        }
        self.edges.push(GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
        true
    }
}

/// Fixed quality -> fill colour mapping; `None` marks an unknown tool.
fn fill_color(quality: Option<PhaseQuality>) -> &'static str {
    match quality {
        Some(PhaseQuality::Great) => "lightgreen",
        Some(PhaseQuality::Ok) => "lightblue",
        Some(PhaseQuality::Bad) => "orange",
        Some(PhaseQuality::Na) => "lightgray",
        None => "white",
    }
}

fn tool_phase_node_id(tool_slug: &str, phase: Phase) -> String {
    format!("{tool_slug}_{}", phase.as_str())
}

fn source_node_id(info_type: InformationType) -> String {
    format!("source_{}", info_type.as_str())
}

/// Builds the abstract workflow graph for the given item and tool sets.
///
/// When `filter` is given, the item set is first reduced to the items whose
/// toolflow references that tool in any phase. Tool slugs referenced in a
/// toolflow but absent from `tools` still produce (white) nodes; the graph
/// never silently drops references.
pub fn build(items: &ItemSet, tools: &ToolSet, filter: Option<&str>) -> WorkflowGraph {
    let filtered;
    let items = match filter {
        Some(tool) => {
            filtered = items_using_tool(tool, items);
            &filtered
        }
        None => items,
    };

    let mut graph = WorkflowGraph::default();

    // Tool-phase nodes, one rank per phase.
    for phase in Phase::ALL {
        for item in items.iter() {
            let Some(entry) = item.toolflow.get(phase) else {
                continue;
            };
            for tool_slug in entry.tool_slugs() {
                let id = tool_phase_node_id(tool_slug, phase);
                if graph.contains_node(&id) {
                    continue;
                }
                let quality = tools.get(tool_slug).map(|tool| tool.quality.get(phase));
                graph.add_node(GraphNode {
                    id,
                    label: format!("{tool_slug}\n({})", phase.as_str()),
                    fill: Some(fill_color(quality)),
                    kind: NodeKind::ToolPhase {
                        tool_slug: tool_slug.clone(),
                        phase,
                    },
                });
            }
        }
    }

    // One source node per distinct information type, labeled with the first
    // item of that type encountered.
    for item in items.iter() {
        let id = source_node_id(item.info_type);
        if graph.contains_node(&id) {
            continue;
        }
        let label = if item.name.trim().is_empty() {
            item.info_type.title_label()
        } else {
            item.name.clone()
        };
        graph.add_node(GraphNode {
            id,
            label,
            fill: None,
            kind: NodeKind::Source {
                info_type: item.info_type,
            },
        });
    }

    // Frontier walk per item; edges deduplicate across items.
    for item in items.iter() {
        let mut frontier = vec![source_node_id(item.info_type)];
        for phase in Phase::ALL {
            let Some(entry) = item.toolflow.get(phase) else {
                continue;
            };
            let current: Vec<String> = entry
                .tool_slugs()
                .iter()
                .map(|tool_slug| tool_phase_node_id(tool_slug, phase))
                .collect();
            for from in &frontier {
                for to in &current {
                    graph.add_edge(from, to);
                }
            }
            if !current.is_empty() {
                frontier = current;
            }
        }
    }

    debug!(
        "event=graph_build module=graph status=ok items={} filter={} nodes={} edges={}",
        items.len(),
        filter.unwrap_or("-"),
        graph.nodes.len(),
        graph.edges.len()
    );

    graph
}

/// Returns the items whose toolflow references the given tool in any phase.
///
/// The match is case-insensitive via slug normalization; phases are scanned
/// in fixed order and scanning stops at the first match per item. The
/// result is keyed by item slug like every other item collection.
pub fn items_using_tool(tool: &str, items: &ItemSet) -> ItemSet {
    let tool_slug = slug::normalize(tool);
    items
        .iter()
        .filter(|item| item.toolflow.first_phase_referencing(&tool_slug).is_some())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build, fill_color, items_using_tool};
    use crate::model::phase::PhaseQuality;

    #[test]
    fn quality_lattice_colors_are_fixed() {
        assert_eq!(fill_color(Some(PhaseQuality::Great)), "lightgreen");
        assert_eq!(fill_color(Some(PhaseQuality::Ok)), "lightblue");
        assert_eq!(fill_color(Some(PhaseQuality::Bad)), "orange");
        assert_eq!(fill_color(Some(PhaseQuality::Na)), "lightgray");
        assert_eq!(fill_color(None), "white");
    }

    #[test]
    fn empty_inputs_build_an_empty_graph() {
        let graph = build(&Default::default(), &Default::default(), None);
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn unknown_filter_tool_yields_empty_item_set() {
        let items = items_using_tool("Ghost Tool", &Default::default());
        assert!(items.is_empty());
    }
}
