use infoflow_core::samples::{sample_items, sample_tools};
use infoflow_core::{
    build, items_using_tool, to_dot, InformationItem, InformationType, ItemSet, NodeKind, Phase,
    PhaseMethods, PhaseQualities, PhaseQuality, Tool, ToolSet, Toolflow, ToolflowEntry,
};
use std::collections::HashSet;

fn item(name: &str, info_type: InformationType, toolflow: Toolflow) -> InformationItem {
    InformationItem::new(name, info_type, PhaseMethods::default(), toolflow)
}

fn single_phase_flow(phase: Phase, tool: &str) -> Toolflow {
    let mut toolflow = Toolflow::default();
    toolflow.set(phase, Some(ToolflowEntry::single(tool)));
    toolflow
}

#[test]
fn shared_subpaths_collapse_into_one_node_and_distinct_edges() {
    let mut items = ItemSet::new();
    items
        .insert(item(
            "Book",
            InformationType::Book,
            single_phase_flow(Phase::Collect, "NeoReader"),
        ))
        .unwrap();
    items
        .insert(item(
            "Document",
            InformationType::Document,
            single_phase_flow(Phase::Collect, "NeoReader"),
        ))
        .unwrap();

    let graph = build(&items, &ToolSet::new(), None);

    let tool_nodes: Vec<_> = graph
        .nodes()
        .iter()
        .filter(|node| matches!(node.kind, NodeKind::ToolPhase { .. }))
        .collect();
    assert_eq!(tool_nodes.len(), 1);
    assert_eq!(tool_nodes[0].id, "neoreader_collect");

    assert!(graph.contains_edge("source_book", "neoreader_collect"));
    assert!(graph.contains_edge("source_document", "neoreader_collect"));
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn no_edge_identity_appears_twice_in_one_build() {
    let items = sample_items();
    let tools = sample_tools();
    let graph = build(&items, &tools, None);

    let mut seen = HashSet::new();
    for edge in graph.edges() {
        assert!(
            seen.insert((edge.from.clone(), edge.to.clone())),
            "duplicate edge {} -> {}",
            edge.from,
            edge.to
        );
    }
}

#[test]
fn build_is_deterministic_for_value_equal_inputs() {
    let first = build(&sample_items(), &sample_tools(), None);
    let second = build(&sample_items(), &sample_tools(), None);

    let node_ids = |graph: &infoflow_core::WorkflowGraph| -> Vec<String> {
        graph.nodes().iter().map(|node| node.id.clone()).collect()
    };
    let edge_keys = |graph: &infoflow_core::WorkflowGraph| -> Vec<(String, String)> {
        graph
            .edges()
            .iter()
            .map(|edge| (edge.from.clone(), edge.to.clone()))
            .collect()
    };

    assert_eq!(node_ids(&first), node_ids(&second));
    assert_eq!(edge_keys(&first), edge_keys(&second));
    assert_eq!(to_dot(&first), to_dot(&second));
}

#[test]
fn fill_color_follows_the_quality_lattice() {
    let mut quality = PhaseQualities::default();
    quality.set(Phase::Collect, PhaseQuality::Great);
    quality.set(Phase::Retrieve, PhaseQuality::Bad);
    quality.set(Phase::Consume, PhaseQuality::Ok);

    let mut tools = ToolSet::new();
    tools.insert(Tool::new("Reader", Vec::new(), quality)).unwrap();

    let mut toolflow = Toolflow::default();
    toolflow.set(Phase::Collect, Some(ToolflowEntry::single("Reader")));
    toolflow.set(Phase::Retrieve, Some(ToolflowEntry::single("Reader")));
    toolflow.set(Phase::Consume, Some(ToolflowEntry::single("Reader")));
    toolflow.set(Phase::Extract, Some(ToolflowEntry::single("Reader")));
    toolflow.set(Phase::Refine, Some(ToolflowEntry::single("Ghost")));

    let mut items = ItemSet::new();
    items
        .insert(item("Web Article", InformationType::WebArticle, toolflow))
        .unwrap();

    let graph = build(&items, &tools, None);
    let fill = |id: &str| graph.node(id).unwrap().fill;

    assert_eq!(fill("reader_collect"), Some("lightgreen"));
    assert_eq!(fill("reader_retrieve"), Some("orange"));
    assert_eq!(fill("reader_consume"), Some("lightblue"));
    assert_eq!(fill("reader_extract"), Some("lightgray"));
    // Unknown tool still renders, ungraded.
    assert_eq!(fill("ghost_refine"), Some("white"));
}

#[test]
fn skipped_phase_produces_direct_edge_to_next_tool() {
    let mut toolflow = Toolflow::default();
    toolflow.set(Phase::Collect, Some(ToolflowEntry::single("Reader")));
    toolflow.set(Phase::Extract, Some(ToolflowEntry::single("Readwise")));

    let mut items = ItemSet::new();
    items
        .insert(item("Annotation", InformationType::Annotation, toolflow))
        .unwrap();

    let graph = build(&items, &ToolSet::new(), None);
    assert!(graph.contains_edge("source_annotation", "reader_collect"));
    assert!(graph.contains_edge("reader_collect", "readwise_extract"));
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn multi_tool_phases_connect_full_frontier_cross_product() {
    let mut toolflow = Toolflow::default();
    toolflow.set(
        Phase::Collect,
        Some(ToolflowEntry::multiple(&["Reader", "Recall"])),
    );
    toolflow.set(
        Phase::Refine,
        Some(ToolflowEntry::multiple(&["Obsidian", "Recall"])),
    );

    let mut items = ItemSet::new();
    items
        .insert(item("Note", InformationType::Note, toolflow))
        .unwrap();

    let graph = build(&items, &ToolSet::new(), None);

    // source -> both collect nodes, then 2x2 cross product into refine.
    assert_eq!(graph.edges().len(), 2 + 4);
    assert!(graph.contains_edge("reader_collect", "obsidian_refine"));
    assert!(graph.contains_edge("reader_collect", "recall_refine"));
    assert!(graph.contains_edge("recall_collect", "obsidian_refine"));
    assert!(graph.contains_edge("recall_collect", "recall_refine"));
}

#[test]
fn one_source_node_per_distinct_information_type() {
    let mut items = ItemSet::new();
    items
        .insert(item(
            "First Note",
            InformationType::Note,
            single_phase_flow(Phase::Retrieve, "Obsidian"),
        ))
        .unwrap();
    items
        .insert(item(
            "Second Note",
            InformationType::Note,
            single_phase_flow(Phase::Retrieve, "Obsidian"),
        ))
        .unwrap();

    let graph = build(&items, &ToolSet::new(), None);
    let sources = graph.source_rank();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].id, "source_note");
    // First item in slug order labels the shared source node.
    assert_eq!(sources[0].label, "First Note");
}

#[test]
fn items_using_tool_matches_sample_expectations() {
    let items = sample_items();
    let using_readwise = items_using_tool("readwise", &items);

    for slug in ["annotation", "book", "podcast", "research_paper", "document"] {
        assert!(using_readwise.contains(slug), "expected `{slug}` to match");
    }
    assert!(!using_readwise.contains("web_article"));
    assert!(!using_readwise.contains("note"));
    assert!(!using_readwise.contains("youtube_video"));
}

#[test]
fn items_using_tool_is_case_insensitive() {
    let items = sample_items();
    let lower = items_using_tool("readwise", &items);
    let mixed = items_using_tool("ReadWise", &items);
    assert_eq!(lower.len(), mixed.len());
}

#[test]
fn tool_filter_restricts_the_graph_to_matching_items() {
    let graph = build(&sample_items(), &sample_tools(), Some("librarything"));

    // Only the Book item references LibraryThing.
    let sources = graph.source_rank();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].id, "source_book");
    assert!(graph.contains_node("librarything_collect"));
    assert!(!graph.contains_node("snipd_collect"));
}

#[test]
fn graph_is_acyclic_by_construction() {
    let graph = build(&sample_items(), &sample_tools(), None);

    // Rank of a node id along the source -> refine axis.
    let position = |id: &str| -> usize {
        match &graph.node(id).unwrap().kind {
            NodeKind::Source { .. } => 0,
            NodeKind::ToolPhase { phase, .. } => {
                1 + Phase::ALL.iter().position(|p| p == phase).unwrap()
            }
        }
    };

    for edge in graph.edges() {
        assert!(
            position(&edge.from) < position(&edge.to),
            "edge {} -> {} does not advance the phase axis",
            edge.from,
            edge.to
        );
    }
}

#[test]
fn dot_output_carries_ranks_labels_and_colors() {
    let dot = to_dot(&build(&sample_items(), &sample_tools(), None));

    assert!(dot.starts_with("digraph infoflow {"));
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("rank=same;"));
    assert!(dot.contains(
        "\"readwise_extract\" [label=\"readwise\\n(extract)\" shape=hexagon style=filled fillcolor=\"lightgreen\"]"
    ));
    assert!(dot.contains("\"source_book\" [label=\"Book\" shape=box]"));
    assert!(dot.contains("\"source_book\" -> \"librarything_collect\";"));
}
