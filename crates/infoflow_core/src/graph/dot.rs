//! DOT serialization of the abstract workflow graph.
//!
//! # Responsibility
//! - Produce the renderer's input: a Graphviz digraph with one `rank=same`
//!   cluster per phase, one for source nodes, and the deduplicated edges.
//!
//! # Invariants
//! - Output is deterministic for a given graph snapshot.
//! - All identifiers and labels are quoted and escaped.

use crate::graph::builder::{GraphNode, WorkflowGraph};
use crate::model::phase::Phase;
use std::fmt::Write;

/// Serializes a workflow graph into Graphviz DOT text.
pub fn to_dot(graph: &WorkflowGraph) -> String {
    let mut out = String::from("digraph infoflow {\n    rankdir=TB;\n");

    for phase in Phase::ALL {
        let rank = graph.phase_rank(phase);
        if rank.is_empty() {
            continue;
        }
        let _ = writeln!(out, "    subgraph {{\n        rank=same;");
        for node in rank {
            let _ = writeln!(
                out,
                "        \"{}\" [label=\"{}\" shape=hexagon style=filled fillcolor=\"{}\"];",
                escape(&node.id),
                escape(&node.label),
                node.fill.unwrap_or("white")
            );
        }
        let _ = writeln!(out, "    }}");
    }

    let sources = graph.source_rank();
    if !sources.is_empty() {
        let _ = writeln!(out, "    subgraph {{\n        rank=same;");
        for node in sources {
            let _ = writeln!(out, "        {};", source_statement(node));
        }
        let _ = writeln!(out, "    }}");
    }

    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\";",
            escape(&edge.from),
            escape(&edge.to)
        );
    }

    out.push_str("}\n");
    out
}

fn source_statement(node: &GraphNode) -> String {
    format!(
        "\"{}\" [label=\"{}\" shape=box]",
        escape(&node.id),
        escape(&node.label)
    )
}

/// Escapes a string for use inside a double-quoted DOT identifier.
///
/// Literal newlines become the DOT `\n` line-break escape, which the
/// renderer turns into separate text lines.
fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_handles_quotes_and_newlines() {
        assert_eq!(escape("reader\n(collect)"), "reader\\n(collect)");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
    }
}
