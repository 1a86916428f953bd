//! Workflow graph construction.
//!
//! # Responsibility
//! - Derive the abstract phase/tool/source node graph from the domain model.
//! - Serialize the abstract graph into the renderer's DOT input format.
//!
//! # Invariants
//! - Node and edge registration is idempotent within one build; shared
//!   sub-paths from multiple items collapse into single edges.
//! - The graph is acyclic by construction: edges only point from a source
//!   node or an earlier phase position to a later one.
//! - Builds are deterministic for value-equal inputs.

pub mod builder;
pub mod dot;

pub use builder::{build, items_using_tool, GraphEdge, GraphNode, NodeKind, WorkflowGraph};
pub use dot::to_dot;
