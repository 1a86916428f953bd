//! Rendered-artifact reconciliation.
//!
//! # Responsibility
//! - Parse the renderer's SVG output back into a node lookup structure.
//! - Re-derive each rendered node's domain identity and attach click
//!   handlers for the interactive dashboard.
//!
//! # Invariants
//! - Every `<g class="node">` container is visited exactly once.
//! - A node group violating the renderer contract (missing shape or title)
//!   fails the whole reconciliation instead of silently dropping
//!   interactivity.

pub mod reconcile;

pub use reconcile::{annotate, annotate_with, extract_nodes, ReconcileError, SvgNode};
