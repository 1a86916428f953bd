//! Core domain logic for the infoflow PKM workflow tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod graph;
pub mod logging;
pub mod model;
pub mod repo;
pub mod samples;
pub mod service;
pub mod slug;
pub mod svg;

pub use graph::{build, items_using_tool, to_dot, GraphEdge, GraphNode, NodeKind, WorkflowGraph};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::improvement::Improvement;
pub use model::item::{InformationItem, PhaseMethods, Toolflow, ToolflowEntry};
pub use model::phase::{InformationType, Method, OrganizationSystem, Phase, PhaseQuality};
pub use model::registry::{ItemSet, ToolSet};
pub use model::tool::{PhaseNotes, PhaseQualities, Tool};
pub use model::ValidationError;
pub use repo::improvement_repo::{ImprovementRepository, SqliteImprovementRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::tool_repo::{SqliteToolRepository, ToolRepository};
pub use repo::{RepoError, RepoResult};
pub use service::{ServiceError, WorkflowService};
pub use svg::{annotate, annotate_with, extract_nodes, ReconcileError, SvgNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
