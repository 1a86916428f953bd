//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads and graph construction into the
//!   UI-facing operation surface.
//! - Keep UI layers decoupled from storage and graph internals.

pub mod workflow_service;

pub use workflow_service::{ServiceError, WorkflowService};
