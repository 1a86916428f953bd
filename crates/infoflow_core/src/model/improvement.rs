//! Improvement backlog entry.
//!
//! # Responsibility
//! - Record a concrete improvement idea against one tool in one phase.
//!
//! # Invariants
//! - The referenced tool slug exists in the active tool set at construction
//!   time; dangling references are rejected, not discovered later.

use crate::model::phase::Phase;
use crate::model::registry::ToolSet;
use crate::model::ValidationError;
use crate::slug;
use serde::{Deserialize, Serialize};

/// One improvement idea for a tool/phase combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    /// Short title; its slug is the storage key.
    pub title: String,
    /// What needs to be improved.
    pub what: String,
    /// Why the improvement is needed.
    pub why: String,
    /// How the improvement could be realized.
    pub how: String,
    /// Priority, lower is more urgent.
    pub priority: i64,
    /// Slug of the tool needing improvement.
    pub tool: String,
    /// Phase the improvement applies to.
    pub phase: Phase,
}

impl Improvement {
    /// Creates an improvement after validating the tool reference.
    ///
    /// `tool` accepts a display name or an existing slug; it is normalized
    /// and must resolve to a member of `tools`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        what: impl Into<String>,
        why: impl Into<String>,
        how: impl Into<String>,
        priority: i64,
        tool: &str,
        phase: Phase,
        tools: &ToolSet,
    ) -> Result<Improvement, ValidationError> {
        let title = title.into();
        if slug::normalize(&title).is_empty() {
            return Err(ValidationError::EmptyName {
                entity: "improvement",
            });
        }

        let tool_slug = slug::normalize(tool);
        if !tools.contains(&tool_slug) {
            return Err(ValidationError::UnknownTool {
                reference: tool.to_string(),
                slug: tool_slug,
            });
        }

        Ok(Improvement {
            title,
            what: what.into(),
            why: why.into(),
            how: how.into(),
            priority,
            tool: tool_slug,
            phase,
        })
    }

    /// Derived stable identifier used as storage key.
    pub fn slug(&self) -> String {
        slug::normalize(&self.title)
    }
}
