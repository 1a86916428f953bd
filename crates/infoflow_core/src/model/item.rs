//! Information item domain model.
//!
//! # Responsibility
//! - Describe one information type flowing through the workflow: its
//!   per-phase method and which tool(s) handle it in each phase.
//!
//! # Invariants
//! - Every tool reference inside a toolflow is slug-normalized on
//!   construction; raw display names never reach graph or storage keys.
//! - A toolflow entry is explicitly single- or multi-tool; there is no
//!   runtime type inspection of list-or-scalar values.

use crate::model::phase::{InformationType, Method, Phase};
use crate::model::ValidationError;
use crate::slug;
use serde::{Deserialize, Serialize};

/// Tool assignment for one item in one phase.
///
/// `Multiple` signals that several tools are used interchangeably or
/// jointly in that phase; order is preserved as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolflowEntry {
    Single(String),
    Multiple(Vec<String>),
}

impl ToolflowEntry {
    /// Builds an entry from display names, normalizing each to a slug.
    ///
    /// Returns `None` for an empty name list; one name yields `Single`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Option<ToolflowEntry> {
        let mut slugs: Vec<String> = names
            .iter()
            .map(|name| slug::normalize(name.as_ref()))
            .collect();
        match slugs.len() {
            0 => None,
            1 => Some(ToolflowEntry::Single(slugs.remove(0))),
            _ => Some(ToolflowEntry::Multiple(slugs)),
        }
    }

    /// Single-tool convenience constructor.
    pub fn single(name: &str) -> ToolflowEntry {
        ToolflowEntry::Single(slug::normalize(name))
    }

    /// Multi-tool convenience constructor.
    pub fn multiple<S: AsRef<str>>(names: &[S]) -> ToolflowEntry {
        ToolflowEntry::Multiple(
            names
                .iter()
                .map(|name| slug::normalize(name.as_ref()))
                .collect(),
        )
    }

    /// Tool slugs referenced by this entry, in authored order.
    pub fn tool_slugs(&self) -> &[String] {
        match self {
            ToolflowEntry::Single(tool) => std::slice::from_ref(tool),
            ToolflowEntry::Multiple(tools) => tools,
        }
    }

    /// Whether the entry references the given tool slug.
    pub fn references(&self, tool_slug: &str) -> bool {
        self.tool_slugs().iter().any(|slug| slug == tool_slug)
    }
}

/// Per-phase toolflow assignment; absent phases are skipped by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolflow {
    pub collect: Option<ToolflowEntry>,
    pub retrieve: Option<ToolflowEntry>,
    pub consume: Option<ToolflowEntry>,
    pub extract: Option<ToolflowEntry>,
    pub refine: Option<ToolflowEntry>,
}

impl Toolflow {
    pub fn get(&self, phase: Phase) -> Option<&ToolflowEntry> {
        match phase {
            Phase::Collect => self.collect.as_ref(),
            Phase::Retrieve => self.retrieve.as_ref(),
            Phase::Consume => self.consume.as_ref(),
            Phase::Extract => self.extract.as_ref(),
            Phase::Refine => self.refine.as_ref(),
        }
    }

    pub fn set(&mut self, phase: Phase, entry: Option<ToolflowEntry>) {
        match phase {
            Phase::Collect => self.collect = entry,
            Phase::Retrieve => self.retrieve = entry,
            Phase::Consume => self.consume = entry,
            Phase::Extract => self.extract = entry,
            Phase::Refine => self.refine = entry,
        }
    }

    /// First phase (in fixed order) whose entry references the tool slug.
    pub fn first_phase_referencing(&self, tool_slug: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|phase| {
            self.get(*phase)
                .is_some_and(|entry| entry.references(tool_slug))
        })
    }
}

/// Per-phase method assignment (manual/automatic/unspecified).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMethods {
    pub collect: Option<Method>,
    pub retrieve: Option<Method>,
    pub consume: Option<Method>,
    pub extract: Option<Method>,
    pub refine: Option<Method>,
}

impl PhaseMethods {
    pub fn get(&self, phase: Phase) -> Option<Method> {
        match phase {
            Phase::Collect => self.collect,
            Phase::Retrieve => self.retrieve,
            Phase::Consume => self.consume,
            Phase::Extract => self.extract,
            Phase::Refine => self.refine,
        }
    }

    pub fn set(&mut self, phase: Phase, method: Option<Method>) {
        match phase {
            Phase::Collect => self.collect = method,
            Phase::Retrieve => self.retrieve = method,
            Phase::Consume => self.consume = method,
            Phase::Extract => self.extract = method,
            Phase::Refine => self.refine = method,
        }
    }
}

/// One information item flowing through the workflow.
///
/// Toolflow slugs need not refer to an existing [`crate::model::tool::Tool`]
/// record; unresolved references render as ungraded graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationItem {
    /// Display name, also the label of the item's source node.
    pub name: String,
    /// Information-type tag; one source node exists per distinct tag.
    pub info_type: InformationType,
    /// Method used at each phase, when specified.
    pub methods: PhaseMethods,
    /// Tool(s) handling this item at each phase.
    pub toolflow: Toolflow,
}

impl InformationItem {
    pub fn new(
        name: impl Into<String>,
        info_type: InformationType,
        methods: PhaseMethods,
        toolflow: Toolflow,
    ) -> Self {
        Self {
            name: name.into(),
            info_type,
            methods,
            toolflow,
        }
    }

    /// Derived stable identifier used as storage key.
    pub fn slug(&self) -> String {
        slug::normalize(&self.name)
    }

    /// Rejects items whose name normalizes to an empty slug.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slug().is_empty() {
            return Err(ValidationError::EmptyName { entity: "item" });
        }
        Ok(())
    }
}
