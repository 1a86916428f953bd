//! Tool domain model.
//!
//! # Responsibility
//! - Describe a PKM tool: organization systems, per-phase quality rating
//!   and optional per-phase usage notes.
//!
//! # Invariants
//! - `slug()` is a deterministic function of `name` via [`crate::slug::normalize`].
//! - Unrated phases default to [`PhaseQuality::Na`].

use crate::model::phase::{OrganizationSystem, Phase, PhaseQuality};
use crate::model::ValidationError;
use crate::slug;
use serde::{Deserialize, Serialize};

/// Per-phase quality ratings for one tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseQualities {
    pub collect: PhaseQuality,
    pub retrieve: PhaseQuality,
    pub consume: PhaseQuality,
    pub extract: PhaseQuality,
    pub refine: PhaseQuality,
}

impl PhaseQualities {
    pub fn get(&self, phase: Phase) -> PhaseQuality {
        match phase {
            Phase::Collect => self.collect,
            Phase::Retrieve => self.retrieve,
            Phase::Consume => self.consume,
            Phase::Extract => self.extract,
            Phase::Refine => self.refine,
        }
    }

    pub fn set(&mut self, phase: Phase, quality: PhaseQuality) {
        match phase {
            Phase::Collect => self.collect = quality,
            Phase::Retrieve => self.retrieve = quality,
            Phase::Consume => self.consume = quality,
            Phase::Extract => self.extract = quality,
            Phase::Refine => self.refine = quality,
        }
    }
}

/// Optional free-text usage notes per phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseNotes {
    pub collect: Option<String>,
    pub retrieve: Option<String>,
    pub consume: Option<String>,
    pub extract: Option<String>,
    pub refine: Option<String>,
}

impl PhaseNotes {
    pub fn get(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Collect => self.collect.as_deref(),
            Phase::Retrieve => self.retrieve.as_deref(),
            Phase::Consume => self.consume.as_deref(),
            Phase::Extract => self.extract.as_deref(),
            Phase::Refine => self.refine.as_deref(),
        }
    }

    pub fn set(&mut self, phase: Phase, note: Option<String>) {
        match phase {
            Phase::Collect => self.collect = note,
            Phase::Retrieve => self.retrieve = note,
            Phase::Consume => self.consume = note,
            Phase::Extract => self.extract = note,
            Phase::Refine => self.refine = note,
        }
    }
}

/// One tool in the PKM workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique display name.
    pub name: String,
    /// Organization systems supported by the tool.
    pub organization_systems: Vec<OrganizationSystem>,
    /// Quality rating per workflow phase.
    pub quality: PhaseQualities,
    /// Optional usage description per workflow phase.
    pub notes: PhaseNotes,
}

impl Tool {
    /// Creates a tool with the given ratings and no phase notes.
    pub fn new(
        name: impl Into<String>,
        organization_systems: Vec<OrganizationSystem>,
        quality: PhaseQualities,
    ) -> Self {
        Self {
            name: name.into(),
            organization_systems,
            quality,
            notes: PhaseNotes::default(),
        }
    }

    /// Derived stable identifier used as storage key and graph-node key.
    pub fn slug(&self) -> String {
        slug::normalize(&self.name)
    }

    /// Rejects tools whose name normalizes to an empty slug.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slug().is_empty() {
            return Err(ValidationError::EmptyName { entity: "tool" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PhaseQualities, Tool};
    use crate::model::phase::{OrganizationSystem, Phase, PhaseQuality};
    use crate::model::ValidationError;

    #[test]
    fn slug_is_derived_from_name() {
        let tool = Tool::new(
            "NeoReader",
            vec![OrganizationSystem::Folders],
            PhaseQualities::default(),
        );
        assert_eq!(tool.slug(), "neoreader");
    }

    #[test]
    fn qualities_default_to_na_and_are_phase_addressable() {
        let mut quality = PhaseQualities::default();
        assert_eq!(quality.get(Phase::Extract), PhaseQuality::Na);
        quality.set(Phase::Extract, PhaseQuality::Great);
        assert_eq!(quality.get(Phase::Extract), PhaseQuality::Great);
        assert_eq!(quality.get(Phase::Collect), PhaseQuality::Na);
    }

    #[test]
    fn blank_name_fails_validation() {
        let tool = Tool::new("  --  ", Vec::new(), PhaseQualities::default());
        assert!(matches!(
            tool.validate(),
            Err(ValidationError::EmptyName { entity: "tool" })
        ));
    }
}
