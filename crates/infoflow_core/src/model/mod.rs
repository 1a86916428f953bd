//! Domain model for the PKM workflow tracker.
//!
//! # Responsibility
//! - Define canonical data structures: tools, information items,
//!   improvements and their phase-indexed attributes.
//! - Own entity validation and slug-collision rules.
//!
//! # Invariants
//! - Every entity is identified by a slug derived from its display name.
//! - Domain values never self-register; the explicit registries in
//!   [`registry`] are the only entity tables.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod improvement;
pub mod item;
pub mod phase;
pub mod registry;
pub mod tool;

/// Validation error raised before any persistence or graph work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entity display name normalizes to an empty slug.
    EmptyName { entity: &'static str },
    /// Two entities normalize to the same identifier.
    DuplicateSlug {
        slug: String,
        existing_name: String,
        new_name: String,
    },
    /// An improvement references a tool missing from the active tool set.
    UnknownTool { reference: String, slug: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { entity } => {
                write!(
                    f,
                    "{entity} name must contain at least one identifier character"
                )
            }
            Self::DuplicateSlug {
                slug,
                existing_name,
                new_name,
            } => write!(
                f,
                "name `{new_name}` collides with `{existing_name}`: both normalize to slug `{slug}`"
            ),
            Self::UnknownTool { reference, slug } => {
                write!(f, "tool `{reference}` (slug `{slug}`) does not exist")
            }
        }
    }
}

impl Error for ValidationError {}
