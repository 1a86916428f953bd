//! Explicit slug-keyed registries for domain entities.
//!
//! # Responsibility
//! - Own the active tool/item sets as ordinary values passed to call sites.
//! - Reject slug collisions before they can reach persistence.
//!
//! # Invariants
//! - Constructing a domain value never registers it anywhere; insertion is
//!   an explicit caller action.
//! - Iteration order is slug order, which keeps every downstream consumer
//!   (graph builder included) deterministic.

use crate::model::item::InformationItem;
use crate::model::tool::Tool;
use crate::model::ValidationError;
use std::collections::btree_map::Values;
use std::collections::BTreeMap;

/// Active set of tools, keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct ToolSet {
    entries: BTreeMap<String, Tool>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tool, rejecting empty names and slug collisions.
    ///
    /// A collision error names the colliding display name so callers can
    /// surface a usable conflict message.
    pub fn insert(&mut self, tool: Tool) -> Result<(), ValidationError> {
        tool.validate()?;
        let slug = tool.slug();
        if let Some(existing) = self.entries.get(&slug) {
            return Err(ValidationError::DuplicateSlug {
                slug,
                existing_name: existing.name.clone(),
                new_name: tool.name,
            });
        }
        self.entries.insert(slug, tool);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&Tool> {
        self.entries.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Tools in slug order.
    pub fn iter(&self) -> Values<'_, String, Tool> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Tool> for ToolSet {
    /// Collects tools, silently keeping the first entry on slug collision.
    /// Use [`ToolSet::insert`] when collisions must surface as errors.
    fn from_iter<I: IntoIterator<Item = Tool>>(iter: I) -> Self {
        let mut set = ToolSet::new();
        for tool in iter {
            let _ = set.insert(tool);
        }
        set
    }
}

/// Active set of information items, keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct ItemSet {
    entries: BTreeMap<String, InformationItem>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, rejecting empty names and slug collisions.
    pub fn insert(&mut self, item: InformationItem) -> Result<(), ValidationError> {
        item.validate()?;
        let slug = item.slug();
        if let Some(existing) = self.entries.get(&slug) {
            return Err(ValidationError::DuplicateSlug {
                slug,
                existing_name: existing.name.clone(),
                new_name: item.name,
            });
        }
        self.entries.insert(slug, item);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&InformationItem> {
        self.entries.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Items in slug order.
    pub fn iter(&self) -> Values<'_, String, InformationItem> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<InformationItem> for ItemSet {
    /// Collects items, silently keeping the first entry on slug collision.
    fn from_iter<I: IntoIterator<Item = InformationItem>>(iter: I) -> Self {
        let mut set = ItemSet::new();
        for item in iter {
            let _ = set.insert(item);
        }
        set
    }
}
