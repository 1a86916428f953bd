//! Workflow use-case service.
//!
//! # Responsibility
//! - Load the active tool/item sets from storage and build the abstract
//!   workflow graph, optionally filtered to one tool.
//! - Serialize the graph into the renderer's DOT input.
//!
//! # Invariants
//! - Each build produces an immutable snapshot; the service never mutates
//!   the entity registries it loads.

use crate::graph::{self, WorkflowGraph};
use crate::model::registry::{ItemSet, ToolSet};
use crate::model::ValidationError;
use crate::repo::item_repo::ItemRepository;
use crate::repo::tool_repo::ToolRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for workflow graph use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Stored entities violate registry invariants (e.g. colliding slugs).
    Validation(ValidationError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Use-case facade over the tool and item repositories.
pub struct WorkflowService<T: ToolRepository, I: ItemRepository> {
    tools: T,
    items: I,
}

impl<T: ToolRepository, I: ItemRepository> WorkflowService<T, I> {
    /// Creates a service using the provided repository implementations.
    pub fn new(tools: T, items: I) -> Self {
        Self { tools, items }
    }

    /// Loads the active tool set from storage.
    pub fn load_tools(&self) -> Result<ToolSet, ServiceError> {
        let mut set = ToolSet::new();
        for tool in self.tools.list_tools()? {
            set.insert(tool)?;
        }
        Ok(set)
    }

    /// Loads the active item set from storage.
    pub fn load_items(&self) -> Result<ItemSet, ServiceError> {
        let mut set = ItemSet::new();
        for item in self.items.list_items()? {
            set.insert(item)?;
        }
        Ok(set)
    }

    /// Builds the workflow graph, optionally filtered to one tool.
    pub fn build_graph(&self, filter: Option<&str>) -> Result<WorkflowGraph, ServiceError> {
        let tools = self.load_tools()?;
        let items = self.load_items()?;
        Ok(graph::build(&items, &tools, filter))
    }

    /// Builds the graph and serializes it to renderer DOT input.
    pub fn build_dot(&self, filter: Option<&str>) -> Result<String, ServiceError> {
        Ok(graph::to_dot(&self.build_graph(filter)?))
    }

    /// Items whose toolflow references the given tool in any phase.
    pub fn items_using_tool(&self, tool: &str) -> Result<ItemSet, ServiceError> {
        let items = self.load_items()?;
        Ok(graph::items_using_tool(tool, &items))
    }
}
