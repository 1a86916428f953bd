//! Workflow phase vocabulary and fixed enumerations.
//!
//! # Responsibility
//! - Define the five-phase workflow axis every phase-indexed field uses.
//! - Define the fixed enumerations for quality, method, information type
//!   and organization system.
//!
//! # Invariants
//! - `Phase::ALL` is the single authority for phase traversal order.
//! - Every enum has a stable text encoding used for DB columns and node
//!   identities; `as_str`/`parse` round-trip exactly.

use serde::{Deserialize, Serialize};

/// One of the five fixed workflow stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Collect,
    Retrieve,
    Consume,
    Extract,
    Refine,
}

impl Phase {
    /// Fixed traversal order: collect -> retrieve -> consume -> extract -> refine.
    pub const ALL: [Phase; 5] = [
        Phase::Collect,
        Phase::Retrieve,
        Phase::Consume,
        Phase::Extract,
        Phase::Refine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Collect => "collect",
            Phase::Retrieve => "retrieve",
            Phase::Consume => "consume",
            Phase::Extract => "extract",
            Phase::Refine => "refine",
        }
    }

    pub fn parse(value: &str) -> Option<Phase> {
        match value {
            "collect" => Some(Phase::Collect),
            "retrieve" => Some(Phase::Retrieve),
            "consume" => Some(Phase::Consume),
            "extract" => Some(Phase::Extract),
            "refine" => Some(Phase::Refine),
            _ => None,
        }
    }
}

/// Ordinal rating of how well a tool performs in a given phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseQuality {
    /// Tool is not applicable or unrated for the phase.
    #[default]
    Na,
    Bad,
    Ok,
    Great,
}

impl PhaseQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseQuality::Na => "na",
            PhaseQuality::Bad => "bad",
            PhaseQuality::Ok => "ok",
            PhaseQuality::Great => "great",
        }
    }

    pub fn parse(value: &str) -> Option<PhaseQuality> {
        match value {
            "na" => Some(PhaseQuality::Na),
            "bad" => Some(PhaseQuality::Bad),
            "ok" => Some(PhaseQuality::Ok),
            "great" => Some(PhaseQuality::Great),
            _ => None,
        }
    }
}

/// Whether a phase action happens manually or automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Manual,
    Automatic,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Manual => "manual",
            Method::Automatic => "automatic",
        }
    }

    pub fn parse(value: &str) -> Option<Method> {
        match value {
            "manual" => Some(Method::Manual),
            "automatic" => Some(Method::Automatic),
            _ => None,
        }
    }
}

/// Information content types that flow through the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationType {
    Book,
    ResearchPaper,
    Document,
    Annotation,
    Note,
    Email,
    ChatMessage,
    WebArticle,
    Video,
    Podcast,
    ProductIdea,
    ProjectIdea,
}

impl InformationType {
    pub fn as_str(self) -> &'static str {
        match self {
            InformationType::Book => "book",
            InformationType::ResearchPaper => "research_paper",
            InformationType::Document => "document",
            InformationType::Annotation => "annotation",
            InformationType::Note => "note",
            InformationType::Email => "email",
            InformationType::ChatMessage => "chat_message",
            InformationType::WebArticle => "web_article",
            InformationType::Video => "video",
            InformationType::Podcast => "podcast",
            InformationType::ProductIdea => "product_idea",
            InformationType::ProjectIdea => "project_idea",
        }
    }

    pub fn parse(value: &str) -> Option<InformationType> {
        match value {
            "book" => Some(InformationType::Book),
            "research_paper" => Some(InformationType::ResearchPaper),
            "document" => Some(InformationType::Document),
            "annotation" => Some(InformationType::Annotation),
            "note" => Some(InformationType::Note),
            "email" => Some(InformationType::Email),
            "chat_message" => Some(InformationType::ChatMessage),
            "web_article" => Some(InformationType::WebArticle),
            "video" => Some(InformationType::Video),
            "podcast" => Some(InformationType::Podcast),
            "product_idea" => Some(InformationType::ProductIdea),
            "project_idea" => Some(InformationType::ProjectIdea),
            _ => None,
        }
    }

    /// Human-readable fallback label, e.g. `research_paper` -> `Research Paper`.
    pub fn title_label(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a tool organizes and structures information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationSystem {
    Tags,
    Folders,
    Links,
    JohnnyDecimal,
}

impl OrganizationSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationSystem::Tags => "tags",
            OrganizationSystem::Folders => "folders",
            OrganizationSystem::Links => "links",
            OrganizationSystem::JohnnyDecimal => "johnny_decimal",
        }
    }

    pub fn parse(value: &str) -> Option<OrganizationSystem> {
        match value {
            "tags" => Some(OrganizationSystem::Tags),
            "folders" => Some(OrganizationSystem::Folders),
            "links" => Some(OrganizationSystem::Links),
            "johnny_decimal" => Some(OrganizationSystem::JohnnyDecimal),
            _ => None,
        }
    }
}
