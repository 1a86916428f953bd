//! Built-in sample catalogue.
//!
//! # Responsibility
//! - Provide the reference tool and item sets used by the CLI probe, seed
//!   flows and integration tests.
//!
//! # Invariants
//! - Sample names are collision-free under slug normalization.

use crate::model::item::{InformationItem, PhaseMethods, Toolflow, ToolflowEntry};
use crate::model::phase::{InformationType, Method, OrganizationSystem, Phase, PhaseQuality};
use crate::model::registry::{ItemSet, ToolSet};
use crate::model::tool::{PhaseQualities, Tool};

fn qualities(
    collect: PhaseQuality,
    retrieve: PhaseQuality,
    consume: PhaseQuality,
    extract: PhaseQuality,
    refine: PhaseQuality,
) -> PhaseQualities {
    PhaseQualities {
        collect,
        retrieve,
        consume,
        extract,
        refine,
    }
}

/// The reference tool catalogue.
pub fn sample_tools() -> ToolSet {
    use PhaseQuality::{Bad, Great, Na, Ok as Okay};

    let mut tools = ToolSet::new();
    let entries = [
        Tool::new(
            "Reader",
            vec![OrganizationSystem::Tags],
            qualities(Great, Bad, Great, Na, Na),
        ),
        Tool::new(
            "Recall",
            vec![OrganizationSystem::Links],
            qualities(Great, Great, Na, Na, Great),
        ),
        Tool::new(
            "Readwise",
            vec![OrganizationSystem::Tags],
            qualities(Na, Okay, Na, Great, Okay),
        ),
        Tool::new(
            "Obsidian",
            vec![OrganizationSystem::JohnnyDecimal, OrganizationSystem::Links],
            qualities(Na, Okay, Okay, Great, Great),
        ),
        Tool::new(
            "LibraryThing",
            vec![OrganizationSystem::Tags],
            qualities(Okay, Bad, Na, Na, Na),
        ),
        Tool::new(
            "Snipd",
            vec![OrganizationSystem::Folders],
            qualities(Okay, Bad, Great, Na, Na),
        ),
        Tool::new(
            "NeoReader",
            vec![OrganizationSystem::Folders],
            qualities(Okay, Bad, Great, Na, Na),
        ),
        Tool::new(
            "YouTube",
            vec![OrganizationSystem::Folders],
            qualities(Okay, Bad, Okay, Na, Na),
        ),
    ];

    for tool in entries {
        tools
            .insert(tool)
            .expect("sample tool names are collision-free");
    }
    tools
}

fn methods(collect: Method) -> PhaseMethods {
    let mut methods = PhaseMethods::default();
    methods.set(Phase::Collect, Some(collect));
    methods
}

fn toolflow(entries: [Option<ToolflowEntry>; 5]) -> Toolflow {
    let [collect, retrieve, consume, extract, refine] = entries;
    Toolflow {
        collect,
        retrieve,
        consume,
        extract,
        refine,
    }
}

/// The reference information-item catalogue.
pub fn sample_items() -> ItemSet {
    let single = ToolflowEntry::single;
    let multiple = ToolflowEntry::multiple::<&str>;

    let mut items = ItemSet::new();
    let entries = [
        InformationItem::new(
            "Web Article",
            InformationType::WebArticle,
            methods(Method::Manual),
            toolflow([
                Some(multiple(&["Reader", "Recall"])),
                Some(single("Recall")),
                Some(single("Reader")),
                None,
                None,
            ]),
        ),
        InformationItem::new(
            "Annotation",
            InformationType::Annotation,
            methods(Method::Automatic),
            toolflow([
                None,
                None,
                None,
                Some(single("Readwise")),
                Some(multiple(&["Recall", "Obsidian"])),
            ]),
        ),
        InformationItem::new(
            "Note",
            InformationType::Note,
            methods(Method::Manual),
            toolflow([
                None,
                Some(single("Obsidian")),
                Some(single("Obsidian")),
                Some(single("Obsidian")),
                Some(single("Obsidian")),
            ]),
        ),
        InformationItem::new(
            "Book",
            InformationType::Book,
            methods(Method::Manual),
            toolflow([
                Some(single("LibraryThing")),
                Some(single("LibraryThing")),
                Some(single("NeoReader")),
                Some(single("Readwise")),
                Some(single("Obsidian")),
            ]),
        ),
        InformationItem::new(
            "Podcast",
            InformationType::Podcast,
            methods(Method::Automatic),
            toolflow([
                Some(single("Snipd")),
                Some(single("Snipd")),
                Some(single("Snipd")),
                Some(single("Readwise")),
                Some(single("Obsidian")),
            ]),
        ),
        InformationItem::new(
            "Research Paper",
            InformationType::ResearchPaper,
            methods(Method::Manual),
            toolflow([
                Some(multiple(&["Recall", "NeoReader"])),
                Some(multiple(&["Recall", "NeoReader"])),
                Some(single("NeoReader")),
                Some(single("Readwise")),
                Some(multiple(&["Obsidian", "Recall"])),
            ]),
        ),
        InformationItem::new(
            "Document",
            InformationType::Document,
            methods(Method::Manual),
            toolflow([
                Some(single("NeoReader")),
                Some(single("NeoReader")),
                Some(single("NeoReader")),
                Some(single("Readwise")),
                Some(multiple(&["Obsidian", "Recall"])),
            ]),
        ),
        InformationItem::new(
            "YouTube Video",
            InformationType::Video,
            methods(Method::Automatic),
            toolflow([
                Some(single("YouTube")),
                Some(single("YouTube")),
                Some(single("YouTube")),
                Some(single("Obsidian")),
                Some(single("Obsidian")),
            ]),
        ),
    ];

    for item in entries {
        items
            .insert(item)
            .expect("sample item names are collision-free");
    }
    items
}
