//! SVG node extraction and interactivity annotation.
//!
//! # Responsibility
//! - Extract per-node visual/text metadata from the rendered SVG.
//! - Classify nodes back into tool-phase or source identities and splice
//!   htmx click handlers into their opening `<g>` tags.
//!
//! # Invariants
//! - The renderer-assigned element id is the substitution key; titles and
//!   labels derived from user-controlled names are never used for matching.
//! - An unparseable node title downgrades that node to non-interactive and
//!   logs a warning; it never fails the whole render.

use crate::model::phase::Phase;
use crate::slug;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Route serving the tool detail view.
const TOOL_DETAIL_ROUTE: &str = "/tool";
/// Route serving the information-item detail view.
const ITEM_DETAIL_ROUTE: &str = "/item";
/// Fill value the renderer emits for unfilled (source) node shapes.
const NO_FILL: &str = "none";

static XMLNS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"xmlns[^=]*="[^"]*""#).expect("valid xmlns regex"));

pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Reconciliation error for renderer-contract violations.
#[derive(Debug)]
pub enum ReconcileError {
    /// The artifact is not well-formed XML.
    Parse(roxmltree::Error),
    /// A node group carries no title element identifying it.
    MissingTitle { element_id: String },
    /// A node group carries no shape element.
    MissingShape { title: String },
}

impl Display for ReconcileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed render artifact: {err}"),
            Self::MissingTitle { element_id } => {
                write!(f, "node group `{element_id}` has no title element")
            }
            Self::MissingShape { title } => {
                write!(f, "node `{title}` has no shape element")
            }
        }
    }
}

impl Error for ReconcileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for ReconcileError {
    fn from(value: roxmltree::Error) -> Self {
        Self::Parse(value)
    }
}

/// Visual and textual metadata extracted for one rendered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgNode {
    /// Renderer-assigned unique element id; the substitution key.
    pub element_id: String,
    /// Element class attribute, `node` for every extracted entry.
    pub class: String,
    /// Shape fill colour; [`NO_FILL`] marks a source node.
    pub fill: String,
    /// Shape stroke colour.
    pub stroke: String,
    /// Text lines in document order; tool-phase nodes carry two.
    pub text_lines: Vec<String>,
}

impl SvgNode {
    /// Whether the node renders a tool-phase (filled) shape.
    pub fn is_tool_phase(&self) -> bool {
        self.fill != NO_FILL
    }
}

/// Extracts every `<g class="node">` group into a title-keyed map.
///
/// Namespace declarations are stripped up front so element lookup can use
/// plain tag names. A node group missing its title or its shape element is
/// a fatal renderer-contract violation.
pub fn extract_nodes(svg: &str) -> ReconcileResult<BTreeMap<String, SvgNode>> {
    let cleaned = XMLNS_RE.replace_all(svg, "");
    let doc = roxmltree::Document::parse(&cleaned)?;

    let mut nodes = BTreeMap::new();

    for group in doc
        .descendants()
        .filter(|node| node.has_tag_name("g") && node.attribute("class") == Some("node"))
    {
        let element_id = group.attribute("id").unwrap_or_default().to_string();

        let title = group
            .children()
            .find(|child| child.has_tag_name("title"))
            .and_then(|child| child.text())
            .map(str::to_string)
            .ok_or_else(|| ReconcileError::MissingTitle {
                element_id: element_id.clone(),
            })?;

        // Exactly one shape element is expected per node group.
        let shape = group
            .children()
            .find(|child| child.has_tag_name("polygon") || child.has_tag_name("ellipse"))
            .ok_or_else(|| ReconcileError::MissingShape {
                title: title.clone(),
            })?;

        let text_lines = group
            .children()
            .filter(|child| child.has_tag_name("text"))
            .filter_map(|child| child.text())
            .map(str::to_string)
            .collect();

        nodes.insert(
            title,
            SvgNode {
                element_id,
                class: "node".to_string(),
                fill: shape.attribute("fill").unwrap_or_default().to_string(),
                stroke: shape.attribute("stroke").unwrap_or_default().to_string(),
                text_lines,
            },
        );
    }

    Ok(nodes)
}

/// Extracts node metadata and attaches click handlers in one pass.
pub fn annotate(svg: &str) -> ReconcileResult<String> {
    let nodes = extract_nodes(svg)?;
    Ok(annotate_with(svg, &nodes))
}

/// Attaches htmx click handlers to previously extracted nodes.
///
/// Filled nodes resolve to the tool detail route via their
/// `{tool_slug}_{phase}` title; unfilled nodes resolve to the item detail
/// route via their joined label text. Substitution replaces each node's
/// opening `<g>` tag exactly, keyed by the renderer-assigned element id.
pub fn annotate_with(svg: &str, nodes: &BTreeMap<String, SvgNode>) -> String {
    let mut out = svg.to_string();

    for (title, node) in nodes {
        let Some(target) = click_target(title, node) else {
            continue;
        };

        let onclick = format!(
            "onclick=\"htmx.ajax('GET', '{target}', {{target: 'body', swap: 'innerHTML'}})\""
        );
        let old_tag = format!("<g id=\"{}\" class=\"node\">", node.element_id);
        let new_tag = format!(
            "<g id=\"{}\" class=\"node\" {onclick} style=\"cursor:pointer;\">",
            node.element_id
        );

        if !out.contains(&old_tag) {
            warn!(
                "event=svg_annotate module=svg status=skipped reason=tag_not_found element_id={}",
                node.element_id
            );
            continue;
        }
        out = out.replacen(&old_tag, &new_tag, 1);
    }

    out
}

/// Resolves a node back to its detail-view target, or `None` when the
/// title/label does not decompose into the expected parts.
fn click_target(title: &str, node: &SvgNode) -> Option<String> {
    if node.is_tool_phase() {
        let Some((tool_part, phase_part)) = title.rsplit_once('_') else {
            warn!(
                "event=svg_annotate module=svg status=skipped reason=unsplittable_title title={title}"
            );
            return None;
        };
        if Phase::parse(&slug::normalize(phase_part)).is_none() {
            warn!(
                "event=svg_annotate module=svg status=skipped reason=invalid_phase title={title}"
            );
            return None;
        }
        let tool_slug = slug::normalize(tool_part);
        Some(format!("{TOOL_DETAIL_ROUTE}?slug={tool_slug}"))
    } else {
        let label = node.text_lines.join(" ");
        let item_slug = slug::normalize(&label);
        if item_slug.is_empty() {
            warn!(
                "event=svg_annotate module=svg status=skipped reason=empty_label title={title}"
            );
            return None;
        }
        Some(format!("{ITEM_DETAIL_ROUTE}?slug={item_slug}"))
    }
}
