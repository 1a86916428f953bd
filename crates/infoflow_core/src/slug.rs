//! Slug/identity resolver.
//!
//! # Responsibility
//! - Derive the stable identifier for a display name.
//! - Normalize tool names referenced inside toolflow values before they are
//!   used as graph-node keys or storage join keys.
//!
//! # Invariants
//! - `normalize` is pure and deterministic.
//! - `normalize(normalize(x)) == normalize(x)` for every input.
//! - Output contains only lowercase ASCII alphanumerics and `_`.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Normalizes a display name into a stable slug identifier.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single `_` and strips leading/trailing separators.
///
/// Empty or whitespace-only input yields an empty slug; rejecting that is a
/// caller-level validation concern, not a resolver error.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let replaced = NON_ALNUM_RUN_RE.replace_all(&lowered, "_");
    replaced.trim_matches('_').to_string()
}
