//! Name resolution between command-line arguments, module ids and labels.
//!
//! Two matching rules coexist:
//!
//! - [`resolve_entry`] locates the start module with a *substring* match of
//!   the argument's base name against the full module id.
//! - [`matches_target`] ends a path search with an *equality* match of base
//!   names, so `Header` does not also match `HeaderMenu`.

use std::path::Path;

use crate::graph::DependencyGraph;

/// Separator between words in a module file name.
const WORD_SEPARATOR: char = '_';

/// File name of `id` with directory and final extension stripped.
///
/// `components/nav_bar.jsx` becomes `nav_bar`, `a/b.test.jsx` becomes `b.test`.
#[must_use]
pub fn base_name(id: &str) -> &str {
    Path::new(id)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
}

/// Find the start module for a command-line argument.
///
/// Scans the snapshot keys in order and returns the first id that contains
/// the base name of `raw_target`. Import-only modules are not candidates.
#[must_use]
pub fn resolve_entry<'g>(graph: &'g DependencyGraph, raw_target: &str) -> Option<&'g str> {
    let needle = base_name(raw_target);
    let entry = graph.module_ids().find(|id| id.contains(needle));
    match entry {
        Some(id) => tracing::debug!(argument = raw_target, module = id, "Resolved entry module"),
        None => tracing::debug!(argument = raw_target, "No module matched entry argument"),
    }
    entry
}

/// Human-readable label for a module id.
///
/// `app/components/user_profile_card.jsx` becomes `UserProfileCard`. Distinct
/// ids may share a label.
#[must_use]
pub fn to_label(id: &str) -> String {
    base_name(id)
        .split(WORD_SEPARATOR)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns `true` if `id` is the module named by `target`.
#[must_use]
pub fn matches_target(id: &str, target: &str) -> bool {
    base_name(id) == base_name(target)
}
