//! Depth-bounded dependency tree beneath a start module.

use std::collections::HashSet;

use serde::Serialize;

use crate::filter::NodeFilter;
use crate::graph::DependencyGraph;
use crate::resolver::to_label;

/// Depth below the start module shown when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// A module in a rendered dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepTreeNode {
    /// Module id as it appears in the graph.
    pub id: String,
    /// Display label derived from the id.
    pub label: String,
    /// Imports of this module, in snapshot order.
    #[serde(rename = "dependencies")]
    pub children: Vec<DepTreeNode>,
}

impl DepTreeNode {
    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DepTreeNode::node_count)
            .sum::<usize>()
    }

    /// Depth of the deepest node, with the root at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Build the dependency tree of `start`, at most `max_depth` levels deep.
///
/// The cycle guard is branch-local: every recursive call gets its own copy of
/// the ancestors seen so far. A module is cut only when it repeats within its
/// own ancestor chain, so shared dependencies still show up under each
/// sibling that imports them.
#[must_use]
pub fn build_tree(
    graph: &DependencyGraph,
    start: &str,
    filter: &NodeFilter,
    max_depth: usize,
) -> DepTreeNode {
    build_branch(graph, start, filter, HashSet::new(), 0, max_depth)
}

fn build_branch<'a>(
    graph: &'a DependencyGraph,
    id: &'a str,
    filter: &NodeFilter,
    mut visited: HashSet<&'a str>,
    depth: usize,
    max_depth: usize,
) -> DepTreeNode {
    visited.insert(id);

    let children = if depth < max_depth {
        graph
            .imports_of(id)
            .into_iter()
            .filter(|import| filter.accepts(import) && !visited.contains(import))
            .map(|import| {
                build_branch(graph, import, filter, visited.clone(), depth + 1, max_depth)
            })
            .collect()
    } else {
        Vec::new()
    };

    DepTreeNode {
        id: id.to_string(),
        label: to_label(id),
        children,
    }
}
