//! Enumeration of every simple import path from one module to another.

use std::collections::HashSet;

use crate::filter::NodeFilter;
use crate::graph::DependencyGraph;
use crate::resolver::{matches_target, to_label};

/// Longest path, in modules, explored when none is configured.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 64;

/// An import chain from the start module to a target module, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath {
    modules: Vec<String>,
}

impl DependencyPath {
    /// Module ids from start to target.
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Display labels from start to target.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.modules.iter().map(|id| to_label(id)).collect()
    }

    /// Number of modules on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Paths always contain at least the start module.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The module the path ends at.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.modules.last().map(String::as_str)
    }
}

/// Outcome of a path search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSearch {
    /// Paths found, in depth-first import order.
    pub paths: Vec<DependencyPath>,
    /// `true` if at least one branch was abandoned at the length ceiling.
    pub truncated: bool,
}

impl PathSearch {
    /// Returns `true` if no path reached the target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Find every simple path from `start` to a module named by `target`.
///
/// The search is depth-first in import order and keeps every route, not only
/// the shortest. A branch ends at the first module matching `target`; paths
/// never continue through a match. Each branch carries its own copy of the
/// modules on its path, which keeps every result free of repeats and
/// guarantees termination on cyclic graphs. Branches longer than
/// `max_path_length` modules are abandoned and reported through
/// [`PathSearch::truncated`].
#[must_use]
pub fn find_paths(
    graph: &DependencyGraph,
    start: &str,
    target: &str,
    filter: &NodeFilter,
    max_path_length: usize,
) -> PathSearch {
    let mut search = PathSearch::default();
    let mut walker = Walker {
        graph,
        target,
        filter,
        max_path_length,
        search: &mut search,
    };
    walker.walk(start, Vec::new(), HashSet::new());

    tracing::debug!(
        start,
        target,
        found = search.paths.len(),
        truncated = search.truncated,
        "Path search finished"
    );
    search
}

struct Walker<'a, 's> {
    graph: &'a DependencyGraph,
    target: &'a str,
    filter: &'a NodeFilter,
    max_path_length: usize,
    search: &'s mut PathSearch,
}

impl<'a> Walker<'a, '_> {
    fn walk(&mut self, id: &'a str, mut path: Vec<&'a str>, mut visited: HashSet<&'a str>) {
        if !visited.insert(id) {
            return;
        }
        path.push(id);

        if matches_target(id, self.target) {
            self.search.paths.push(DependencyPath {
                modules: path.iter().map(|m| (*m).to_string()).collect(),
            });
            return;
        }

        let imports: Vec<&'a str> = self
            .graph
            .imports_of(id)
            .into_iter()
            .filter(|import| self.filter.accepts(import) && !visited.contains(import))
            .collect();

        if imports.is_empty() {
            return;
        }
        if path.len() >= self.max_path_length {
            self.search.truncated = true;
            return;
        }

        for import in imports {
            self.walk(import, path.clone(), visited.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        DependencyGraph::from_entries(entries.iter().map(|(id, imports)| {
            (
                (*id).to_string(),
                imports.iter().map(|s| (*s).to_string()).collect(),
            )
        }))
    }

    fn diamond() -> DependencyGraph {
        graph(&[
            ("a.jsx", &["b.jsx", "c.jsx"]),
            ("b.jsx", &["d.jsx"]),
            ("c.jsx", &["d.jsx"]),
            ("d.jsx", &[]),
        ])
    }

    fn search(graph: &DependencyGraph, start: &str, target: &str) -> PathSearch {
        find_paths(
            graph,
            start,
            target,
            &NodeFilter::default(),
            DEFAULT_MAX_PATH_LENGTH,
        )
    }

    #[test]
    fn diamond_yields_both_routes_in_import_order() {
        let result = search(&diamond(), "a.jsx", "d");

        let modules: Vec<Vec<String>> = result
            .paths
            .iter()
            .map(|path| path.modules().to_vec())
            .collect();
        assert_eq!(
            modules,
            vec![
                vec!["a.jsx", "b.jsx", "d.jsx"],
                vec!["a.jsx", "c.jsx", "d.jsx"],
            ]
        );
        assert!(!result.truncated);
    }

    #[test]
    fn target_equal_to_start_is_single_module_path() {
        let result = search(&diamond(), "a.jsx", "src/a.jsx");

        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].modules(), ["a.jsx"]);
    }

    #[test]
    fn cycle_without_target_yields_nothing() {
        let graph = graph(&[("a.jsx", &["b.jsx"]), ("b.jsx", &["a.jsx"])]);

        let result = search(&graph, "a.jsx", "Z");

        assert!(result.is_empty());
        assert!(!result.truncated);
    }

    #[test]
    fn search_stops_at_first_match_on_a_branch() {
        let graph = graph(&[
            ("a.jsx", &["x.jsx"]),
            ("x.jsx", &["b.jsx"]),
            ("b.jsx", &["x.jsx"]),
        ]);

        let result = search(&graph, "a.jsx", "x");

        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].labels(), vec!["A", "X"]);
    }

    #[test]
    fn same_basename_in_different_directories_are_separate_targets() {
        let graph = graph(&[
            ("app.jsx", &["admin/card.jsx", "shop/card.jsx"]),
            ("admin/card.jsx", &[]),
            ("shop/card.jsx", &[]),
        ]);

        let result = search(&graph, "app.jsx", "card");

        let targets: Vec<_> = result.paths.iter().filter_map(DependencyPath::target).collect();
        assert_eq!(targets, vec!["admin/card.jsx", "shop/card.jsx"]);
    }

    #[test]
    fn filtered_modules_are_not_hops() {
        let graph = graph(&[
            ("a.jsx", &["helpers.js"]),
            ("helpers.js", &["d.jsx"]),
            ("d.jsx", &[]),
        ]);

        assert!(search(&graph, "a.jsx", "d").is_empty());
    }

    #[test]
    fn shared_prefix_does_not_terminate_path() {
        let graph = graph(&[
            ("a.jsx", &["header_menu.jsx"]),
            ("header_menu.jsx", &["header.jsx"]),
            ("header.jsx", &[]),
        ]);

        let result = search(&graph, "a.jsx", "header.jsx");

        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].labels(), vec!["A", "HeaderMenu", "Header"]);
    }

    #[test]
    fn length_ceiling_abandons_long_branches() {
        let graph = graph(&[
            ("a.jsx", &["b.jsx", "d.jsx"]),
            ("b.jsx", &["c.jsx"]),
            ("c.jsx", &["d.jsx"]),
            ("d.jsx", &[]),
        ]);

        let result = find_paths(&graph, "a.jsx", "d", &NodeFilter::default(), 2);

        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].labels(), vec!["A", "D"]);
        assert!(result.truncated);
    }

    #[test]
    fn paths_are_simple_in_dense_cyclic_graph() {
        let graph = graph(&[
            ("a.jsx", &["b.jsx", "c.jsx"]),
            ("b.jsx", &["a.jsx", "c.jsx", "t.jsx"]),
            ("c.jsx", &["b.jsx", "a.jsx", "t.jsx"]),
            ("t.jsx", &["a.jsx"]),
        ]);

        let result = search(&graph, "a.jsx", "t");

        assert_eq!(result.paths.len(), 4);
        for path in &result.paths {
            let unique: HashSet<_> = path.modules().iter().collect();
            assert_eq!(unique.len(), path.len());
            assert_eq!(path.target(), Some("t.jsx"));
        }
    }
}
