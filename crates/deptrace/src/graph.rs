//! Module dependency graph built from an extractor snapshot.
//!
//! The snapshot is a JSON object mapping each module path to the ordered list
//! of module paths it imports:
//!
//! ```json
//! {
//!   "components/app.jsx": ["components/header.jsx", "components/footer.jsx"],
//!   "components/header.jsx": [],
//!   "components/footer.jsx": []
//! }
//! ```
//!
//! Both the key order and the neighbor order are significant: key order
//! decides which module wins entry resolution, neighbor order decides output
//! order. The graph is read-only once loaded.

use std::collections::HashMap;
use std::io::Read;

use petgraph::graph::{DiGraph, NodeIndex};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A directed module dependency graph with ordered adjacency lists.
///
/// Edges point from importer to imported module. Modules that only appear as
/// imports (never as keys) are still nodes, with no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    /// Number of nodes that were keys of the snapshot. These occupy indices
    /// `0..declared` because keys are inserted before any edge.
    declared: usize,
}

impl DependencyGraph {
    /// Build a graph from `(module, imports)` entries in snapshot order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let entries: Vec<(String, Vec<String>)> = entries.into_iter().collect();
        let mut this = Self::default();

        for (id, _) in &entries {
            this.intern(id);
        }
        this.declared = this.graph.node_count();

        for (id, imports) in entries {
            let from = this.node_map[&id];
            for import in imports {
                let to = this.intern(&import);
                this.graph.add_edge(from, to, ());
            }
        }

        this
    }

    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGraph`] if the input is not a JSON object
    /// whose values are arrays of strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_str(json).map_err(Error::MalformedGraph)?;
        Self::from_json_object(object)
    }

    /// Parse a snapshot from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedGraph`] for invalid input, including read
    /// failures surfaced by the JSON parser.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_reader(reader).map_err(Error::MalformedGraph)?;
        Self::from_json_object(object)
    }

    fn from_json_object(object: Map<String, Value>) -> Result<Self> {
        let entries = object
            .into_iter()
            .map(|(id, imports)| {
                serde_json::from_value::<Vec<String>>(imports)
                    .map(|imports| (id, imports))
                    .map_err(Error::MalformedGraph)
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = Self::from_entries(entries);
        tracing::debug!(
            modules = graph.node_count(),
            imports = graph.edge_count(),
            "Loaded dependency graph"
        );
        Ok(graph)
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }
        let index = self.graph.add_node(id.to_string());
        self.node_map.insert(id.to_string(), index);
        index
    }

    /// Snapshot keys in their original order.
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .take(self.declared)
            .map(|index| self.graph[index].as_str())
    }

    /// Imports of `id` in snapshot order. Unknown modules have none.
    #[must_use]
    pub fn imports_of(&self, id: &str) -> Vec<&str> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };
        // petgraph lists neighbors most recently added first.
        let mut imports: Vec<&str> = self
            .graph
            .neighbors(index)
            .map(|neighbor| self.graph[neighbor].as_str())
            .collect();
        imports.reverse();
        imports
    }

    /// Number of distinct modules, including import-only modules.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of import edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the snapshot had no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
