//! deptrace - component dependency trees and dependency paths.
//!
//! Works on the module graph produced by an external dependency extractor
//! (`madge` by default) and answers two questions about a start component:
//!
//! - what does it pull in, down to a depth limit ([`tree::build_tree`])
//! - through which import chains does it reach a target component
//!   ([`paths::find_paths`])
//!
//! # Example
//!
//! ```
//! use deptrace::filter::NodeFilter;
//! use deptrace::graph::DependencyGraph;
//! use deptrace::output::{format_paths, format_tree};
//! use deptrace::{paths, resolver, tree};
//!
//! let graph = DependencyGraph::from_json_str(
//!     r#"{"app.jsx": ["nav_bar.jsx"], "nav_bar.jsx": ["logo.jsx"], "logo.jsx": []}"#,
//! )?;
//! let start = resolver::resolve_entry(&graph, "src/app.jsx").expect("entry exists");
//! let filter = NodeFilter::default();
//!
//! let tree = tree::build_tree(&graph, start, &filter, tree::DEFAULT_MAX_DEPTH);
//! assert_eq!(format_tree(&tree), "App\n  NavBar\n    Logo\n");
//!
//! let search = paths::find_paths(&graph, start, "logo", &filter, paths::DEFAULT_MAX_PATH_LENGTH);
//! assert_eq!(format_paths(&search.paths), "App\n  NavBar\n    Logo\n");
//! # Ok::<(), deptrace::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod graph;
pub mod output;
pub mod paths;
pub mod project;
pub mod resolver;
pub mod tree;

pub use error::{Error, Result};
