//! Full dependency tree of the start component.

use std::io::Write;

use deptrace::config::Config;
use deptrace::graph::DependencyGraph;
use deptrace::output::{write_tree_report, OutputMode};
use deptrace::tree::build_tree;
use deptrace::Result;

/// Build and print the tree beneath `start`.
pub fn run<W: Write>(
    w: &mut W,
    graph: &DependencyGraph,
    start: &str,
    config: &Config,
    mode: OutputMode,
) -> Result<()> {
    let tree = build_tree(graph, start, &config.filter, config.max_depth);
    tracing::info!(
        start,
        modules = tree.node_count(),
        depth = tree.depth(),
        max_depth = config.max_depth,
        "Built dependency tree"
    );
    write_tree_report(w, &tree, mode)?;
    Ok(())
}
