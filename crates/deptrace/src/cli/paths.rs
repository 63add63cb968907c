//! Dependency paths from the start component to a target component.

use std::io::Write;

use colored::Colorize;
use deptrace::config::Config;
use deptrace::graph::DependencyGraph;
use deptrace::output::{write_path_report, OutputMode};
use deptrace::paths::find_paths;
use deptrace::Result;

/// Find and print every path from `start` to `target`.
///
/// Finding no path is a successful outcome.
pub fn run<W: Write>(
    w: &mut W,
    graph: &DependencyGraph,
    start: &str,
    target: &str,
    config: &Config,
    mode: OutputMode,
) -> Result<()> {
    let search = find_paths(graph, start, target, &config.filter, config.max_path_length);
    tracing::info!(start, target, paths = search.paths.len(), "Searched dependency paths");

    write_path_report(w, start, target, &search.paths, mode)?;

    if search.truncated {
        eprintln!(
            "{}: paths longer than {} modules were not explored (raise --max-path-length)",
            "warning".yellow().bold(),
            config.max_path_length
        );
    }
    Ok(())
}
