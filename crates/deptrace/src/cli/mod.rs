//! CLI command implementations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use deptrace::config::{Config, Overrides};
use deptrace::graph::DependencyGraph;
use deptrace::output::OutputMode;
use deptrace::{extractor, project, resolver, Error, Result};

pub mod paths;
pub mod tree;

/// Parsed command-line request.
pub struct Invocation {
    /// Start component as given on the command line.
    pub start: PathBuf,
    /// Target component, switching from tree to path mode.
    pub target: Option<String>,
    /// Saved graph snapshot to use instead of running the extractor.
    pub graph: Option<PathBuf>,
    /// Output format.
    pub mode: OutputMode,
    /// Command-line configuration overrides.
    pub overrides: Overrides,
}

/// Run one invocation: load the graph, resolve the start, print the report.
pub fn run(invocation: &Invocation) -> Result<()> {
    let start_file = std::path::absolute(&invocation.start)?;
    let project_root = project::find_project_root(&start_file);
    let config = Config::load(&project_root, invocation.overrides.clone())?;

    let graph = load_graph(invocation.graph.as_deref(), &config, &start_file, &project_root)?;
    if graph.is_empty() {
        tracing::warn!("Dependency graph is empty");
    }

    let start_arg = invocation.start.to_string_lossy();
    let start = resolver::resolve_entry(&graph, &start_arg).ok_or_else(|| Error::EntryNotFound {
        start: start_arg.to_string(),
    })?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match invocation.target.as_deref() {
        Some(target) => paths::run(&mut handle, &graph, start, target, &config, invocation.mode)?,
        None => tree::run(&mut handle, &graph, start, &config, invocation.mode)?,
    }
    handle.flush()?;
    Ok(())
}

fn load_graph(
    snapshot: Option<&Path>,
    config: &Config,
    start_file: &Path,
    project_root: &Path,
) -> Result<DependencyGraph> {
    match snapshot {
        Some(path) => extractor::load_snapshot(path),
        None => extractor::extract(&config.extractor, start_file, project_root),
    }
}
