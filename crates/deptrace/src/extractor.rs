//! Obtaining the dependency graph: running the extractor or reading a saved
//! snapshot.
//!
//! The extractor is invoked as
//!
//! ```text
//! <command> [--webpack-config <file>] --json --exclude <regex> <start file>
//! ```
//!
//! with `PROJECT_ROOT` set to the discovered project root, so a shared
//! webpack config can resolve its aliases against the project being analyzed.
//! Failures are never retried.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;

/// Extractor invoked when none is configured.
pub const DEFAULT_EXTRACTOR_COMMAND: &str = "madge";

/// Modules hidden from the extractor when no exclusion is configured:
/// helper directories and stylesheet/data files.
pub const DEFAULT_EXCLUDE: &str = r"^(.*/(utils|models|hooks|static|css)/|.*\.(css|json))";

/// Environment variable carrying the project root to the extractor.
pub const PROJECT_ROOT_ENV: &str = "PROJECT_ROOT";

/// Snapshot path meaning "read standard input".
pub const STDIN_SNAPSHOT: &str = "-";

/// How the external extractor is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Program and leading arguments, split on whitespace.
    pub command: String,
    /// Module resolution config (alias table) passed to the extractor.
    pub webpack_config: Option<PathBuf>,
    /// Regex of module paths the extractor should leave out.
    pub exclude: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_EXTRACTOR_COMMAND.to_string(),
            webpack_config: None,
            exclude: DEFAULT_EXCLUDE.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Program name and full argument list for analyzing `start_file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the command is blank.
    pub fn command_line(&self, start_file: &Path) -> Result<(String, Vec<OsString>)> {
        let mut words = self.command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::Config("extractor command cannot be empty".to_string()))?
            .to_string();

        let mut args: Vec<OsString> = words.map(OsString::from).collect();
        if let Some(webpack_config) = &self.webpack_config {
            args.push("--webpack-config".into());
            args.push(webpack_config.into());
        }
        args.push("--json".into());
        args.push("--exclude".into());
        args.push(self.exclude.as_str().into());
        args.push(start_file.into());

        Ok((program, args))
    }
}

/// Run the extractor on `start_file` and parse its JSON output.
///
/// # Errors
///
/// Returns an extraction error if the process cannot be started, exits
/// unsuccessfully, or prints something other than a dependency graph.
pub fn extract(
    config: &ExtractorConfig,
    start_file: &Path,
    project_root: &Path,
) -> Result<DependencyGraph> {
    let (program, args) = config.command_line(start_file)?;
    tracing::debug!(
        command = %program,
        ?args,
        project_root = %project_root.display(),
        "Running dependency extractor"
    );

    let output = Command::new(&program)
        .args(&args)
        .env(PROJECT_ROOT_ENV, project_root)
        .output()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ExtractorNotFound {
                    command: program.clone(),
                }
            } else {
                Error::ExtractorSpawn {
                    command: program.clone(),
                    source: e,
                }
            }
        })?;

    if !output.status.success() {
        return Err(Error::ExtractorFailed {
            command: program,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    DependencyGraph::from_reader(output.stdout.as_slice())
}

/// Read a saved extractor snapshot from `path`, or from stdin for `-`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and
/// [`Error::MalformedGraph`] if its content is not a dependency graph.
pub fn load_snapshot(path: &Path) -> Result<DependencyGraph> {
    if path.as_os_str() == STDIN_SNAPSHOT {
        tracing::debug!("Reading dependency graph from stdin");
        return DependencyGraph::from_reader(io::stdin().lock());
    }

    tracing::debug!(path = %path.display(), "Reading dependency graph snapshot");
    let file = File::open(path)?;
    DependencyGraph::from_reader(BufReader::new(file))
}
