//! Error types for deptrace operations.
//!
//! Every variant here is fatal to the invocation. "No path found" is a
//! normal outcome and is not represented as an error.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for deptrace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for deptrace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The extractor executable could not be found on `PATH`.
    #[error("{command} not found\n\nThe dependency graph is produced by '{command}'. Install it (npm install -g madge) or pass a saved graph with --graph.")]
    ExtractorNotFound {
        /// The command that was not found.
        command: String,
    },

    /// The extractor process could not be started.
    #[error("failed to spawn extractor '{command}': {source}")]
    ExtractorSpawn {
        /// The command that failed to spawn.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The extractor ran but exited unsuccessfully.
    #[error("extractor '{command}' exited with {status}: {stderr}")]
    ExtractorFailed {
        /// The command that failed.
        command: String,
        /// Exit status reported by the process.
        status: ExitStatus,
        /// Trimmed standard error output of the process.
        stderr: String,
    },

    /// The dependency graph snapshot is not a JSON object of string arrays.
    #[error("malformed dependency graph: {0}")]
    MalformedGraph(#[source] serde_json::Error),

    /// The start component could not be located in the graph.
    #[error("Entry file not found in dependency graph")]
    EntryNotFound {
        /// The start argument that failed to resolve.
        start: String,
    },

    /// Invalid configuration file or values.
    #[error("configuration error: {0}")]
    Config(String),

    /// A configuration file exists but could not be parsed.
    #[error("invalid configuration file {}: {source}", path.display())]
    ConfigFile {
        /// Path to the offending file.
        path: PathBuf,
        /// The YAML parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the error came from producing the dependency graph.
    #[must_use]
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Self::ExtractorNotFound { .. }
                | Self::ExtractorSpawn { .. }
                | Self::ExtractorFailed { .. }
                | Self::MalformedGraph(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_not_found_message_is_plain() {
        let error = Error::EntryNotFound {
            start: "src/App.jsx".to_string(),
        };

        assert_eq!(error.to_string(), "Entry file not found in dependency graph");
        assert!(!error.is_extraction_failure());
    }

    #[test]
    fn malformed_graph_is_extraction_failure() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::MalformedGraph(source);

        assert!(error.is_extraction_failure());
        assert!(error.to_string().starts_with("malformed dependency graph"));
    }

    #[test]
    fn extractor_not_found_mentions_command() {
        let error = Error::ExtractorNotFound {
            command: "madge".to_string(),
        };

        assert!(error.is_extraction_failure());
        assert!(error.to_string().contains("madge not found"));
    }
}
