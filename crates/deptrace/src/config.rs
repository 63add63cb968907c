//! Configuration management for deptrace.
//!
//! Settings are layered: built-in defaults, then `.deptrace.yaml` in the
//! project root, then command-line overrides.
//!
//! ```yaml
//! max-depth: 4
//! extensions: [jsx, tsx]
//! max-path-length: 32
//! extractor:
//!   command: npx madge
//!   webpack-config: config/webpack.deptrace.js
//!   exclude: '^(.*/(utils|hooks)/|.*\.css)'
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::extractor::ExtractorConfig;
use crate::filter::NodeFilter;
use crate::paths::DEFAULT_MAX_PATH_LENGTH;
use crate::tree::DEFAULT_MAX_DEPTH;

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".deptrace.yaml";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Tree depth limit.
    pub max_depth: Option<usize>,
    /// Accepted module extensions.
    pub extensions: Option<Vec<String>>,
    /// Path search length ceiling.
    pub max_path_length: Option<usize>,
    /// Extractor invocation settings.
    #[serde(default)]
    pub extractor: ExtractorSection,
}

/// `extractor:` section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExtractorSection {
    /// Extractor command line, split on whitespace.
    pub command: Option<String>,
    /// Module resolution config handed to the extractor.
    pub webpack_config: Option<PathBuf>,
    /// Exclusion regex handed to the extractor.
    pub exclude: Option<String>,
}

impl ConfigFile {
    /// Load `.deptrace.yaml` from `project_root`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
            .map(Some)
            .map_err(|source| Error::ConfigFile { path, source })
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--depth`
    pub max_depth: Option<usize>,
    /// `--ext`, repeatable.
    pub extensions: Vec<String>,
    /// `--max-path-length`
    pub max_path_length: Option<usize>,
    /// `--extractor`
    pub extractor_command: Option<String>,
    /// `--webpack-config`
    pub webpack_config: Option<PathBuf>,
    /// `--exclude`
    pub exclude: Option<String>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tree depth limit; the start module is depth 0.
    pub max_depth: usize,
    /// Node-type predicate for imports.
    pub filter: NodeFilter,
    /// Path search length ceiling, in modules.
    pub max_path_length: usize,
    /// Extractor invocation settings.
    pub extractor: ExtractorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            filter: NodeFilter::default(),
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the effective configuration for a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is invalid or the merged
    /// values fail validation.
    pub fn load(project_root: &Path, overrides: Overrides) -> Result<Self> {
        let file = ConfigFile::load(project_root)?;
        if file.is_some() {
            tracing::debug!(root = %project_root.display(), "Loaded {CONFIG_FILE_NAME}");
        }
        Self::resolve(project_root, file.unwrap_or_default(), overrides)
    }

    /// Merge defaults, file values and overrides, then validate.
    ///
    /// Relative `webpack-config` paths from the file resolve against
    /// `project_root`; relative paths from the command line are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no extensions remain, the path length
    /// ceiling is zero, or the extractor command is blank.
    pub fn resolve(project_root: &Path, file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(depth) = overrides.max_depth.or(file.max_depth) {
            config.max_depth = depth;
        }
        if let Some(length) = overrides.max_path_length.or(file.max_path_length) {
            config.max_path_length = length;
        }

        let extensions = if overrides.extensions.is_empty() {
            file.extensions
        } else {
            Some(overrides.extensions)
        };
        if let Some(extensions) = extensions {
            config.filter = NodeFilter::new(extensions);
        }

        if let Some(command) = overrides.extractor_command.or(file.extractor.command) {
            config.extractor.command = command;
        }
        if let Some(exclude) = overrides.exclude.or(file.extractor.exclude) {
            config.extractor.exclude = exclude;
        }
        config.extractor.webpack_config = overrides.webpack_config.or_else(|| {
            file.extractor
                .webpack_config
                .map(|path| project_root.join(path))
        });

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.filter.extensions().iter().all(String::is_empty) {
            return Err(Error::Config(
                "at least one module extension is required".to_string(),
            ));
        }
        if self.max_path_length == 0 {
            return Err(Error::Config(
                "max-path-length must be at least 1".to_string(),
            ));
        }
        if self.extractor.command.split_whitespace().next().is_none() {
            return Err(Error::Config("extractor command cannot be empty".to_string()));
        }
        Ok(())
    }
}
