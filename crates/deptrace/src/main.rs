//! deptrace CLI - component dependency trees from the command line.
//!
//! Prints the dependency tree beneath a component, or every import path from
//! that component to a target component.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use deptrace::Error;
use deptrace::config::Overrides;
use deptrace::output::OutputMode;
use tracing_subscriber::EnvFilter;

mod cli;

/// deptrace: component dependency trees and dependency paths.
#[derive(Parser)]
#[command(name = "deptrace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Component to start from (e.g. app/javascript/components/app.jsx)
    start: PathBuf,

    /// Component to find dependency paths to; omit to print the full tree
    target: Option<String>,

    /// Maximum tree depth below the start component [default: 3]
    #[arg(short, long)]
    depth: Option<usize>,

    /// Module extension to follow (repeatable) [default: jsx]
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Longest dependency path to explore, in modules [default: 64]
    #[arg(long, value_name = "N")]
    max_path_length: Option<usize>,

    /// Read the dependency graph from a saved extractor JSON file ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Extractor command [default: madge]
    #[arg(long, value_name = "CMD")]
    extractor: Option<String>,

    /// Module resolution config passed to the extractor
    #[arg(long, value_name = "FILE")]
    webpack_config: Option<PathBuf>,

    /// Regex of module paths the extractor should exclude
    #[arg(long, value_name = "REGEX")]
    exclude: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let invocation = cli::Invocation {
        start: cli.start,
        target: cli.target,
        graph: cli.graph,
        mode: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        overrides: Overrides {
            max_depth: cli.depth,
            extensions: cli.extensions,
            max_path_length: cli.max_path_length,
            extractor_command: cli.extractor,
            webpack_config: cli.webpack_config,
            exclude: cli.exclude,
        },
    };

    match cli::run(&invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(e: &Error) {
    if let Error::EntryNotFound { start } = e {
        tracing::debug!(start = %start, "Start component did not resolve");
        eprintln!("{e}");
        return;
    }

    eprintln!("{}: {e}", "error".red().bold());
    // Show cause chain for nested errors
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    if e.is_extraction_failure() {
        eprintln!(
            "  {}: rerun with -vv to see the extractor command line",
            "hint".cyan()
        );
    }
}
