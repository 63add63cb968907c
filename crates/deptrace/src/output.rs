//! Output formatting for trees and path searches.
//!
//! Text output is plain and uncolored so that it stays byte-stable for the
//! same graph snapshot. JSON output is provided for programmatic use.

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::paths::DependencyPath;
use crate::resolver::to_label;
use crate::tree::DepTreeNode;

/// Text emitted by [`format_paths`] when there is nothing to show.
pub const NO_PATHS_FOUND: &str = "No paths found";

/// Heading printed above text reports.
pub const REPORT_HEADING: &str = "Component Dependency Tree:";

const INDENT: &str = "  ";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Indented, human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render a tree as one line per module, indented two spaces per level.
///
/// ```text
/// App
///   Header
///     NavBar
///   Footer
/// ```
#[must_use]
pub fn format_tree(root: &DepTreeNode) -> String {
    let mut out = String::new();
    push_tree_lines(&mut out, root, 0);
    out
}

fn push_tree_lines(out: &mut String, node: &DepTreeNode, depth: usize) {
    push_line(out, depth, &node.label);
    for child in &node.children {
        push_tree_lines(out, child, depth + 1);
    }
}

fn push_line(out: &mut String, depth: usize, label: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(label);
    out.push('\n');
}

/// Render path search results.
///
/// A single path is an indented list with no heading. Several paths are each
/// headed by `Path N:` and separated by a blank line. No paths at all render
/// as [`NO_PATHS_FOUND`].
#[must_use]
pub fn format_paths(paths: &[DependencyPath]) -> String {
    if paths.is_empty() {
        return NO_PATHS_FOUND.to_string();
    }

    let mut out = String::new();
    for (index, path) in paths.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if paths.len() > 1 {
            out.push_str(&format!("Path {}:\n", index + 1));
        }
        for (depth, id) in path.modules().iter().enumerate() {
            push_line(&mut out, depth, &to_label(id));
        }
    }
    out
}

/// Convert a tree to nested JSON objects.
#[must_use]
pub fn tree_to_json(root: &DepTreeNode) -> Value {
    json!(root)
}

/// Convert path search results to a JSON array of `{id, label}` arrays.
#[must_use]
pub fn paths_to_json(paths: &[DependencyPath]) -> Value {
    Value::Array(
        paths
            .iter()
            .map(|path| {
                Value::Array(
                    path.modules()
                        .iter()
                        .map(|id| json!({ "id": id, "label": to_label(id) }))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Write the full tree report for `root`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tree_report<W: Write>(
    w: &mut W,
    root: &DepTreeNode,
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            write_heading(w)?;
            writeln!(w, "{}", format_tree(root))
        }
        OutputMode::Json => write_json(w, &tree_to_json(root)),
    }
}

/// Write the path report from `start` to `target`.
///
/// An empty result is reported as a message naming both ends, not as an
/// error.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_path_report<W: Write>(
    w: &mut W,
    start: &str,
    target: &str,
    paths: &[DependencyPath],
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            write_heading(w)?;
            if paths.is_empty() {
                writeln!(
                    w,
                    "No path found from {} to {}",
                    to_label(start),
                    to_label(target)
                )
            } else {
                writeln!(w, "{}", format_paths(paths))
            }
        }
        OutputMode::Json => write_json(w, &paths_to_json(paths)),
    }
}

fn write_heading<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{REPORT_HEADING}")?;
    writeln!(w)
}

fn write_json<W: Write>(w: &mut W, value: &Value) -> io::Result<()> {
    let output = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(w, "{output}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::NodeFilter;
    use crate::graph::DependencyGraph;
    use crate::paths::find_paths;
    use crate::tree::build_tree;

    fn diamond() -> DependencyGraph {
        DependencyGraph::from_json_str(
            r#"{
                "src/app.jsx": ["src/b_side.jsx", "src/c_side.jsx"],
                "src/b_side.jsx": ["src/shared.jsx"],
                "src/c_side.jsx": ["src/shared.jsx"],
                "src/shared.jsx": []
            }"#,
        )
        .expect("valid snapshot")
    }

    fn paths_to(target: &str) -> Vec<DependencyPath> {
        find_paths(&diamond(), "src/app.jsx", target, &NodeFilter::default(), 64).paths
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("rendering should succeed");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn tree_lines_are_indented_by_depth() {
        let tree = build_tree(&diamond(), "src/app.jsx", &NodeFilter::default(), 3);

        assert_eq!(
            format_tree(&tree),
            "App\n  BSide\n    Shared\n  CSide\n    Shared\n"
        );
    }

    #[test]
    fn no_paths_renders_sentinel() {
        assert_eq!(format_paths(&[]), NO_PATHS_FOUND);
    }

    #[test]
    fn single_path_has_no_heading() {
        let paths = paths_to("b_side");

        assert_eq!(format_paths(&paths), "App\n  BSide\n");
    }

    #[test]
    fn multiple_paths_are_numbered_and_separated() {
        let paths = paths_to("shared");

        assert_eq!(
            format_paths(&paths),
            "Path 1:\nApp\n  BSide\n    Shared\n\nPath 2:\nApp\n  CSide\n    Shared\n"
        );
    }

    #[test]
    fn tree_report_has_heading() {
        let tree = build_tree(&diamond(), "src/c_side.jsx", &NodeFilter::default(), 3);

        let output = render(|w| write_tree_report(w, &tree, OutputMode::Text));

        assert_eq!(output, "\nComponent Dependency Tree:\n\nCSide\n  Shared\n\n");
    }

    #[test]
    fn empty_path_report_names_both_ends() {
        let output = render(|w| {
            write_path_report(
                w,
                "src/app.jsx",
                "lib/missing_widget.jsx",
                &[],
                OutputMode::Text,
            )
        });

        assert!(
            output.ends_with("No path found from App to MissingWidget\n"),
            "got: {output}"
        );
    }

    #[test]
    fn tree_json_nests_dependencies() {
        let tree = build_tree(&diamond(), "src/app.jsx", &NodeFilter::default(), 3);

        let json = tree_to_json(&tree);

        assert_eq!(json["id"], "src/app.jsx");
        assert_eq!(json["label"], "App");
        let deps = json["dependencies"].as_array().expect("dependencies array");
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[1]["dependencies"][0]["label"], "Shared");
    }

    #[test]
    fn path_json_report_parses() {
        let paths = paths_to("shared");

        let output = render(|w| {
            write_path_report(w, "src/app.jsx", "shared", &paths, OutputMode::Json)
        });

        let value: Value = serde_json::from_str(&output).expect("valid JSON");
        let paths = value.as_array().expect("array of paths");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0][2]["id"], "src/shared.jsx");
        assert_eq!(paths[1][1]["label"], "CSide");
    }

    #[test]
    fn empty_path_json_is_empty_array() {
        let output = render(|w| write_path_report(w, "a.jsx", "z", &[], OutputMode::Json));
        assert_eq!(output.trim(), "[]");
    }
}
