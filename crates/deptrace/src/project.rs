//! Project root discovery.

use std::path::{Path, PathBuf};

/// File that marks the root of a JavaScript project.
pub const PROJECT_MARKER: &str = "package.json";

/// Maximum directory depth to traverse when searching for the project root.
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Find the project root for a component file.
///
/// Starts from the file's directory and walks up until a directory containing
/// `package.json` is found. The filesystem root itself is not considered.
/// Falls back to the file's own directory when no marker is found within
/// [`MAX_TRAVERSAL_DEPTH`] levels.
#[must_use]
pub fn find_project_root(start_file: &Path) -> PathBuf {
    find_project_root_within(start_file, MAX_TRAVERSAL_DEPTH)
}

/// [`find_project_root`] looking at most `max_depth` levels above the file's
/// directory.
#[must_use]
pub fn find_project_root_within(start_file: &Path, max_depth: usize) -> PathBuf {
    let file_dir = start_file.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut current = file_dir.clone();
    let mut depth = 0;

    while current.parent().is_some() && depth <= max_depth {
        if current.join(PROJECT_MARKER).exists() {
            tracing::debug!(root = %current.display(), "Found project root");
            return current;
        }
        depth += 1;
        if !current.pop() {
            break;
        }
    }

    tracing::debug!(
        fallback = %file_dir.display(),
        "No {PROJECT_MARKER} found, using the component's directory"
    );
    file_dir
}
