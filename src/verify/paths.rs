//! Locate the tutorial repository root on disk.

use std::path::{Path, PathBuf};

use scriptcheck_core::RepoLayout;
use scriptcheck_core::lang::languages::LANGUAGES;

/// Whether `dir` looks like the root of a tutorial repository.
///
/// A root either holds the runner script, or holds an outputs directory next to at least one
/// language directory.
pub fn looks_like_root(dir: &Path) -> bool {
    let layout = RepoLayout::new(dir);
    if layout.runner_script().is_file() {
        return true;
    }
    layout.outputs_dir().is_dir() && LANGUAGES.iter().any(|l| layout.language_dir(l.id).is_dir())
}

/// Walk upward from `start` to the nearest directory that looks like a repository root.
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    let found = start.ancestors().find(|dir| looks_like_root(dir)).map(Path::to_path_buf);
    tracing::debug!(start = %start.display(), root = ?found, "repository root discovery");
    found
}
