//! Lexical relative paths between absolute locations.
//!
//! Links on the page point from the output file's directory to each audio
//! file, so both sides are resolved absolute paths and no filesystem access
//! is needed here.

use std::path::{Component, Path, PathBuf};

/// Path of `target` relative to the directory `base`.
///
/// Both paths are expected to be absolute. Identical paths give `.`.
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for part in &target[common..] {
        rel.push(part.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Render a relative path with forward slashes, for use in URLs and keys.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
