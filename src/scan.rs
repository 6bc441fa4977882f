//! Filesystem scanning for audio files.
//!
//! Walks a section directory recursively and collects every regular file
//! whose extension is a known audio format:
//!
//! ```text
//! podcasts/
//! ├── transcripts.tsv          # ignored (not audio)
//! ├── Episode 10.MP3           # found (extension match is case-insensitive)
//! ├── episode-2.m4a            # found
//! └── 2023/
//!     ├── bonus.opus           # found (recursive)
//!     └── broken-link.mp3      # skipped (size unreadable)
//! ```
//!
//! ## Failure policy
//!
//! Scanning never fails. Directories that cannot be listed and files whose
//! size cannot be read (broken symlinks, permission errors) are logged at
//! `debug` level and left out of the result.
//!
//! ## Ordering
//!
//! The result is sorted by file name, case-insensitive. The walk itself visits
//! entries in file-name order so that ties come out the same on every run.

use crate::types::{AudioFile, sort_by_name};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Extensions recognized as audio, lowercase, without the leading dot.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "wav", "ogg", "opus", "flac", "aac", "webm"];

/// Collect all audio files under `root`, sorted by name.
///
/// With `follow_symlinks` set, symlinked directories are descended into.
/// Symlinked files are always included when their target is a readable file.
pub fn scan_audio_files(root: &Path, follow_symlinks: bool) -> Vec<AudioFile> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if !is_audio(path) {
            continue;
        }

        // Follows symlinks, so a link to a directory or a dangling link drops out here.
        let metadata = match fs::metadata(path) {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping file with unreadable size");
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        files.push(AudioFile {
            path: resolved,
            file_name,
            extension,
            size_bytes: metadata.len(),
        });
    }

    sort_by_name(&mut files);
    debug!(root = %root.display(), count = files.len(), "scanned section");
    files
}

/// Whether a path carries one of the [`AUDIO_EXTENSIONS`], ignoring case.
pub fn is_audio(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    AUDIO_EXTENSIONS.contains(&ext.as_str())
}
