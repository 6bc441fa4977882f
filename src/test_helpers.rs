//! Shared test utilities.
//!
//! Fixture writers for throwaway section directories plus builders for
//! in-memory [`AudioFile`]s and [`Section`]s that never touch the disk.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_audio(tmp.path(), "a.mp3", 2048);
//! let files = scan_audio_files(tmp.path(), false);
//! assert_eq!(file_names(&files), vec!["a.mp3"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::split_extension;
use crate::types::{AudioFile, Section, TranscriptMap};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a file of `size` bytes named `name` under `dir`, creating `dir`.
pub fn write_audio(dir: &Path, name: &str, size: usize) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, vec![0u8; size]).unwrap();
    path
}

// =========================================================================
// In-memory builders
// =========================================================================

/// An audio file at an arbitrary absolute path. Nothing is written.
pub fn audio_file_at(path: &str, size_bytes: u64) -> AudioFile {
    let path = PathBuf::from(path);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = split_extension(&file_name).1.to_string();
    AudioFile {
        path,
        file_name,
        extension,
        size_bytes,
    }
}

/// An audio file under `/audio`.
pub fn audio_file(name: &str, size_bytes: u64) -> AudioFile {
    audio_file_at(&format!("/audio/{name}"), size_bytes)
}

/// A section with no transcripts.
pub fn section(title: &str, directory: &str, files: Vec<AudioFile>) -> Section {
    Section {
        title: title.to_string(),
        directory: PathBuf::from(directory),
        files,
        transcripts: TranscriptMap::new(),
    }
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find a file by name, panicking with the names present on a miss.
pub fn find_file<'a>(files: &'a [AudioFile], name: &str) -> &'a AudioFile {
    files
        .iter()
        .find(|f| f.file_name == name)
        .unwrap_or_else(|| panic!("no file named {name:?} in {:?}", file_names(files)))
}

/// File names in list order.
pub fn file_names(files: &[AudioFile]) -> Vec<&str> {
    files.iter().map(|f| f.file_name.as_str()).collect()
}
