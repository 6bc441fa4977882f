//! Shared types passed between the scan, sample and generate steps.
//!
//! A [`Section`] is built once per input directory and never mutated after
//! its files and transcripts are populated.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Normalized relative path → transcript text.
pub type TranscriptMap = BTreeMap<String, String>;

/// A discovered audio file.
///
/// Identity is the resolved absolute path. The same file can show up in two
/// sections when their directories overlap; nothing deduplicates across sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// Resolved absolute path (symlinks followed where possible).
    pub path: PathBuf,
    /// File name as found on disk, extension included.
    pub file_name: String,
    /// Extension with its leading dot (`.mp3`), original case. Empty if none.
    pub extension: String,
    pub size_bytes: u64,
}

/// Where a section comes from, before anything is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSource {
    pub title: String,
    /// Absolute directory path.
    pub directory: PathBuf,
}

/// One collapsible group of audio files on the page.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub directory: PathBuf,
    /// Sorted case-insensitively by file name.
    pub files: Vec<AudioFile>,
    pub transcripts: TranscriptMap,
}

impl Section {
    /// Transcript for a file, keyed by its path relative to the section directory.
    ///
    /// Empty transcripts count as missing.
    pub fn transcript_for(&self, relative: &str) -> Option<&str> {
        self.transcripts
            .get(relative)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// Sort files by name, case-insensitive, ascending. Stable for ties.
pub fn sort_by_name(files: &mut [AudioFile]) {
    files.sort_by_cached_key(|f| f.file_name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> AudioFile {
        AudioFile {
            path: PathBuf::from("/audio").join(name),
            file_name: name.to_string(),
            extension: ".mp3".to_string(),
            size_bytes: 0,
        }
    }

    #[test]
    fn sort_ignores_case() {
        let mut files = vec![file("beta.mp3"), file("Alpha.mp3"), file("alpha2.mp3")];
        sort_by_name(&mut files);
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha.mp3", "alpha2.mp3", "beta.mp3"]);
    }

    #[test]
    fn empty_transcript_is_missing() {
        let mut transcripts = TranscriptMap::new();
        transcripts.insert("a.mp3".to_string(), String::new());
        transcripts.insert("b.mp3".to_string(), "hello".to_string());
        let section = Section {
            title: "T".to_string(),
            directory: PathBuf::from("/audio"),
            files: vec![],
            transcripts,
        };
        assert_eq!(section.transcript_for("a.mp3"), None);
        assert_eq!(section.transcript_for("b.mp3"), Some("hello"));
        assert_eq!(section.transcript_for("c.mp3"), None);
    }
}
