//! Per-section transcript sidecar files.
//!
//! Each section directory may hold a tab-separated file (default
//! `transcripts.tsv`) mapping audio paths, relative to the section directory,
//! to transcript text:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! episode-01.mp3	Welcome to the show.
//! 2023/bonus.opus	Text may contain	more tabs; only the first one splits.
//! .\old\intro.mp3	Windows-style paths are normalized to old/intro.mp3
//! ```
//!
//! Lines may end in `\n`, `\r\n` or a bare `\r`.
//!
//! Loading is best-effort: a missing file gives an empty map, and a read
//! error part-way through keeps every line parsed before it. Duplicate keys
//! resolve to the last line.

use crate::types::TranscriptMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Load the transcript map for a section.
///
/// `tsv_name` is resolved against `section_dir`. `None` or an empty name
/// disables transcripts for the run.
pub fn load_transcripts(section_dir: &Path, tsv_name: Option<&str>) -> TranscriptMap {
    let Some(name) = tsv_name.filter(|n| !n.is_empty()) else {
        return TranscriptMap::new();
    };
    let tsv_path = section_dir.join(name);
    if !tsv_path.exists() {
        debug!(path = %tsv_path.display(), "no transcript file");
        return TranscriptMap::new();
    }

    match File::open(&tsv_path) {
        Ok(file) => parse_transcripts(BufReader::new(file)),
        Err(err) => {
            warn!(path = %tsv_path.display(), error = %err, "cannot open transcript file");
            TranscriptMap::new()
        }
    }
}

/// Parse TSV lines until the input ends or a line fails to read.
pub fn parse_transcripts<R: BufRead>(reader: R) -> TranscriptMap {
    let mut map = TranscriptMap::new();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, parsed = map.len(), "stopped reading transcripts");
                break;
            }
        };
        // a bare `\r` also ends a line
        for piece in line.split('\r') {
            if let Some((key, text)) = parse_line(piece) {
                map.insert(key, text);
            }
        }
    }
    map
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (audio, text) = line.split_once('\t')?;
    Some((
        normalize_relative(audio),
        text.trim_end_matches(['\r', '\n']).to_string(),
    ))
}

/// Normalize a relative path into a transcript key.
///
/// Surrounding whitespace is trimmed, backslashes become forward slashes and
/// any number of leading `./` segments are stripped.
pub fn normalize_relative(path: &str) -> String {
    let mut rel = path.trim().replace('\\', "/");
    while let Some(rest) = rel.strip_prefix("./") {
        rel = rest.to_string();
    }
    rel
}
