//! Console summary for a finished run.
//!
//! ```text
//! Wrote /srv/site/index.html (42 audio files in 3 sections).
//! Per-section sampling: up to 10 file(s) (seed=42).
//! Included intro from: intro.md
//! Transcripts TSV: 'transcripts.tsv' (2/3 sections had it).
//! Note: keep this HTML's relative paths to these folders intact: ../audio/podcasts, ../audio/music
//! ```
//!
//! [`format_summary`] is pure and returns the lines; [`print_summary`]
//! writes them to stdout.

use crate::config::PageConfig;
use crate::paths::{relative_path, to_slash};
use crate::pipeline::RunReport;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Format the run summary lines.
pub fn format_summary(report: &RunReport, config: &PageConfig) -> Vec<String> {
    let mut lines = Vec::new();
    let sections = report.sections.len();

    lines.push(format!(
        "Wrote {} ({} audio file{} in {} section{}).",
        report.output_path.display(),
        report.total_files,
        plural(report.total_files),
        sections,
        plural(sections)
    ));

    if let Some(limit) = config.sample {
        let seed = config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        lines.push(format!(
            "Per-section sampling: up to {limit} file(s) (seed={seed})."
        ));
    }

    if let Some(intro) = &report.intro {
        lines.push(format!("Included intro from: {}", intro.display()));
    }

    if let Some(tsv) = config.transcript_file() {
        let with_transcripts = report
            .sections
            .iter()
            .filter(|s| !s.transcripts.is_empty())
            .count();
        lines.push(format!(
            "Transcripts TSV: '{tsv}' ({with_transcripts}/{sections} sections had it)."
        ));
    }

    if let Some(marker) = &report.marker {
        lines.push(format!("Marker file: {}", marker.display()));
    }

    let hints: Vec<String> = report
        .sections
        .iter()
        .map(|s| to_slash(&relative_path(&s.directory, &report.output_dir)))
        .collect();
    lines.push(format!(
        "Note: keep this HTML's relative paths to these folders intact: {}",
        hints.join(", ")
    ));

    lines
}

/// Print the run summary to stdout.
pub fn print_summary(report: &RunReport, config: &PageConfig) {
    for line in format_summary(report, config) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{audio_file_at, section};
    use crate::types::TranscriptMap;
    use std::path::PathBuf;

    fn report(sections: Vec<crate::types::Section>) -> RunReport {
        let total_files = sections.iter().map(|s| s.files.len()).sum();
        RunReport {
            output_path: PathBuf::from("/srv/site/index.html"),
            output_dir: PathBuf::from("/srv/site"),
            sections,
            total_files,
            marker: None,
            intro: None,
        }
    }

    #[test]
    fn headline_singular_and_plural() {
        let one = report(vec![section(
            "A",
            "/srv/audio/a",
            vec![audio_file_at("/srv/audio/a/x.mp3", 1)],
        )]);
        let lines = format_summary(&one, &PageConfig::default());
        assert_eq!(
            lines[0],
            "Wrote /srv/site/index.html (1 audio file in 1 section)."
        );

        let two = report(vec![
            section("A", "/srv/audio/a", vec![]),
            section("B", "/srv/audio/b", vec![]),
        ]);
        let lines = format_summary(&two, &PageConfig::default());
        assert!(lines[0].contains("(0 audio files in 2 sections)"));
    }

    #[test]
    fn sampling_line_only_when_sampling() {
        let r = report(vec![]);
        let lines = format_summary(&r, &PageConfig::default());
        assert!(!lines.iter().any(|l| l.starts_with("Per-section sampling")));

        let config = PageConfig {
            sample: Some(10),
            seed: Some(42),
            ..PageConfig::default()
        };
        let lines = format_summary(&r, &config);
        assert!(lines.contains(&"Per-section sampling: up to 10 file(s) (seed=42).".to_string()));
    }

    #[test]
    fn transcript_coverage_counts_sections() {
        let mut with = section("A", "/srv/audio/a", vec![]);
        let mut transcripts = TranscriptMap::new();
        transcripts.insert("x.mp3".to_string(), "hi".to_string());
        with.transcripts = transcripts;
        let without = section("B", "/srv/audio/b", vec![]);

        let lines = format_summary(&report(vec![with, without]), &PageConfig::default());
        assert!(lines.contains(&"Transcripts TSV: 'transcripts.tsv' (1/2 sections had it).".to_string()));
    }

    #[test]
    fn transcript_line_omitted_when_disabled() {
        let config = PageConfig {
            tsv_file: String::new(),
            ..PageConfig::default()
        };
        let lines = format_summary(&report(vec![]), &config);
        assert!(!lines.iter().any(|l| l.starts_with("Transcripts TSV")));
    }

    #[test]
    fn relative_folder_hints() {
        let r = report(vec![
            section("A", "/srv/audio/a", vec![]),
            section("B", "/srv/site/local", vec![]),
        ]);
        let lines = format_summary(&r, &PageConfig::default());
        assert_eq!(
            lines.last().unwrap(),
            "Note: keep this HTML's relative paths to these folders intact: ../audio/a, local"
        );
    }
}
