//! One generation run, from section sources to the written page.
//!
//! ```text
//! sources → scan → transcripts → sample   (per section, in order)
//!         → render → write page (+ marker) → RunReport
//! ```
//!
//! Sections are processed sequentially and share one [`Sampler`], so a seed
//! reproduces the whole page. Argument parsing and console output live in
//! the binary and in [`crate::output`]; this module only does the work.

use crate::config::PageConfig;
use crate::generate::{PageOptions, render_page};
use crate::markdown::{MarkdownBackend, render_intro};
use crate::mime::MimeRegistry;
use crate::sample::Sampler;
use crate::scan::scan_audio_files;
use crate::transcripts::load_transcripts;
use crate::types::{Section, SectionSource};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the empty marker file that tells GitHub Pages to skip Jekyll.
pub const MARKER_FILE: &str = ".nojekyll";

/// Problems with the requested inputs, reported as usage errors.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("--section must be \"Title=PATH\", got: {0}")]
    InvalidSpec(String),
    #[error("Section path not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Provide at least one PATH or use --section 'Title=PATH'.")]
    NoInputs,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read --intro-md {path}: {source}")]
    Intro {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Output path has no file name: {0}")]
    OutputPath(PathBuf),
}

/// Everything a run needs besides the environment-provided pieces.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub sources: Vec<SectionSource>,
    pub output: PathBuf,
    pub config: PageConfig,
    pub intro_md: Option<PathBuf>,
}

/// What a run produced, for the console summary.
#[derive(Debug)]
pub struct RunReport {
    /// Absolute path of the written page.
    pub output_path: PathBuf,
    /// Absolute directory holding the page.
    pub output_dir: PathBuf,
    pub sections: Vec<Section>,
    pub total_files: usize,
    pub marker: Option<PathBuf>,
    pub intro: Option<PathBuf>,
}

// ============================================================================
// Section sources
// ============================================================================

/// Resolve the section list.
///
/// Explicit `Title=PATH` specs take precedence; positional directories are
/// only used when there are none.
pub fn resolve_sources(
    specs: &[String],
    paths: &[PathBuf],
) -> Result<Vec<SectionSource>, SourceError> {
    if !specs.is_empty() {
        return specs.iter().map(|s| parse_section_spec(s)).collect();
    }
    if paths.is_empty() {
        return Err(SourceError::NoInputs);
    }
    paths
        .iter()
        .map(|path| {
            let directory = resolve_directory(path)?;
            let title = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(SectionSource { title, directory })
        })
        .collect()
}

/// Parse a `Title=PATH` spec. Splits on the first `=`; the title is trimmed.
pub fn parse_section_spec(spec: &str) -> Result<SectionSource, SourceError> {
    let (title, path) = spec
        .split_once('=')
        .ok_or_else(|| SourceError::InvalidSpec(spec.to_string()))?;
    let directory = resolve_directory(&expand_home(path))?;
    Ok(SectionSource {
        title: title.trim().to_string(),
        directory,
    })
}

fn resolve_directory(path: &Path) -> Result<PathBuf, SourceError> {
    match fs::canonicalize(path) {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        Ok(resolved) => Err(SourceError::NotADirectory(resolved)),
        Err(_) => Err(SourceError::NotADirectory(path.to_path_buf())),
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(rest.trim_start_matches('/'));
    }
    PathBuf::from(path)
}

// ============================================================================
// Run
// ============================================================================

/// Scan every section, render the page and write it to disk.
pub fn run(
    options: &RunOptions,
    mime: &MimeRegistry,
    markdown: Option<&dyn MarkdownBackend>,
    generated_at: &str,
) -> Result<RunReport, RunError> {
    let config = &options.config;

    let intro_text = options
        .intro_md
        .as_ref()
        .map(|path| {
            fs::read_to_string(path).map_err(|source| RunError::Intro {
                path: path.clone(),
                source,
            })
        })
        .transpose()?;

    let mut sampler = Sampler::new(config.sample, config.seed);
    let sections: Vec<Section> = options
        .sources
        .iter()
        .map(|source| {
            let files = scan_audio_files(&source.directory, config.follow_symlinks);
            let transcripts = load_transcripts(&source.directory, config.transcript_file());
            let files = sampler.sample(files);
            info!(
                section = %source.title,
                files = files.len(),
                transcripts = transcripts.len(),
                "section ready"
            );
            Section {
                title: source.title.clone(),
                directory: source.directory.clone(),
                files,
                transcripts,
            }
        })
        .collect();
    let total_files = sections.iter().map(|s| s.files.len()).sum();

    let file_name = options
        .output
        .file_name()
        .ok_or_else(|| RunError::OutputPath(options.output.clone()))?;
    let parent = match options.output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;
    let output_dir = fs::canonicalize(&parent)?;
    let output_path = output_dir.join(file_name);

    let intro = intro_text.map(|text| render_intro(markdown, &text));
    let page_options = PageOptions {
        title: &config.title,
        generated_at,
        columns: config.columns,
        accordion: config.accordion,
        start_collapsed: config.start_collapsed,
        name_max_chars: config.name_max_chars,
        output_dir: &output_dir,
    };
    let page = render_page(&sections, intro, &page_options, mime);
    fs::write(&output_path, page.into_string())?;

    let marker = if config.no_jekyll {
        let path = output_dir.join(MARKER_FILE);
        fs::write(&path, "")?;
        Some(path)
    } else {
        None
    };

    Ok(RunReport {
        output_path,
        output_dir,
        sections,
        total_files,
        marker,
        intro: options.intro_md.clone(),
    })
}
