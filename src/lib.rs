//! # Audio Shelf
//!
//! Turns folders of audio files into one static HTML page: a collapsible
//! section per folder, an inline player per file, optional transcripts and
//! an optional Markdown introduction. The page is self-contained (inline CSS
//! and JS) and links to the audio files by relative path, so it can be
//! dropped next to the folders on any static host.
//!
//! # Pipeline
//!
//! A run is strictly linear:
//!
//! ```text
//! CLI options → section sources → per section: scan → transcripts → sample
//!             → render HTML → write page (+ .nojekyll) → console summary
//! ```
//!
//! Nothing is cached between runs; the whole page is rebuilt every time.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Recursive audio file discovery, sorted by name |
//! | [`transcripts`] | Per-section `transcripts.tsv` sidecar parsing |
//! | [`sample`] | Seeded per-section subset selection |
//! | [`naming`] | File name elision and section anchor slugs |
//! | [`markdown`] | Introduction rendering with an escaped fallback |
//! | [`mime`] | Explicit MIME registry for player type hints |
//! | [`paths`] | Relative paths from the page to the audio files |
//! | [`generate`] | Maud templates for the page |
//! | [`config`] | TOML page configuration, defaults and validation |
//! | [`pipeline`] | Section resolution and the run itself |
//! | [`output`] | Console summary formatting |
//! | [`types`] | Shared data types |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Every interpolated
//! value is escaped by default, which matters here because file names,
//! folder names and transcripts all end up in the page verbatim. Only the
//! rendered introduction is trusted to carry raw HTML.
//!
//! ## Soft Failures While Scanning
//!
//! A file that cannot be stat'ed, or a transcript file that cannot be read,
//! is skipped with a log line instead of aborting the run. Bad arguments and
//! an unreadable introduction are hard errors.
//!
//! ## Deterministic Output
//!
//! Walk order, sort order and the sampling generator are all fixed, and the
//! timestamp is injected by the caller. Two runs with the same inputs and
//! seed differ only in the "Generated" line.

pub mod config;
pub mod generate;
pub mod logging;
pub mod markdown;
pub mod mime;
pub mod naming;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod sample;
pub mod scan;
pub mod transcripts;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
