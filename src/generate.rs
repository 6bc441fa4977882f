//! HTML page generation.
//!
//! Renders the whole library as one self-contained document:
//!
//! ```text
//! header            page title, total count, generation time
//! section.intro     rendered --intro-md (optional)
//! nav.toc           one anchor per section (only with 2+ sections)
//! section.section   one per input directory
//!   details         collapsible, first one open unless start-collapsed
//!     article.item  one per audio file: link, size, caption, player, transcript
//! footer
//! script            accordion + open-on-TOC-click behavior
//! ```
//!
//! ## Links
//!
//! Every `href` and `<audio src>` is relative to the directory of the output
//! file, not to the section directory, so the page keeps working as long as
//! the folders stay where they are relative to it.
//!
//! ## Escaping
//!
//! Templates are written with [maud](https://maud.lambda.xyz/), which escapes
//! every interpolated value. Titles, file names, paths and transcripts are
//! always interpolated as plain strings. The only `PreEscaped` content is the
//! embedded CSS/JS and the introduction produced by a Markdown backend.
//!
//! ## Determinism
//!
//! The generation timestamp is passed in by the caller; given the same
//! sections and options, [`render_page`] produces identical output.

use crate::mime::MimeRegistry;
use crate::naming::{elide_file_name, slugify};
use crate::paths::{relative_path, to_slash};
use crate::transcripts::normalize_relative;
use crate::types::{AudioFile, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/page.js");

/// Presentation options for one render.
#[derive(Debug, Clone)]
pub struct PageOptions<'a> {
    pub title: &'a str,
    /// Pre-formatted generation time shown in the header.
    pub generated_at: &'a str,
    pub columns: u8,
    pub accordion: bool,
    pub start_collapsed: bool,
    /// Display budget for file names, `0` disables elision.
    pub name_max_chars: usize,
    /// Absolute directory the page is written into.
    pub output_dir: &'a Path,
}

/// Render the full document.
pub fn render_page(
    sections: &[Section],
    intro: Option<Markup>,
    options: &PageOptions,
    mime: &MimeRegistry,
) -> Markup {
    let total: usize = sections.iter().map(|s| s.files.len()).sum();
    let css = format!(":root {{ --cols: {}; }}\n{}", options.columns, CSS_STATIC);

    let content = html! {
        header {
            h1 { (options.title) }
            div.meta {
                "Total: " (total) " audio file" (plural(total)) ". Generated " (options.generated_at) "."
            }
        }
        main data-accordion=(if options.accordion { "true" } else { "false" }) {
            @if let Some(intro) = intro {
                section.intro { (intro) }
            }
            @if sections.len() > 1 {
                (render_toc(sections))
            }
            @for (idx, section) in sections.iter().enumerate() {
                @let open = !options.start_collapsed && idx == 0;
                (render_section(section, open, options, mime))
                @if idx + 1 < sections.len() {
                    hr.sep;
                }
            }
        }
        footer {
            "Static page; audio links are relative to this HTML file."
        }
        script { (PreEscaped(JS)) }
    };

    base_document(options.title, &css, content)
}

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_toc(sections: &[Section]) -> Markup {
    html! {
        nav.toc {
            @for section in sections {
                a href={ "#" (slugify(&section.title)) } { (section.title) }
            }
        }
    }
}

fn render_section(
    section: &Section,
    open: bool,
    options: &PageOptions,
    mime: &MimeRegistry,
) -> Markup {
    let count = section.files.len();
    html! {
        section.section id=(slugify(&section.title)) {
            details open[open] {
                summary {
                    (section.title) " "
                    span.summary-meta { "(" (count) " file" (plural(count)) ")" }
                }
                div.grid-wrapper {
                    div.grid {
                        @for file in &section.files {
                            (render_item(file, section, options, mime))
                        }
                    }
                }
            }
        }
    }
}

fn render_item(
    file: &AudioFile,
    section: &Section,
    options: &PageOptions,
    mime: &MimeRegistry,
) -> Markup {
    let display_name = elide_file_name(&file.file_name, options.name_max_chars);
    let href = to_slash(&relative_path(&file.path, options.output_dir));

    let caption_target = file
        .path
        .parent()
        .map(|dir| dir.join(&display_name))
        .unwrap_or_else(|| display_name.clone().into());
    let caption = to_slash(&relative_path(&caption_target, options.output_dir));

    let key = normalize_relative(&to_slash(&relative_path(&file.path, &section.directory)));
    let transcript = section.transcript_for(&key);

    let ext_upper = file.extension.trim_start_matches('.').to_uppercase();

    html! {
        article.item data-size=(file.size_bytes) {
            div.row {
                div {
                    div.name {
                        a href=(href) title=(file.file_name) download { (display_name) }
                    }
                    div.sub {
                        (human_size(file.size_bytes))
                        @if !caption.is_empty() {
                            " • " (caption)
                        }
                    }
                }
                div.right { (ext_upper) }
            }
            audio controls preload="none" src=(href) type=[mime.guess(&file.path)] {}
            @if let Some(text) = transcript {
                div.transcript { (text) }
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Human-readable byte count: `10 B`, `2.0 KB`, `1.5 MB`, up to TB.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    for (i, unit) in UNITS.iter().enumerate() {
        if value < 1024.0 || i == UNITS.len() - 1 {
            return if i == 0 {
                format!("{bytes} {unit}")
            } else {
                format!("{value:.1} {unit}")
            };
        }
        value /= 1024.0;
    }
    unreachable!("loop returns on the last unit")
}

// ============================================================================
// Tests
// ============================================================================
