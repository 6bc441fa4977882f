//! Introduction rendering.
//!
//! The `--intro-md` document is converted with a [`MarkdownBackend`] when one
//! is compiled in (cargo feature `markdown`, on by default). Whenever the
//! backend is missing or fails, the raw text is shown HTML-escaped inside a
//! `<pre>` block instead. [`render_intro`] therefore always succeeds and never
//! lets unescaped user text through except via a working backend.
//!
//! | Backend | Crate | Extensions |
//! |---|---|---|
//! | [`CmarkBackend`] | `pulldown-cmark` | tables, footnotes, strikethrough, definition lists |

use maud::{Markup, PreEscaped, html};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

/// Converts Markdown text to an HTML fragment.
pub trait MarkdownBackend {
    fn to_html(&self, text: &str) -> Result<String, MarkdownError>;
}

/// `pulldown-cmark` based backend.
#[cfg(feature = "markdown")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkBackend;

#[cfg(feature = "markdown")]
impl MarkdownBackend for CmarkBackend {
    fn to_html(&self, text: &str) -> Result<String, MarkdownError> {
        use pulldown_cmark::{Options, Parser, html as md_html};

        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_DEFINITION_LIST;

        let parser = Parser::new_ext(text, options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        md_html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// The best backend compiled into this build, if any.
pub fn available_backend() -> Option<Box<dyn MarkdownBackend>> {
    #[cfg(feature = "markdown")]
    {
        Some(Box::new(CmarkBackend))
    }
    #[cfg(not(feature = "markdown"))]
    {
        None
    }
}

/// Render the introduction, degrading to escaped preformatted text.
pub fn render_intro(backend: Option<&dyn MarkdownBackend>, text: &str) -> Markup {
    match backend.map(|b| b.to_html(text)) {
        Some(Ok(rendered)) => PreEscaped(rendered),
        Some(Err(err)) => {
            warn!(error = %err, "falling back to preformatted introduction");
            preformatted(text)
        }
        None => preformatted(text),
    }
}

fn preformatted(text: &str) -> Markup {
    html! { pre { (text) } }
}
