//! MIME types for the `<audio>` element's `type` hint.
//!
//! The registry is built explicitly at startup and handed to the page
//! renderer; there is no process-wide table.

use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct MimeRegistry {
    by_extension: HashMap<String, String>,
}

impl MimeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every format the scanner accepts.
    pub fn audio() -> Self {
        let mut registry = Self::new();
        for (ext, mime) in [
            ("mp3", "audio/mpeg"),
            ("m4a", "audio/mp4"),
            ("ogg", "audio/ogg"),
            ("opus", "audio/opus"),
            ("wav", "audio/wav"),
            ("flac", "audio/flac"),
            ("aac", "audio/aac"),
            ("webm", "audio/webm"),
        ] {
            registry.register(ext, mime);
        }
        registry
    }

    /// Associate an extension (with or without its dot, any case) with a type.
    /// Later registrations replace earlier ones.
    pub fn register(&mut self, extension: &str, mime: &str) {
        self.by_extension
            .insert(normalize(extension), mime.to_string());
    }

    pub fn guess(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_string_lossy();
        self.by_extension.get(&normalize(&ext)).map(String::as_str)
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_lowercase()
}
