//! Page configuration.
//!
//! Every option the CLI accepts can also come from a TOML file passed with
//! `--config`. Values are layered:
//!
//! ```text
//! stock defaults  →  config file (optional)  →  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Audio Library"
//! columns = 2               # grid columns, 1-12
//! name_max_chars = 60       # display budget for file names, 0-200 (0 = no cut)
//! accordion = true          # opening one section closes the others
//! start_collapsed = false   # no section open initially
//! follow_symlinks = false
//! no_jekyll = false         # write an empty .nojekyll next to the page
//! tsv_file = "transcripts.tsv"  # "" disables transcripts
//! # sample = 10            # show at most N files per section
//! # seed = 42              # deterministic sampling
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const MAX_COLUMNS: u8 = 12;
pub const MAX_NAME_CHARS: usize = 200;

/// All presentation and scanning options for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Page title, shown in `<title>` and the header.
    pub title: String,
    /// Number of grid columns on wide screens (1-12).
    pub columns: u8,
    /// Maximum displayed file name length; `0` disables elision.
    pub name_max_chars: usize,
    /// Opening one section closes the others.
    pub accordion: bool,
    /// Start with every section closed.
    pub start_collapsed: bool,
    /// Descend into symlinked directories while scanning.
    pub follow_symlinks: bool,
    /// Write an empty `.nojekyll` marker beside the output.
    pub no_jekyll: bool,
    /// Transcript TSV name looked up in each section directory.
    pub tsv_file: String,
    /// Show at most this many files per section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<usize>,
    /// Seed for deterministic sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Audio Library".to_string(),
            columns: 2,
            name_max_chars: 60,
            accordion: true,
            start_collapsed: false,
            follow_symlinks: false,
            no_jekyll: false,
            tsv_file: "transcripts.tsv".to_string(),
            sample: None,
            seed: None,
        }
    }
}

impl PageConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::Validation(format!(
                "columns must be 1-{MAX_COLUMNS}"
            )));
        }
        if self.name_max_chars > MAX_NAME_CHARS {
            return Err(ConfigError::Validation(format!(
                "name_max_chars must be 0-{MAX_NAME_CHARS}"
            )));
        }
        if self.sample == Some(0) {
            return Err(ConfigError::Validation("sample must be at least 1".into()));
        }
        Ok(())
    }

    /// Transcript file name, `None` when transcripts are disabled.
    pub fn transcript_file(&self) -> Option<&str> {
        Some(self.tsv_file.as_str()).filter(|n| !n.is_empty())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(PageConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file, layered over the stock defaults, and validate it.
///
/// The file must exist; a missing path is an IO error.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    let merged = merge_toml(stock_defaults_value()?, overlay);
    let config: PageConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Printed by `--gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# audio-shelf configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.

# Page title, shown in the browser tab and the page header.
title = "Audio Library"

# Grid columns on wide screens (1-12). Narrow screens always use one column.
columns = 2

# Maximum characters shown for a file name (0-200, 0 = never cut).
# The middle of the name is elided; the extension is always kept.
name_max_chars = 60

# Opening one section closes all the others.
accordion = true

# Start with every section closed (otherwise the first one is open).
start_collapsed = false

# Descend into symlinked directories while scanning.
follow_symlinks = false

# Write an empty .nojekyll file next to the page (GitHub Pages).
no_jekyll = false

# Transcript file looked up in each section directory.
# Lines are "relative/audio/path<TAB>transcript text". Set to "" to disable.
tsv_file = "transcripts.tsv"

# Show at most this many randomly chosen files per section.
# sample = 10

# Seed for the sampling above; the same seed picks the same files.
# seed = 42
"##
}
