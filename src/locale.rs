//! Bundled navigation labels
//!
//! Default link text for prev/next/first/last navigation and the truncation
//! marker, loadable from the YAML locale files the crate ships under
//! `locales/`. Hosts with their own i18n subsystem will usually ignore this
//! and consume the merged load path from [`register`](crate::registry::register)
//! instead.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Link text for pagination navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Labels {
    /// Previous-page link text
    #[serde(default = "default_previous")]
    pub previous: String,

    /// Next-page link text
    #[serde(default = "default_next")]
    pub next: String,

    /// First-page link text
    #[serde(default = "default_first")]
    pub first: String,

    /// Last-page link text
    #[serde(default = "default_last")]
    pub last: String,

    /// Marker shown where the page window is truncated
    #[serde(default = "default_truncate")]
    pub truncate: String,
}

fn default_previous() -> String {
    "&laquo; Prev".to_string()
}

fn default_next() -> String {
    "Next &raquo;".to_string()
}

fn default_first() -> String {
    "&laquo; First".to_string()
}

fn default_last() -> String {
    "Last &raquo;".to_string()
}

fn default_truncate() -> String {
    "&hellip;".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: default_previous(),
            next: default_next(),
            first: default_first(),
            last: default_last(),
            truncate: default_truncate(),
        }
    }
}

/// Top-level shape of a locale file
#[derive(Debug, Deserialize)]
struct LocaleFile {
    #[serde(default)]
    pagination: Labels,
}

impl Labels {
    /// Parse labels from locale YAML; missing keys fall back to the defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: LocaleFile = serde_yaml::from_str(yaml)?;
        Ok(file.pagination)
    }

    /// Load labels from a locale file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }
}
