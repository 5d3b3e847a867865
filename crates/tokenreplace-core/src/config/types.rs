//! Configuration types and structures

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mapping::TokenMapping;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// Inline value-to-token mappings
    #[serde(default)]
    pub mappings: TokenMapping,

    /// CSV file with additional mappings, relative to the working directory
    #[serde(default)]
    pub csv_file_path: Option<PathBuf>,

    /// Files or directories to rewrite, in processing order
    #[serde(default)]
    pub targets: Vec<PathBuf>,

    /// File name suffixes eligible for rewriting (e.g. `.xml`)
    pub file_extensions: Vec<String>,
}

impl Config {
    /// CSV mapping path, if one is configured
    ///
    /// An empty string counts as not configured.
    #[must_use]
    pub fn csv_path(&self) -> Option<&Path> {
        self.csv_file_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
