//! Configuration file parsing
//!
//! A run is described by a single configuration file listing the targets to
//! rewrite, the file extensions to consider, inline mappings and an optional
//! CSV mapping table. JSON is the canonical format; TOML and YAML are
//! accepted based on the file extension.

mod format;
mod types;


use std::fs;
use std::path::Path;

pub use format::ConfigFormat;
pub use types::Config;

use crate::error::{Error, Result};

/// Loads a [`Config`] from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and parse the configuration file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is malformed or misses a required key.
    pub fn load(path: &Path) -> Result<Config> {
        tracing::info!(path = %path.display(), "Loading configuration");

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        ConfigFormat::from_path(path)
            .parse(&content)
            .map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }
}
