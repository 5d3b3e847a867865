//! Configuration file format detection

use std::path::Path;

use serde::de::DeserializeOwned;

/// Boxed parser error, independent of the format that produced it
pub type ParseError = Box<dyn std::error::Error + Send + Sync>;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (`.json`, and the fallback for unknown extensions)
    Json,
    /// TOML (`.toml`)
    Toml,
    /// YAML (`.yaml`, `.yml`)
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Deserialize `content` in this format
    ///
    /// # Errors
    ///
    /// Returns the underlying parser error if the content is malformed.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ParseError> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Yaml => Ok(serde_yml::from_str(content)?),
        }
    }
}
