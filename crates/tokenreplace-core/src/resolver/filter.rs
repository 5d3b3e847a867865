//! File name suffix filtering

use std::path::Path;

/// Matches file names against configured suffixes
///
/// Matching is an exact, case-sensitive `ends_with`: `.xml` matches
/// `colors.xml` but not `colors.XML`. An empty suffix matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter from the configured suffixes
    #[must_use]
    pub fn new(suffixes: &[String]) -> Self {
        Self {
            suffixes: suffixes.to_vec(),
        }
    }

    /// Check a bare file name
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check the full path as written
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        self.matches_name(&path.to_string_lossy())
    }
}
