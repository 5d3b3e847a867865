//! Recursive directory walking
//!
//! Entries are visited sorted by file name so the processing order is
//! stable for a given tree. Symlinked directories are not descended;
//! any other symlink, dangling ones included, is treated as a file so that
//! a broken link surfaces as a processing error.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::ExtensionFilter;

/// Result of a directory walk with non-fatal warnings
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Matching files in traversal order
    pub files: Vec<PathBuf>,
    /// Entries that could not be read
    pub warnings: Vec<String>,
}

/// Collect every file below `base` whose name passes `filter`
#[must_use]
pub fn walk(base: &Path, filter: &ExtensionFilter) -> WalkResult {
    let mut result = WalkResult::default();

    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.warnings.push(format!("Failed to read directory entry: {e}"));
                continue;
            }
        };

        if is_file(&entry) && filter.matches_name(&entry.file_name().to_string_lossy()) {
            result.files.push(entry.into_path());
        }
    }

    result
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}
