//! Target classification and dispatch
//!
//! A configured target is either a directory (walked recursively), a single
//! file with a configured suffix, or invalid. Invalid targets and per-file
//! failures are reported and skipped; they never stop the run.

mod filter;
mod walk;

use std::path::Path;

pub use filter::ExtensionFilter;
pub use walk::{WalkResult, walk};

use crate::report::{FileFailure, RunReport};
use crate::substitution::{FileOutcome, Substitutor};

/// How a target path was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Directory, walked recursively
    Directory,
    /// Single file with a matching suffix
    File,
    /// Missing path or file with an unsupported suffix
    Invalid,
}

/// Resolves targets and feeds matching files to the [`Substitutor`]
pub struct TargetResolver<'a> {
    substitutor: &'a Substitutor,
    filter: ExtensionFilter,
}

impl<'a> TargetResolver<'a> {
    /// Create a resolver for the given suffixes
    #[must_use]
    pub fn new(substitutor: &'a Substitutor, extensions: &[String]) -> Self {
        Self {
            substitutor,
            filter: ExtensionFilter::new(extensions),
        }
    }

    /// Classify `target`, process what it designates and record the outcome
    pub fn resolve(&self, target: &Path, report: &mut RunReport) -> TargetKind {
        if target.is_dir() {
            tracing::info!(path = %target.display(), "Processing directory");
            self.process_directory(target, report);
            TargetKind::Directory
        } else if target.is_file() && self.filter.matches_path(target) {
            tracing::info!(path = %target.display(), "Processing single file");
            self.process_file(target, report);
            TargetKind::File
        } else {
            tracing::warn!(
                path = %target.display(),
                "The path does not exist or is not a supported file or directory"
            );
            report.invalid_targets.push(target.to_path_buf());
            TargetKind::Invalid
        }
    }

    fn process_directory(&self, dir: &Path, report: &mut RunReport) {
        let WalkResult { files, warnings } = walk(dir, &self.filter);

        for warning in warnings {
            tracing::warn!("{warning}");
        }

        for file in files {
            self.process_file(&file, report);
        }
    }

    fn process_file(&self, path: &Path, report: &mut RunReport) {
        match self.substitutor.process_file(path) {
            Ok(FileOutcome::Updated) => report.updated += 1,
            Ok(FileOutcome::Unchanged) => report.unchanged += 1,
            Err(e) => {
                let message = e.chain();
                tracing::error!(path = %path.display(), "Error processing file: {message}");
                report.errors.push(FileFailure {
                    path: path.to_path_buf(),
                    message,
                });
            }
        }
    }
}
