//! Run statistics and summary reporting

use std::fmt::Write;
use std::path::PathBuf;

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Path of the file
    pub path: PathBuf,
    /// Error message including its causes
    pub message: String,
}

/// Statistics collected over one run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Files rewritten with new content
    pub updated: usize,
    /// Files processed without any change
    pub unchanged: usize,
    /// Per-file errors; these never abort the run
    pub errors: Vec<FileFailure>,
    /// Targets that did not exist or had an unsupported extension
    pub invalid_targets: Vec<PathBuf>,
}

impl RunReport {
    /// Number of files the substitution engine was invoked on
    #[must_use]
    pub fn files_processed(&self) -> usize {
        self.updated + self.unchanged + self.errors.len()
    }

    /// Whether every file and target was handled without error
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.invalid_targets.is_empty()
    }
}

/// Run summary reporter
pub struct RunReporter;

impl RunReporter {
    /// Generate a human-readable summary
    #[must_use]
    pub fn generate_summary(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Replacement Summary ===\n");
        let _ = writeln!(output, "Updated:   {}", report.updated);
        let _ = writeln!(output, "Unchanged: {}", report.unchanged);
        let _ = writeln!(output, "Failed:    {}", report.errors.len());

        if !report.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", report.errors.len());
            for failure in &report.errors {
                let _ = writeln!(output, "  - {}: {}", failure.path.display(), failure.message);
            }
        }

        if !report.invalid_targets.is_empty() {
            let _ = writeln!(
                output,
                "\nInvalid targets ({}):",
                report.invalid_targets.len()
            );
            for target in &report.invalid_targets {
                let _ = writeln!(output, "  - {}", target.display());
            }
        }

        let _ = writeln!(output, "\nFiles processed: {}", report.files_processed());

        if report.is_clean() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✓ Completed with skipped files\n");
        }

        output
    }
}
