//! # tokenreplace
//!
//! Core library for the design-token replacement tool.
//!
//! This library loads value-to-token mappings from a configuration file and
//! an optional CSV table, then rewrites matching files in place, replacing
//! every case-insensitive occurrence of each value with its token.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the tokenreplace library
pub mod error;

/// Configuration file parsing
pub mod config;

/// Value-to-token mappings: ordered map, CSV loading and combination
pub mod mapping;

/// In-place literal substitution over file content
pub mod substitution;

/// Target classification and directory walking
pub mod resolver;

/// Run statistics and summary reporting
pub mod report;

/// End-to-end run orchestration
pub mod run;

#[cfg(test)]
mod integration_tests;

pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use mapping::{TokenMapping, combine, load_csv_mappings};
pub use report::{RunReport, RunReporter};
pub use resolver::TargetResolver;
pub use run::{run, run_with_config};
pub use substitution::{FileOutcome, Substitutor};
