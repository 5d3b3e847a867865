//! End-to-end run orchestration
//!
//! Loads the configuration, combines inline and CSV mappings (CSV wins),
//! then resolves every target in order. Loading failures and an empty
//! target list are fatal; anything that goes wrong for a single target or
//! file is recorded in the [`RunReport`] and the run carries on.

use std::path::Path;

use crate::config::{Config, ConfigLoader};
use crate::error::{Error, Result};
use crate::mapping::{combine, load_csv_mappings};
use crate::report::RunReport;
use crate::resolver::TargetResolver;
use crate::substitution::Substitutor;

/// Run the whole pipeline for the configuration file at `config_path`
///
/// # Errors
///
/// Returns an error if the configuration or CSV mappings cannot be loaded,
/// or if no targets are configured. Per-file errors are only reported.
pub fn run(config_path: &Path) -> Result<RunReport> {
    let config = ConfigLoader::load(config_path)?;
    run_with_config(&config)
}

/// Run the pipeline for an already loaded configuration
///
/// # Errors
///
/// Returns an error if the CSV mappings cannot be loaded or if no targets
/// are configured.
pub fn run_with_config(config: &Config) -> Result<RunReport> {
    let mappings = match config.csv_path() {
        Some(csv_path) => combine(&config.mappings, &load_csv_mappings(csv_path)?),
        None => config.mappings.clone(),
    };

    if config.targets.is_empty() {
        return Err(Error::NoTargets);
    }

    let substitutor = Substitutor::new(&mappings)?;
    tracing::debug!(rules = substitutor.len(), "Compiled replacement rules");

    let resolver = TargetResolver::new(&substitutor, &config.file_extensions);
    let mut report = RunReport::default();
    for target in &config.targets {
        resolver.resolve(target, &mut report);
    }

    tracing::info!("Completed processing");
    Ok(report)
}
