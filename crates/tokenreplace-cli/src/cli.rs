use clap::Parser;
use std::path::PathBuf;

/// Replace hard-coded values with design-system tokens
///
/// Reads a configuration file listing targets, file extensions and value-to-token
/// mappings (inline and/or from a CSV file), then rewrites matching files in place.
#[derive(Parser, Debug)]
#[command(name = "tokenreplace")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Path to the configuration file (JSON, TOML or YAML)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}
