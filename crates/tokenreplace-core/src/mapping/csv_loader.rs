//! Loading mappings from a headerless two-column CSV file

use std::path::Path;

use csv::ReaderBuilder;

use super::TokenMapping;
use crate::error::{Error, Result};

/// Load `value,token` rows from the CSV file at `path`
///
/// There is no header row. The value column is upper-cased before insertion
/// and a repeated value keeps the token of its last row.
///
/// # Errors
///
/// Returns [`Error::MappingRead`] if the file cannot be opened or read and
/// [`Error::MalformedRow`] for the first row that does not have exactly two
/// fields. Nothing is returned for a file with a malformed row.
pub fn load_csv_mappings(path: &Path) -> Result<TokenMapping> {
    tracing::info!(path = %path.display(), "Loading mappings from CSV");

    let read_error = |source| Error::MappingRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    let mut mapping = TokenMapping::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;

        if record.len() != 2 {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                fields: record.len(),
            });
        }

        let (value, token) = (&record[0], &record[1]);
        tracing::debug!(value, token, "Mapping added");
        mapping.insert(value.to_uppercase(), token);
    }

    tracing::info!(count = mapping.len(), "Loaded CSV mappings");
    Ok(mapping)
}
