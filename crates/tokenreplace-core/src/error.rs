use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the library [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading inputs or rewriting files
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read
    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The configuration file is malformed or misses a required key
    #[error("Failed to parse config file: {}", path.display())]
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// Parser error for the detected format
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The CSV mapping file could not be opened or read
    #[error("Failed to read mapping file: {}", path.display())]
    MappingRead {
        /// Path of the CSV file
        path: PathBuf,
        /// Underlying CSV reader error
        #[source]
        source: csv::Error,
    },

    /// A CSV row did not have exactly two fields
    #[error(
        "Malformed row at line {line} in {}: expected 2 fields, found {fields}",
        path.display()
    )]
    MalformedRow {
        /// Path of the CSV file
        path: PathBuf,
        /// 1-based line number of the row
        line: u64,
        /// Number of fields found on the row
        fields: usize,
    },

    /// The configuration lists no targets
    #[error("No targets specified in the configuration file")]
    NoTargets,

    /// A mapping value could not be compiled into a matcher
    #[error("Failed to build matcher for value {value:?}")]
    Pattern {
        /// The mapping key that failed
        value: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Opening, reading or writing a target file failed
    #[error("Failed to {action} file {}", path.display())]
    File {
        /// Path of the file being processed
        path: PathBuf,
        /// What was being done when the error happened
        action: &'static str,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// This error followed by its chain of causes, separated by `: `
    #[must_use]
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_chain() {
        let err = Error::File {
            path: PathBuf::from("a.xml"),
            action: "read",
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };

        assert_eq!(err.to_string(), "Failed to read file a.xml");
        assert_eq!(err.chain(), "Failed to read file a.xml: bad utf-8");
    }

    #[test]
    fn test_malformed_row_message() {
        assert_eq!(Error::NoTargets.chain(), "No targets specified in the configuration file");

        let err = Error::MalformedRow {
            path: PathBuf::from("map.csv"),
            line: 3,
            fields: 1,
        };
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("found 1"));
    }
}
