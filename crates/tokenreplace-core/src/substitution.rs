//! In-place literal substitution over file content
//!
//! Every mapping value is matched literally (regex metacharacters such as
//! `#`, `.` or `(` are escaped) and case-insensitively. Pairs are applied in
//! mapping order against the progressively rewritten content, so a later
//! pair can match text inserted by an earlier one.

use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::mapping::TokenMapping;

/// Result of processing a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back
    Updated,
    /// No value matched; the file was not written
    Unchanged,
}

/// A compiled value matcher and its replacement token
#[derive(Debug, Clone)]
struct Rule {
    matcher: Regex,
    token: String,
}

/// Applies a [`TokenMapping`] to text and files
#[derive(Debug, Clone)]
pub struct Substitutor {
    rules: Vec<Rule>,
}

impl Substitutor {
    /// Compile one case-insensitive literal matcher per mapping entry
    ///
    /// Entries with an empty value are skipped, since they would match
    /// between every character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if a matcher cannot be built, e.g. when a
    /// value exceeds the regex size limit.
    pub fn new(mapping: &TokenMapping) -> Result<Self> {
        let mut rules = Vec::with_capacity(mapping.len());

        for (value, token) in mapping.iter() {
            if value.is_empty() {
                tracing::warn!(token, "Skipping mapping with an empty value");
                continue;
            }

            let matcher = RegexBuilder::new(&regex::escape(value))
                .case_insensitive(true)
                .build()
                .map_err(|source| Error::Pattern {
                    value: value.to_string(),
                    source,
                })?;

            rules.push(Rule {
                matcher,
                token: token.to_string(),
            });
        }

        Ok(Self { rules })
    }

    /// Number of active replacement rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there is nothing to replace
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order and return the rewritten content
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        self.rules.iter().fold(content.to_owned(), |current, rule| {
            let replaced = match rule.matcher.replace_all(&current, NoExpand(&rule.token)) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            replaced.unwrap_or(current)
        })
    }

    /// Rewrite the file at `path` in place if any rule changes its content
    ///
    /// The file is opened for reading and writing up front, read fully as
    /// UTF-8, and overwritten from the start only when the content changed.
    /// There is no backup and no temporary file: a crash mid-write can leave
    /// the file partially written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::File`] if the file cannot be opened, is not valid
    /// UTF-8, or cannot be written.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        tracing::info!(path = %path.display(), "Processing file");

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(file_error(path, "open"))?;

        let mut original = String::new();
        file.read_to_string(&mut original)
            .map_err(file_error(path, "read"))?;

        let updated = self.apply(&original);
        if updated == original {
            tracing::info!(path = %path.display(), "No changes made to the file");
            return Ok(FileOutcome::Unchanged);
        }

        file.seek(SeekFrom::Start(0))
            .and_then(|_| file.write_all(updated.as_bytes()))
            .and_then(|()| file.stream_position())
            .and_then(|end| file.set_len(end))
            .and_then(|()| file.flush())
            .map_err(file_error(path, "write"))?;

        tracing::info!(path = %path.display(), "File updated successfully");
        Ok(FileOutcome::Updated)
    }
}

fn file_error<'a>(path: &'a Path, action: &'static str) -> impl FnOnce(io::Error) -> Error + 'a {
    move |source| Error::File {
        path: path.to_path_buf(),
        action,
        source,
    }
}
