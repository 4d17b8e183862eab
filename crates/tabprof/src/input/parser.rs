//! Delimited text parser.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{MalformedInputError, Result};

const UTF8_BOM: &str = "\u{feff}";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Extra field values read as missing, in addition to the empty field.
    /// Matched exactly (case-sensitive, no trimming).
    ///
    /// Empty by default: markers such as `NA`, `N/A` or `null`, which
    /// pandas-style readers treat as missing, stay text (and demote a
    /// numeric column) unless listed here.
    pub null_tokens: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            null_tokens: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Add a token that should be read as missing.
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_tokens.push(token.into());
        self
    }
}

/// Parses delimited text with a header row into a [`DataTable`].
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse raw bytes and return the table and its source metadata.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<(DataTable, SourceMetadata)> {
        if bytes.is_empty() {
            return Err(MalformedInputError::Empty.into());
        }

        let text = std::str::from_utf8(bytes).map_err(|e| MalformedInputError::Encoding {
            offset: e.valid_up_to(),
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_text(text)?;

        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Parsed delimited input"
        );

        let metadata = SourceMetadata::new(
            hash,
            bytes.len() as u64,
            self.config.delimiter,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    fn parse_text(&self, text: &str) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() {
            return Err(MalformedInputError::MissingHeader.into());
        }
        check_unique_headers(&headers)?;

        let expected = headers.len();
        let mut table = DataTable::new(headers, self.config.delimiter);

        for result in reader.records() {
            let record = result?;

            if record.len() != expected {
                return Err(MalformedInputError::RaggedRow {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    expected,
                    found: record.len(),
                }
                .into());
            }

            table.push_row(record.iter().map(|field| self.read_field(field)));
        }

        Ok(table)
    }

    /// Map a raw field to a cell; empty fields and null tokens are missing.
    fn read_field(&self, field: &str) -> Option<String> {
        if field.is_empty() || self.config.null_tokens.iter().any(|t| t == field) {
            None
        } else {
            Some(field.to_string())
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unique_headers(headers: &[String]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
    for (position, name) in headers.iter().enumerate() {
        if seen.insert(name.as_str(), position).is_some() {
            return Err(MalformedInputError::DuplicateColumn {
                name: name.clone(),
                position,
            }
            .into());
        }
    }
    Ok(())
}
