//! # Statement Files
//!
//! Reads and writes holding statements as structured documents.
//!
//! A statement is a list of [`StatementEntry`] records. JSON documents hold
//! an `entries` array; TOML documents hold `[[entries]]` tables. The format
//! is chosen from the file extension.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::infrastructure::statement::{Statement, StatementFormat};
//!
//! let text = r#"
//! [[entries]]
//! index = 1
//! acquired = "2020-01-15"
//! plan = "GSU Class C"
//! available = 100
//! price = "10"
//! gain = "5"
//! "#;
//!
//! let statement = Statement::parse(text, StatementFormat::Toml).unwrap();
//! assert_eq!(statement.entries().len(), 1);
//! ```

use crate::application::error::InfrastructureError;
use crate::application::services::lot_filter::LotFilter;
use crate::domain::entities::catalog::LotCatalog;
use crate::domain::entities::statement_entry::StatementEntry;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk encoding of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementFormat {
    /// JSON document with an `entries` array.
    Json,
    /// TOML document with `[[entries]]` tables.
    Toml,
}

impl StatementFormat {
    /// Picks the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::UnsupportedFormat` for any extension
    /// other than `.json` or `.toml`.
    pub fn from_path(path: &Path) -> Result<Self, InfrastructureError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(InfrastructureError::unsupported_format(
                path.display().to_string(),
            )),
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// A holding statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(default)]
    entries: Vec<StatementEntry>,
}

impl Statement {
    /// Creates a statement from entries.
    #[must_use]
    pub fn new(entries: Vec<StatementEntry>) -> Self {
        Self { entries }
    }

    /// Decodes a statement document.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Serialization` if the text is malformed.
    pub fn parse(text: &str, format: StatementFormat) -> Result<Self, InfrastructureError> {
        match format {
            StatementFormat::Json => serde_json::from_str(text)
                .map_err(|e| InfrastructureError::serialization(e.to_string())),
            StatementFormat::Toml => {
                toml::from_str(text).map_err(|e| InfrastructureError::serialization(e.to_string()))
            }
        }
    }

    /// Reads a statement file, decoding it by extension.
    ///
    /// # Errors
    ///
    /// Returns an `InfrastructureError` if the file cannot be read, has an
    /// unknown extension, or does not decode.
    pub fn load(path: &Path) -> Result<Self, InfrastructureError> {
        let format = StatementFormat::from_path(path)?;
        let text =
            fs::read_to_string(path).map_err(|e| InfrastructureError::io(path, e.to_string()))?;
        let statement = Self::parse(&text, format)?;
        info!(
            path = %path.display(),
            %format,
            entries = statement.entries.len(),
            "statement loaded"
        );
        Ok(statement)
    }

    /// Encodes the statement as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, InfrastructureError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InfrastructureError::serialization(e.to_string()))
    }

    /// Writes the statement to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an `InfrastructureError` if encoding or writing fails.
    pub fn write_json(&self, path: &Path) -> Result<(), InfrastructureError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| InfrastructureError::io(path, e.to_string()))?;
        info!(path = %path.display(), entries = self.entries.len(), "statement written");
        Ok(())
    }

    /// Returns the entries in statement order.
    #[must_use]
    pub fn entries(&self) -> &[StatementEntry] {
        &self.entries
    }

    /// Looks up an entry by its statement index.
    #[must_use]
    pub fn find(&self, index: usize) -> Option<&StatementEntry> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// Keeps only the entries accepted by `filter`.
    #[must_use]
    pub fn filtered(self, filter: &LotFilter) -> Self {
        Self::new(filter.apply(self.entries))
    }

    /// Builds a catalog of lots keyed by statement index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateLot` if two entries share an index,
    /// otherwise the first `DomainError` raised by an invalid entry.
    pub fn to_catalog(&self) -> DomainResult<LotCatalog<usize>> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        if let Some(dup) = self.entries.iter().find(|e| !seen.insert(e.index)) {
            return Err(DomainError::duplicate_lot(format!(
                "statement index {} appears more than once",
                dup.index
            )));
        }
        let lots = self
            .entries
            .iter()
            .map(StatementEntry::to_lot)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(LotCatalog::new(lots))
    }
}
