use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::book::BookRecord;
use crate::core::types::BookCode;

use super::index::CodeIndex;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate book code '{0}' in catalog")]
    DuplicateCode(String),

    #[error("Duplicate reference number {0} in catalog")]
    DuplicateNumber(u16),

    #[error("Malformed book code '{0}' (must be three characters, letter first, uppercase)")]
    MalformedCode(String),

    #[error("Book '{bbb}' has reference number {number} outside 1..=999")]
    NumberOutOfRange { bbb: String, number: u16 },

    #[error("Sequence entry '{0}' does not name a book in the catalog")]
    UnknownSequenceEntry(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub books: Vec<BookRecord>,
    /// Canonical print-order sequence; deliberately distinct from
    /// reference-number order
    pub sequence: Vec<BookCode>,
}

/// The book-code catalog: the record table, the canonical print-order
/// sequence, and the derived reverse-lookup indexes
///
/// Constructed once from static data and never mutated. Indexes are built
/// eagerly inside construction, so a `BookCatalog` value is always fully
/// initialized and safe to share across reader threads.
#[derive(Debug)]
pub struct BookCatalog {
    books: Vec<BookRecord>,
    sequence: Vec<BookCode>,
    index: CodeIndex,
}

impl BookCatalog {
    /// Build a catalog from a record table and print-order sequence
    ///
    /// Fails on duplicate codes/numbers, malformed codes, or sequence
    /// entries naming unknown books. These are configuration errors in the
    /// supplied table, not runtime conditions.
    pub fn from_parts(
        books: Vec<BookRecord>,
        sequence: Vec<BookCode>,
    ) -> Result<Self, CatalogError> {
        let index = CodeIndex::build(&books)?;

        for bbb in &sequence {
            if index.lookup_bbb(bbb.as_str()).is_none() {
                return Err(CatalogError::UnknownSequenceEntry(bbb.to_string()));
            }
        }

        Ok(Self {
            books,
            sequence,
            index,
        })
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/book_codes.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        Self::from_parts(data.books, data.sequence)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            books: self.books.clone(),
            sequence: self.sequence.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// All records in table order
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// The canonical print-order sequence
    pub fn sequence(&self) -> &[BookCode] {
        &self.sequence
    }

    /// The derived reverse-lookup indexes
    pub fn index(&self) -> &CodeIndex {
        &self.index
    }

    /// Get a record by canonical code (exact, already-uppercase form)
    pub fn get(&self, bbb: &str) -> Option<&BookRecord> {
        self.index.lookup_bbb(bbb).map(|idx| &self.books[idx])
    }

    pub(crate) fn record(&self, idx: usize) -> &BookRecord {
        &self.books[idx]
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.sequence().len(), catalog.len());
    }

    #[test]
    fn test_catalog_get_by_code() {
        let catalog = BookCatalog::load_embedded().unwrap();

        let gen = catalog.get("GEN");
        assert!(gen.is_some());
        let gen = gen.unwrap();
        assert_eq!(gen.number, 1);
        assert_eq!(gen.english_name(), "Genesis");
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert!(catalog.get("XXX").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_catalog_to_json_roundtrip() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"books\""));
        assert!(json.contains("\"GEN\""));

        let reparsed = BookCatalog::from_json(&json).unwrap();
        assert_eq!(reparsed.len(), catalog.len());
    }

    #[test]
    fn test_sequence_entries_all_resolve() {
        let catalog = BookCatalog::load_embedded().unwrap();
        for bbb in catalog.sequence() {
            assert!(catalog.get(bbb.as_str()).is_some(), "missing {bbb}");
        }
    }

    #[test]
    fn test_unknown_sequence_entry_rejected() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let books = catalog.books().to_vec();
        let err = BookCatalog::from_parts(books, vec![BookCode::new("QQQ")]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSequenceEntry(_)));
    }
}
