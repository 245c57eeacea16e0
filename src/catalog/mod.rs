//! Book-code catalog storage and indexing.
//!
//! The catalog holds one [`BookRecord`] per canonical book plus the
//! canonical print-order sequence. An embedded catalog is compiled into the
//! binary, but custom catalogs can also be loaded from JSON files. All
//! reverse-lookup indexes are derived eagerly at construction time; a
//! duplicate code or reference number in the table aborts construction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_codes::BookCatalog;
//!
//! // Load embedded catalog
//! let catalog = BookCatalog::load_embedded().unwrap();
//!
//! // List all books
//! for book in catalog.books() {
//!     println!("{:3} {} {}", book.number, book.bbb, book.english_name());
//! }
//!
//! // Get a specific book
//! let genesis = catalog.get("GEN");
//! ```
//!
//! ## Custom Catalogs
//!
//! Custom catalogs can be created by exporting and modifying the embedded
//! catalog:
//!
//! ```rust,no_run
//! use book_codes::BookCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load from custom file
//! let custom = BookCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```
//!
//! [`BookRecord`]: crate::core::book::BookRecord

pub mod index;
pub mod store;
