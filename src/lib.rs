//! # book-codes
//!
//! A library for looking up and canonicalizing Bible book identifiers.
//!
//! Every system that handles Bibles abbreviates book names its own way:
//! OSIS writes `2Pet`, USFM writes `2PE`, SBL writes `2 Pet`, Unbound
//! Bible writes `61N`. `book-codes` maps all of them onto one canonical
//! three-character code (`PE2`) and back, from a single immutable data
//! table with eagerly built reverse indexes.
//!
//! ## Features
//!
//! - **Scheme lookups**: Resolve codes from a dozen external schemes,
//!   with explicit candidate ordering for ambiguous codes
//! - **Free-text matching**: A conservative heuristic that refuses to
//!   guess when text matches more than one book
//! - **Canonical sequencing**: Order any subset of books by the fixed
//!   print-order sequence
//! - **Citation sorting**: Encode (book, chapter, verse, segment) tuples
//!   as sortable integers
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_codes::{BookCatalog, Resolver, Scheme};
//!
//! // Load the embedded catalog of book codes
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! // Resolve external identifiers
//! let book = resolver.by_scheme(Scheme::Osis, "2Pet", false).unwrap();
//! assert_eq!(book.bbb.as_str(), "PE2");
//!
//! let book = resolver.by_free_text("The Revelation").unwrap();
//! assert_eq!(book.bbb.as_str(), "REV");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Book-code catalog storage and indexing
//! - [`core`]: Core data types for books, codes, schemes, and sections
//! - [`resolve`]: Resolver and canonical sequencing
//! - [`citation`]: Citation encoding and sorting
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod citation;
pub mod cli;
pub mod core;
pub mod resolve;

// Re-export commonly used types for convenience
pub use catalog::store::{BookCatalog, CatalogError};
pub use citation::encode::{encode_reference, sort_references, BcvReference, CitationError};
pub use crate::core::book::BookRecord;
pub use crate::core::types::{BookCode, Scheme, Section};
pub use resolve::resolver::{ResolveError, Resolver};
pub use resolve::sequence::{tidy_bbb, tidy_bbbs, Sequencer};
