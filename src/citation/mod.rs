//! Citation encoding and sorting.
//!
//! A (book, chapter, verse, segment) citation packs into a single integer
//! whose numeric order is citation order, which makes arbitrary citation
//! collections sortable with a plain integer sort. See
//! [`encode_reference`] for the formula and its data bounds.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_codes::{BookCatalog, BcvReference};
//! use book_codes::citation::encode::{encode_reference, sort_references};
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let a = encode_reference(&catalog, &BcvReference::new("GEN", 1, 1)).unwrap();
//! let b = encode_reference(&catalog, &BcvReference::new("EXO", 1, 1)).unwrap();
//! assert!(a < b);
//! ```
//!
//! [`encode_reference`]: encode::encode_reference

pub mod encode;
