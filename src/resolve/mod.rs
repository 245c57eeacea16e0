//! Identifier resolution and canonical sequencing.
//!
//! [`Resolver`] turns external identifiers (scheme codes, reference
//! numbers, free text) into canonical book records; [`Sequencer`] orders
//! book subsets by the canonical print sequence. Both borrow an immutable
//! [`BookCatalog`] and perform pure index reads only.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_codes::{BookCatalog, Resolver, Scheme};
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! let book = resolver.by_scheme(Scheme::Osis, "2Pet", false).unwrap();
//! assert_eq!(book.bbb.as_str(), "PE2");
//! ```
//!
//! [`BookCatalog`]: crate::catalog::store::BookCatalog
//! [`Resolver`]: resolver::Resolver
//! [`Sequencer`]: sequence::Sequencer

pub mod resolver;
pub mod sequence;
