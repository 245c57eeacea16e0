//! Core data types for book identification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`BookCode`]: the canonical three-character book code ("BBB")
//! - [`BookRecord`]: one book's codes across every external scheme
//! - [`Scheme`], [`Section`]: scheme and section classification types
//!
//! ## Book Codes
//!
//! Different systems abbreviate the same book differently:
//!
//! | Scheme  | Genesis | 2 Peter |
//! |---------|---------|---------|
//! | BBB     | GEN     | PE2     |
//! | OSIS    | Gen     | 2Pet    |
//! | USFM    | GEN     | 2PE     |
//! | SBL     | Gen     | 2 Pet   |
//!
//! The canonical BBB form always leads with an uppercase letter; numbered
//! books put the digit last (`PE2`, not `2PE`).
//!
//! [`BookCode`]: types::BookCode
//! [`BookRecord`]: book::BookRecord
//! [`Scheme`]: types::Scheme
//! [`Section`]: types::Section

pub mod book;
pub mod types;
