//! Command-line interface for book-codes.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Resolve an external code, number, or free text to a BBB
//! - **sequence**: Print the canonical print-order sequence, or reorder a subset
//! - **sort**: Sort citations into canonical order
//! - **catalog**: List, show, or export books from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Resolve an OSIS code
//! book-codes lookup 2Pet --scheme osis
//!
//! # Resolve free text
//! book-codes lookup "The Revelation"
//!
//! # Resolve a reference number
//! book-codes lookup 42 --number
//!
//! # Reorder books to print order
//! book-codes sequence REV GEN PSA
//!
//! # Sort citations
//! book-codes sort EXO.1.1 GEN.2.4 GEN.1.1a
//!
//! # JSON output for scripting
//! book-codes lookup Job --format json
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod lookup;
pub mod sequence;
pub mod sort;

#[derive(Parser)]
#[command(name = "book-codes")]
#[command(version)]
#[command(about = "Look up and canonicalize Bible book identifiers across reference schemes")]
#[command(
    long_about = "book-codes maps book identifiers from a dozen external schemes (OSIS, USFM, USX, Sword, SBL, CCEL, NET Bible, DrupalBible, Byzantine, Unbound Bible, Bibledit) onto one canonical three-character code, and back.\n\nIt can also order books by the canonical print sequence and sort chapter/verse citations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a code, number, or free text to a canonical book
    Lookup(lookup::LookupArgs),

    /// Print the canonical print-order sequence, or reorder a subset
    Sequence(sequence::SequenceArgs),

    /// Sort citations (BBB.chapter.verse forms) into canonical order
    Sort(sort::SortArgs),

    /// Manage the book catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
