use std::collections::HashMap;

use crate::core::book::BookRecord;
use crate::core::types::Scheme;

use super::store::CatalogError;

/// Fixed priority order for merging scheme codes into the flat
/// all-abbreviations map. Earlier schemes win on collision, so the widely
/// used identifier schemes take precedence over bare number strings.
pub const SCHEME_MERGE_ORDER: [Scheme; 13] = [
    Scheme::Osis,
    Scheme::Usfm,
    Scheme::Sword,
    Scheme::Sbl,
    Scheme::Net,
    Scheme::Short,
    Scheme::Drupal,
    Scheme::Byzantine,
    Scheme::Unbound,
    Scheme::Ccel,
    Scheme::Bibledit,
    Scheme::UsfmNumber,
    Scheme::UsxNumber,
];

/// Reverse-lookup maps derived once from the book table
///
/// Built eagerly during catalog construction and immutable afterwards.
/// All keys are uppercased; candidate lists preserve table order, which
/// makes the table's order the documented tie-break for ambiguous codes
/// (first candidate = preferred).
#[derive(Debug)]
pub struct CodeIndex {
    /// BBB -> index in the book table
    by_bbb: HashMap<String, usize>,

    /// Reference number -> index in the book table
    by_number: HashMap<u16, usize>,

    /// Per scheme: UPPERCASED code -> ordered candidate indices
    by_scheme: HashMap<Scheme, HashMap<String, Vec<usize>>>,

    /// Every scheme's codes flattened into one map, merged in
    /// [`SCHEME_MERGE_ORDER`]; first-seen mapping wins on collision
    all_abbreviations: HashMap<String, usize>,
}

impl CodeIndex {
    /// Build all reverse maps from the record table
    ///
    /// A duplicate canonical code or reference number is a configuration
    /// error in the data table and aborts construction; no partially built
    /// index is ever returned.
    pub(crate) fn build(books: &[BookRecord]) -> Result<Self, CatalogError> {
        let mut by_bbb = HashMap::with_capacity(books.len());
        let mut by_number = HashMap::with_capacity(books.len());

        for (i, book) in books.iter().enumerate() {
            if !book.bbb.is_well_formed() {
                return Err(CatalogError::MalformedCode(book.bbb.to_string()));
            }
            if !(1..=999).contains(&book.number) {
                return Err(CatalogError::NumberOutOfRange {
                    bbb: book.bbb.to_string(),
                    number: book.number,
                });
            }
            if by_bbb.insert(book.bbb.as_str().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateCode(book.bbb.to_string()));
            }
            if by_number.insert(book.number, i).is_some() {
                return Err(CatalogError::DuplicateNumber(book.number));
            }
        }

        let mut by_scheme: HashMap<Scheme, HashMap<String, Vec<usize>>> = HashMap::new();
        for &scheme in &SCHEME_MERGE_ORDER {
            let map = by_scheme.entry(scheme).or_default();
            for (i, book) in books.iter().enumerate() {
                if let Some(code) = book.scheme_code(scheme) {
                    map.entry(code.to_uppercase()).or_default().push(i);
                }
            }
        }

        let mut all_abbreviations = HashMap::new();
        for &scheme in &SCHEME_MERGE_ORDER {
            for (i, book) in books.iter().enumerate() {
                if let Some(code) = book.scheme_code(scheme) {
                    all_abbreviations.entry(code.to_uppercase()).or_insert(i);
                }
            }
        }

        Ok(Self {
            by_bbb,
            by_number,
            by_scheme,
            all_abbreviations,
        })
    }

    /// Look up a canonical code; `upper` must already be uppercased
    pub fn lookup_bbb(&self, upper: &str) -> Option<usize> {
        self.by_bbb.get(upper).copied()
    }

    pub fn lookup_number(&self, number: u16) -> Option<usize> {
        self.by_number.get(&number).copied()
    }

    /// Ordered candidate indices for a scheme code (empty when unmapped);
    /// `upper` must already be uppercased
    pub fn candidates(&self, scheme: Scheme, upper: &str) -> &[usize] {
        self.by_scheme
            .get(&scheme)
            .and_then(|map| map.get(upper))
            .map_or(&[], Vec::as_slice)
    }

    /// Look up the merged all-abbreviations map; `upper` must already be
    /// uppercased
    pub fn lookup_abbreviation(&self, upper: &str) -> Option<usize> {
        self.all_abbreviations.get(upper).copied()
    }
}
