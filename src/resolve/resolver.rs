use thiserror::Error;

use crate::catalog::store::BookCatalog;
use crate::core::book::BookRecord;
use crate::core::types::{BookCode, Scheme, Section};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The identifier has no mapping in the requested scheme; recoverable,
    /// the caller decides any further fallback
    #[error("No book found for '{0}'")]
    NotFound(String),

    /// A loose match resolved to more than one candidate; surfaced
    /// distinctly from [`ResolveError::NotFound`] so callers can
    /// special-case it
    #[error("'{0}' is ambiguous: {1} book codes match")]
    Ambiguous(String, usize),

    /// Caller error: malformed number, empty text, and similar; never
    /// silently coerced
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Books where chapters are real units rather than narrative continuation
/// (Psalms are separate poems, Lamentations separate acrostics). A content
/// judgment, not derivable from the table, so it stays an explicit list.
const CHAPTER_UNIT_BOOKS: [&str; 3] = ["PSA", "PS2", "LAM"];

/// European Deuterocanon/Apocrypha books. Another explicit content list;
/// membership is a tradition call, not encoded per record.
const DEUTEROCANON_BOOKS: [&str; 15] = [
    "TOB", "JDT", "ESG", "WIS", "SIR", "BAR", "LJE", "PAZ", "SUS", "BEL", "MA1", "MA2", "GES",
    "LES", "MAN",
];

/// Resolves external identifiers to canonical book records
///
/// Borrows the catalog; every operation is a pure read of the pre-built
/// indexes, so a `Resolver` can be created freely wherever a catalog
/// reference is in scope.
pub struct Resolver<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// True when `code` is a canonical BBB in this catalog (exact form)
    #[must_use]
    pub fn is_valid_bbb(&self, code: &str) -> bool {
        self.catalog.index().lookup_bbb(code).is_some()
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }

    /// All canonical codes in table order
    #[must_use]
    pub fn all_bbbs(&self) -> Vec<&BookCode> {
        self.catalog.books().iter().map(|b| &b.bbb).collect()
    }

    /// The record for a canonical code
    pub fn get(&self, bbb: &str) -> Result<&'a BookRecord, ResolveError> {
        self.catalog
            .get(bbb)
            .ok_or_else(|| ResolveError::NotFound(bbb.to_string()))
    }

    /// The book with the given reference number
    ///
    /// Numbers 1..=66 follow the Protestant canon order (GEN..REV); higher
    /// numbers follow the table's own ordering.
    pub fn by_number(&self, number: u16) -> Result<&'a BookRecord, ResolveError> {
        if !(1..=999).contains(&number) {
            return Err(ResolveError::InvalidInput(format!(
                "reference number {number} outside 1..=999"
            )));
        }
        self.catalog
            .index()
            .lookup_number(number)
            .map(|idx| self.catalog.record(idx))
            .ok_or_else(|| ResolveError::NotFound(format!("reference number {number}")))
    }

    /// The reference number for a canonical code
    pub fn number_of(&self, bbb: &str) -> Result<u16, ResolveError> {
        Ok(self.get(bbb)?.number)
    }

    /// Resolve a code in an external scheme
    ///
    /// The code is uppercased before lookup. With `strict` the exact scheme
    /// is consulted and nothing else; otherwise, when the code is absent
    /// from that scheme's index, one documented secondary scheme is tried
    /// (OSIS falls back to Sword). Ambiguous codes resolve to the first
    /// (preferred) candidate; use [`Resolver::candidates`] to see them all.
    pub fn by_scheme(
        &self,
        scheme: Scheme,
        code: &str,
        strict: bool,
    ) -> Result<&'a BookRecord, ResolveError> {
        let upper = code.to_uppercase();

        let hits = self.catalog.index().candidates(scheme, &upper);
        if let Some(&idx) = hits.first() {
            return Ok(self.catalog.record(idx));
        }

        if !strict {
            if let Some(secondary) = scheme.fallback() {
                tracing::debug!(%scheme, %secondary, code, "code absent, trying fallback scheme");
                let hits = self.catalog.index().candidates(secondary, &upper);
                if let Some(&idx) = hits.first() {
                    return Ok(self.catalog.record(idx));
                }
            }
        }

        Err(ResolveError::NotFound(format!("{scheme} code '{code}'")))
    }

    /// All candidate records for a scheme code, preferred first
    #[must_use]
    pub fn candidates(&self, scheme: Scheme, code: &str) -> Vec<&'a BookRecord> {
        self.catalog
            .index()
            .candidates(scheme, &code.to_uppercase())
            .iter()
            .map(|&idx| self.catalog.record(idx))
            .collect()
    }

    /// Resolve free text to a book (English only)
    ///
    /// Tries, in order: the uppercased text as a canonical BBB, an exact
    /// hit in the merged all-abbreviations map, then a containment scan
    /// testing every BBB as a substring of the text. The scan succeeds only
    /// when exactly one code matches; several matches report
    /// [`ResolveError::Ambiguous`] rather than guessing.
    pub fn by_free_text(&self, text: &str) -> Result<&'a BookRecord, ResolveError> {
        if text.trim().is_empty() {
            return Err(ResolveError::InvalidInput("empty text".to_string()));
        }
        let upper = text.to_uppercase();
        let index = self.catalog.index();

        if let Some(idx) = index.lookup_bbb(&upper) {
            return Ok(self.catalog.record(idx));
        }

        if let Some(idx) = index.lookup_abbreviation(&upper) {
            return Ok(self.catalog.record(idx));
        }

        let mut found = None;
        let mut match_count = 0;
        for book in self.catalog.books() {
            if upper.contains(book.bbb.as_str()) {
                match_count += 1;
                found = Some(book);
            }
        }

        match (match_count, found) {
            (1, Some(book)) => Ok(book),
            (0, _) => Err(ResolveError::NotFound(text.to_string())),
            (n, _) => Err(ResolveError::Ambiguous(text.to_string(), n)),
        }
    }

    /// Expected chapter counts for a book, one per canon tradition
    pub fn expected_chapters(&self, bbb: &str) -> Result<Vec<u16>, ResolveError> {
        Ok(self.get(bbb)?.expected_chapter_counts())
    }

    /// Largest expected chapter count, or -1 when the table has no chapter
    /// data for the book
    pub fn max_chapters(&self, bbb: &str) -> Result<i32, ResolveError> {
        Ok(self.get(bbb)?.max_chapters())
    }

    pub fn is_single_chapter_book(&self, bbb: &str) -> Result<bool, ResolveError> {
        Ok(self.get(bbb)?.is_single_chapter())
    }

    /// True when the book is expected to carry chapters and verses at all
    pub fn is_chapter_verse_book(&self, bbb: &str) -> Result<bool, ResolveError> {
        Ok(self.get(bbb)?.is_chapter_verse())
    }

    pub fn typical_section(&self, bbb: &str) -> Result<Option<Section>, ResolveError> {
        Ok(self.get(bbb)?.typical_section)
    }

    /// Codes of similar alternative books, or None when there are none
    pub fn alternative_books(&self, bbb: &str) -> Result<Option<&'a [BookCode]>, ResolveError> {
        Ok(self.get(bbb)?.alternative_books.as_deref())
    }

    /// Preferred English name (processing guide only, not i18n)
    pub fn english_name(&self, bbb: &str) -> Result<&'a str, ResolveError> {
        Ok(self.get(bbb)?.english_name())
    }

    pub fn english_name_list(&self, bbb: &str) -> Result<Vec<&'a str>, ResolveError> {
        Ok(self.get(bbb)?.english_name_list())
    }

    /// The book's code in an external scheme, if the scheme covers it
    pub fn scheme_code(&self, bbb: &str, scheme: Scheme) -> Result<Option<&'a str>, ResolveError> {
        Ok(self.get(bbb)?.scheme_code(scheme))
    }

    /// All books every tradition gives exactly one chapter
    #[must_use]
    pub fn single_chapter_books(&self) -> Vec<&'a BookCode> {
        self.catalog
            .books()
            .iter()
            .filter(|b| b.is_single_chapter())
            .map(|b| &b.bbb)
            .collect()
    }

    /// OSIS codes of the single-chapter books (for OSIS tooling that
    /// special-cases them)
    #[must_use]
    pub fn osis_single_chapter_books(&self) -> Vec<&'a str> {
        self.catalog
            .books()
            .iter()
            .filter(|b| b.is_single_chapter())
            .filter_map(|b| b.osis.as_deref())
            .collect()
    }

    /// (USFM abbreviation, scheme number, BBB) triples for every book that
    /// carries both codes; deduplicated on the USFM abbreviation,
    /// first-seen wins
    #[must_use]
    pub fn usfm_code_number_triples(&self, number_scheme: Scheme) -> Vec<(String, String, BookCode)> {
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();
        for book in self.catalog.books() {
            let (Some(abbrev), Some(number)) =
                (book.usfm.as_deref(), book.scheme_code(number_scheme))
            else {
                continue;
            };
            if seen.insert(abbrev.to_string()) {
                result.push((abbrev.to_string(), number.to_string(), book.bbb.clone()));
            }
        }
        result
    }

    /// True for a European Protestant Old Testament book (numbers 1..=39)
    pub fn is_old_testament(&self, bbb: &str) -> Result<bool, ResolveError> {
        Ok((1..=39).contains(&self.number_of(bbb)?))
    }

    /// True for a European Protestant New Testament book (numbers 40..=66)
    pub fn is_new_testament(&self, bbb: &str) -> Result<bool, ResolveError> {
        Ok((40..=66).contains(&self.number_of(bbb)?))
    }

    /// True for a European Deuterocanon/Apocrypha book
    #[must_use]
    pub fn is_deuterocanon(&self, bbb: &str) -> bool {
        DEUTEROCANON_BOOKS.contains(&bbb)
    }

    /// True when the storyline continues through chapter breaks, i.e. the
    /// chapter divisions are artificial; false for books like Psalms where
    /// each chapter is a unit of its own
    pub fn continues_through_chapters(&self, bbb: &str) -> Result<bool, ResolveError> {
        // Validate the code even though the answer only needs the list
        self.get(bbb)?;
        Ok(!CHAPTER_UNIT_BOOKS.contains(&bbb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_number_roundtrip_for_all_books() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        for bbb in resolver.all_bbbs() {
            let number = resolver.number_of(bbb.as_str()).unwrap();
            assert_eq!(&resolver.by_number(number).unwrap().bbb, bbb);
        }
    }

    #[test]
    fn test_by_number_bounds() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.by_number(1).unwrap().bbb.as_str(), "GEN");
        assert_eq!(resolver.by_number(66).unwrap().bbb.as_str(), "REV");
        assert!(matches!(
            resolver.by_number(0),
            Err(ResolveError::InvalidInput(_))
        ));
        assert!(matches!(
            resolver.by_number(1000),
            Err(ResolveError::InvalidInput(_))
        ));
        // In range but unmapped
        assert!(matches!(
            resolver.by_number(999),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_is_valid_bbb() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert!(resolver.is_valid_bbb("GEN"));
        assert!(resolver.is_valid_bbb("PE2"));
        assert!(!resolver.is_valid_bbb(""));
        assert!(!resolver.is_valid_bbb("XXX"));
        assert!(!resolver.is_valid_bbb("gen")); // exact form only
    }

    #[test]
    fn test_by_scheme_osis() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(
            resolver.by_scheme(Scheme::Osis, "Gen", false).unwrap().bbb.as_str(),
            "GEN"
        );
        // Case-normalized before lookup
        assert_eq!(
            resolver.by_scheme(Scheme::Osis, "gEn", true).unwrap().bbb.as_str(),
            "GEN"
        );
        assert!(matches!(
            resolver.by_scheme(Scheme::Osis, "NotARealCode", true),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_by_scheme_usfm_number() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        // USFM skips 40: Matthew is 41
        assert_eq!(
            resolver
                .by_scheme(Scheme::UsfmNumber, "41", true)
                .unwrap()
                .bbb
                .as_str(),
            "MAT"
        );
        // USFM maps James as JAS
        assert_eq!(
            resolver.by_scheme(Scheme::Usfm, "JAS", true).unwrap().bbb.as_str(),
            "JAM"
        );
    }

    #[test]
    fn test_osis_falls_back_to_sword_on_absence() {
        // Synthetic table: "Odes" exists only as a Sword code
        let json = r#"{
            "version": "1.0.0",
            "books": [
                {"bbb": "GEN", "number": 1, "book_name": "", "english_names": "Genesis",
                 "osis": "Gen", "sword": "Gen"},
                {"bbb": "ODE", "number": 91, "book_name": "", "english_names": "Odes",
                 "sword": "Odes"}
            ],
            "sequence": ["GEN", "ODE"]
        }"#;
        let catalog = BookCatalog::from_json(json).unwrap();
        let resolver = Resolver::new(&catalog);

        assert_eq!(
            resolver.by_scheme(Scheme::Osis, "Odes", false).unwrap().bbb.as_str(),
            "ODE"
        );
        // Strict mode never falls back
        assert!(matches!(
            resolver.by_scheme(Scheme::Osis, "Odes", true),
            Err(ResolveError::NotFound(_))
        ));
        // Fallback is one level only: OSIS -> Sword, nothing else
        assert!(matches!(
            resolver.by_scheme(Scheme::Usfm, "Odes", false),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_free_text_exact_bbb() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.by_free_text("Job").unwrap().bbb.as_str(), "JOB");
        assert_eq!(resolver.by_free_text("rev").unwrap().bbb.as_str(), "REV");
    }

    #[test]
    fn test_free_text_second_peter_spellings_agree() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        let a = resolver.by_free_text("2 Pet").unwrap();
        let b = resolver.by_free_text("2Pet").unwrap();
        let c = resolver.by_free_text("PE2").unwrap();
        assert_eq!(a.bbb.as_str(), "PE2");
        assert_eq!(a.bbb, b.bbb);
        assert_eq!(b.bbb, c.bbb);
    }

    #[test]
    fn test_free_text_containment_scan() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        // "GENESIS" is no scheme code; only the GEN substring matches
        assert_eq!(
            resolver.by_free_text("Genesis ").unwrap().bbb.as_str(),
            "GEN"
        );
        assert_eq!(
            resolver.by_free_text("The Revelation").unwrap().bbb.as_str(),
            "REV"
        );
    }

    #[test]
    fn test_free_text_ambiguity_is_not_guessed() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert!(matches!(
            resolver.by_free_text("Genesis and Exodus story"),
            Err(ResolveError::Ambiguous(_, 2))
        ));
        assert!(matches!(
            resolver.by_free_text("no such book"),
            Err(ResolveError::NotFound(_))
        ));
        assert!(matches!(
            resolver.by_free_text("   "),
            Err(ResolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_chapter_queries() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.max_chapters("PSA").unwrap(), 150);
        assert_eq!(resolver.expected_chapters("DAN").unwrap(), vec![12, 14]);
        assert_eq!(resolver.max_chapters("DAN").unwrap(), 14);
        assert!(resolver.is_single_chapter_book("OBA").unwrap());
        assert!(!resolver.is_single_chapter_book("GEN").unwrap());
        assert!(resolver.is_chapter_verse_book("GEN").unwrap());
    }

    #[test]
    fn test_sections_and_testaments() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(
            resolver.typical_section("GEN").unwrap(),
            Some(Section::OldTestament)
        );
        assert_eq!(
            resolver.typical_section("TOB").unwrap(),
            Some(Section::Deuterocanon)
        );
        assert!(resolver.is_old_testament("MAL").unwrap());
        assert!(!resolver.is_old_testament("MAT").unwrap());
        assert!(resolver.is_new_testament("REV").unwrap());
        assert!(resolver.is_deuterocanon("TOB"));
        assert!(!resolver.is_deuterocanon("GEN"));
    }

    #[test]
    fn test_alternative_books() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        let alts = resolver.alternative_books("EST").unwrap().unwrap();
        assert_eq!(alts, &[BookCode::new("ESG")]);
        assert!(resolver.alternative_books("GEN").unwrap().is_none());
    }

    #[test]
    fn test_continues_through_chapters_exceptions() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert!(!resolver.continues_through_chapters("PSA").unwrap());
        assert!(!resolver.continues_through_chapters("LAM").unwrap());
        assert!(resolver.continues_through_chapters("GEN").unwrap());
        assert!(resolver.continues_through_chapters("MAT").unwrap());
        assert!(matches!(
            resolver.continues_through_chapters("XXX"),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn test_single_chapter_books() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        let singles = resolver.single_chapter_books();
        assert!(singles.iter().any(|b| b.as_str() == "OBA"));
        assert!(singles.iter().any(|b| b.as_str() == "PHM"));
        assert!(!singles.iter().any(|b| b.as_str() == "GEN"));

        let osis = resolver.osis_single_chapter_books();
        assert!(osis.contains(&"Obad"));
        assert!(osis.contains(&"Phlm"));
    }

    #[test]
    fn test_usfm_triples() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        let triples = resolver.usfm_code_number_triples(Scheme::UsfmNumber);
        let mat = triples.iter().find(|(a, _, _)| a == "MAT").unwrap();
        assert_eq!(mat.1, "41");
        assert_eq!(mat.2.as_str(), "MAT");

        let usx = resolver.usfm_code_number_triples(Scheme::UsxNumber);
        let mat = usx.iter().find(|(a, _, _)| a == "MAT").unwrap();
        assert_eq!(mat.1, "040");
    }

    #[test]
    fn test_scheme_code_getter() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog);
        assert_eq!(
            resolver.scheme_code("GEN", Scheme::Unbound).unwrap(),
            Some("01O")
        );
        // Byzantine covers only the New Testament
        assert_eq!(resolver.scheme_code("GEN", Scheme::Byzantine).unwrap(), None);
        assert_eq!(
            resolver.scheme_code("MAT", Scheme::Byzantine).unwrap(),
            Some("MT")
        );
    }
}
