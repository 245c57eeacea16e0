use serde::{Deserialize, Serialize};

use crate::core::types::{BookCode, Scheme, Section};

/// One canonical book with its codes across all external schemes
///
/// Records come from the static data table and are never mutated after
/// catalog construction. Scheme fields are `None` where a scheme has no
/// code for the book (e.g. Byzantine covers only the New Testament).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    /// Canonical reference abbreviation (three characters, letter first)
    pub bbb: BookCode,

    /// Reference number, unique, 1..=999; 1..=66 is the Protestant canon order
    pub number: u16,

    /// Original-language name
    pub book_name: String,

    /// Slash-separated English name variants, first = preferred
    ///
    /// These are a processing guide only, not an internationalized
    /// human interface.
    pub english_names: String,

    /// Comma-separated expected chapter counts as text, or absent
    ///
    /// A list because some books have canon-tradition-dependent counts
    /// (e.g. Daniel with or without the Greek additions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_chapters: Option<String>,

    /// Typical printed-Bible section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_section: Option<Section>,

    /// Codes of visually/textually similar books, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_books: Option<Vec<BookCode>>,

    // === External scheme codes ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_abbreviation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sword: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usfm: Option<String>,

    /// Two-digit USFM number string (Matthew is "41"; "40" is skipped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usfm_number: Option<String>,

    /// Three-digit USX number string (no gap: Matthew is "040")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usx_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sbl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drupal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantine: Option<String>,

    /// Unbound Bible code: two digits plus an uppercase letter (e.g. "01O")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbound: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibledit: Option<String>,
}

impl BookRecord {
    /// The code this book carries in the given scheme, if any
    #[must_use]
    pub fn scheme_code(&self, scheme: Scheme) -> Option<&str> {
        let code = match scheme {
            Scheme::Osis => &self.osis,
            Scheme::Sword => &self.sword,
            Scheme::Usfm => &self.usfm,
            Scheme::UsfmNumber => &self.usfm_number,
            Scheme::UsxNumber => &self.usx_number,
            Scheme::Ccel => &self.ccel,
            Scheme::Sbl => &self.sbl,
            Scheme::Net => &self.net,
            Scheme::Drupal => &self.drupal,
            Scheme::Byzantine => &self.byzantine,
            Scheme::Unbound => &self.unbound,
            Scheme::Bibledit => &self.bibledit,
            Scheme::Short => &self.short_abbreviation,
        };
        code.as_deref()
    }

    /// Preferred English name (first slash-separated variant)
    #[must_use]
    pub fn english_name(&self) -> &str {
        self.english_names
            .split('/')
            .next()
            .unwrap_or(&self.english_names)
            .trim()
    }

    /// All English name variants, preferred first
    #[must_use]
    pub fn english_name_list(&self) -> Vec<&str> {
        self.english_names.split('/').map(str::trim).collect()
    }

    /// Expected chapter counts, one entry per canon tradition
    ///
    /// Empty when the table has no chapter data for this book (front/back
    /// matter and similar non-chapter material).
    #[must_use]
    pub fn expected_chapter_counts(&self) -> Vec<u16> {
        self.expected_chapters
            .as_deref()
            .map(|text| {
                text.split(',')
                    .filter_map(|part| part.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Largest expected chapter count, or -1 when the table has none
    #[must_use]
    pub fn max_chapters(&self) -> i32 {
        self.expected_chapter_counts()
            .into_iter()
            .fold(-1, |max, n| max.max(i32::from(n)))
    }

    /// True when every tradition gives this book exactly one chapter
    #[must_use]
    pub fn is_single_chapter(&self) -> bool {
        self.expected_chapters.as_deref() == Some("1")
    }

    /// True when the book is expected to carry chapter/verse structure at all
    #[must_use]
    pub fn is_chapter_verse(&self) -> bool {
        self.expected_chapters.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bbb: &str, number: u16, chapters: Option<&str>) -> BookRecord {
        BookRecord {
            bbb: BookCode::new(bbb),
            number,
            book_name: String::new(),
            english_names: "Genesis/First Book of Moses".to_string(),
            expected_chapters: chapters.map(String::from),
            typical_section: Some(Section::OldTestament),
            alternative_books: None,
            short_abbreviation: None,
            osis: Some("Gen".to_string()),
            sword: None,
            usfm: None,
            usfm_number: None,
            usx_number: None,
            ccel: None,
            sbl: None,
            net: None,
            drupal: None,
            byzantine: None,
            unbound: None,
            bibledit: None,
        }
    }

    #[test]
    fn test_english_name_takes_first_variant() {
        let r = record("GEN", 1, Some("50"));
        assert_eq!(r.english_name(), "Genesis");
        assert_eq!(
            r.english_name_list(),
            vec!["Genesis", "First Book of Moses"]
        );
    }

    #[test]
    fn test_chapter_counts_single() {
        let r = record("GEN", 1, Some("50"));
        assert_eq!(r.expected_chapter_counts(), vec![50]);
        assert_eq!(r.max_chapters(), 50);
        assert!(!r.is_single_chapter());
        assert!(r.is_chapter_verse());
    }

    #[test]
    fn test_chapter_counts_tradition_dependent() {
        let r = record("DAN", 27, Some("12,14"));
        assert_eq!(r.expected_chapter_counts(), vec![12, 14]);
        assert_eq!(r.max_chapters(), 14);
    }

    #[test]
    fn test_chapter_counts_absent() {
        let r = record("FRT", 998, None);
        assert!(r.expected_chapter_counts().is_empty());
        assert_eq!(r.max_chapters(), -1);
        assert!(!r.is_single_chapter());
        assert!(!r.is_chapter_verse());
    }

    #[test]
    fn test_single_chapter() {
        let r = record("OBA", 31, Some("1"));
        assert!(r.is_single_chapter());
        assert_eq!(r.max_chapters(), 1);
    }

    #[test]
    fn test_scheme_code_lookup() {
        let r = record("GEN", 1, Some("50"));
        assert_eq!(r.scheme_code(Scheme::Osis), Some("Gen"));
        assert_eq!(r.scheme_code(Scheme::Byzantine), None);
    }
}
