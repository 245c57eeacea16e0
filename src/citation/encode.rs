use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::store::BookCatalog;
use crate::core::types::BookCode;
use crate::resolve::resolver::Resolver;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    #[error("Unknown book code '{0}'")]
    UnknownBook(String),

    #[error("Invalid chapter '{0}': expected an integer below {MAX_CHAPTERS}")]
    InvalidChapter(String),

    #[error("Invalid verse '{0}': expected an integer below {MAX_VERSES}")]
    InvalidVerse(String),

    #[error("Invalid segment '{0}': expected a letter in a..=j")]
    InvalidSegment(char),

    #[error("Cannot parse citation '{0}': expected BBB.chapter.verse[segment]")]
    Malformed(String),
}

/// Chapter multiplier bound: the encoding reserves a factor of 100 per
/// chapter, so chapter numbers must stay below 100. Psalms 100-150 fall
/// outside this bound and are rejected rather than mis-sorted.
pub const MAX_CHAPTERS: u16 = 100;

/// Verse multiplier bound: the encoding reserves a factor of 150 per
/// verse, so verse numbers must stay below 150.
pub const MAX_VERSES: u16 = 150;

/// A (book, chapter, verse, segment) citation
///
/// Chapter and verse are kept textual because citations arrive as text and
/// verses may carry ranges ("3-5"; only the first number participates in
/// the encoding). The segment is the sub-verse letter suffix some
/// traditions use ("Gen 1:1a").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcvReference {
    pub bbb: BookCode,
    pub chapter: String,
    pub verse: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<char>,
}

impl BcvReference {
    /// Chapter and verse accept integers or numeric text
    pub fn new(bbb: impl Into<BookCode>, chapter: impl ToString, verse: impl ToString) -> Self {
        Self {
            bbb: bbb.into(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
            segment: None,
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: char) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Parse the dotted citation form `BBB.chapter.verse[segment]`
    /// (e.g. `GEN.1.1`, `PSA.119.176`, `JOS.8.1a`)
    pub fn parse(text: &str) -> Result<Self, CitationError> {
        let malformed = || CitationError::Malformed(text.to_string());

        let mut parts = text.split('.');
        let bbb = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;
        let chapter = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;
        let mut verse = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(malformed)?
            .to_string();
        if parts.next().is_some() {
            return Err(malformed());
        }

        let segment = match verse.chars().last() {
            Some(c) if c.is_ascii_alphabetic() => {
                verse.pop();
                Some(c)
            }
            _ => None,
        };

        Ok(Self {
            bbb: BookCode::new(bbb.to_uppercase()),
            chapter: chapter.to_string(),
            verse,
            segment,
        })
    }
}

impl std::fmt::Display for BcvReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.bbb, self.chapter, self.verse)?;
        if let Some(segment) = self.segment {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Encode a citation as a single integer whose numeric order matches
/// citation order
///
/// `value = (((number * 100) + chapter) * 150 + verse) * 10 + segment`,
/// where `number` is the book's reference number and `segment` is the
/// letter ordinal (a=0, b=1, ..; absent also 0). The multipliers encode
/// the [`MAX_CHAPTERS`]/[`MAX_VERSES`] data bounds, which are validated
/// here rather than assumed.
pub fn encode_reference(
    catalog: &BookCatalog,
    reference: &BcvReference,
) -> Result<u64, CitationError> {
    let resolver = Resolver::new(catalog);
    let number = resolver
        .number_of(reference.bbb.as_str())
        .map_err(|_| CitationError::UnknownBook(reference.bbb.to_string()))?;

    let chapter: u16 = reference
        .chapter
        .trim()
        .parse()
        .ok()
        .filter(|&c| c < MAX_CHAPTERS)
        .ok_or_else(|| CitationError::InvalidChapter(reference.chapter.clone()))?;

    // A verse range like "3-5" sorts by its first verse
    let first_verse = reference
        .verse
        .split('-')
        .next()
        .unwrap_or(&reference.verse);
    let verse: u16 = first_verse
        .trim()
        .parse()
        .ok()
        .filter(|&v| v < MAX_VERSES)
        .ok_or_else(|| CitationError::InvalidVerse(reference.verse.clone()))?;

    let segment = segment_ordinal(reference.segment)?;

    let mut value = u64::from(number);
    value = value * 100 + u64::from(chapter);
    value = value * 150 + u64::from(verse);
    value = value * 10 + u64::from(segment);
    Ok(value)
}

/// Stably sort citations into encoding order
///
/// Equal encodings keep their input relative order; any unencodable entry
/// fails the whole call rather than sorting partially.
pub fn sort_references(
    catalog: &BookCatalog,
    references: Vec<BcvReference>,
) -> Result<Vec<BcvReference>, CitationError> {
    let mut keyed: Vec<(u64, BcvReference)> = references
        .into_iter()
        .map(|r| encode_reference(catalog, &r).map(|key| (key, r)))
        .collect::<Result<_, _>>()?;

    // Vec::sort_by_key is stable
    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}

/// Map a segment letter to its ordinal: a=0, b=1, .., j=9; absent is 0.
/// The final `* 10` in the encoding leaves one decimal digit, so letters
/// past 'j' cannot be represented and are rejected.
fn segment_ordinal(segment: Option<char>) -> Result<u8, CitationError> {
    match segment {
        None => Ok(0),
        Some(c) => {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() && lower <= 'j' {
                Ok(lower as u8 - b'a')
            } else {
                Err(CitationError::InvalidSegment(c))
            }
        }
    }
}
