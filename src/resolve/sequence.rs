use crate::catalog::store::BookCatalog;
use crate::core::types::BookCode;

use super::resolver::ResolveError;

/// Orders book subsets by the canonical print sequence
///
/// The print sequence is a fixed list stored alongside the table; it
/// reflects print convention and is deliberately not the reference-number
/// order (additional-canon books interleave with the books they extend).
pub struct Sequencer<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> Sequencer<'a> {
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// The full canonical print-order sequence
    #[must_use]
    pub fn sequence(&self) -> &'a [BookCode] {
        self.catalog.sequence()
    }

    /// Reorder a subset of codes into canonical sequence order
    ///
    /// Every input code must be a recognized canonical BBB (a caller error
    /// otherwise, checked up front). A code repeated in the input is
    /// emitted once, at its single canonical position.
    pub fn sequence_of<S: AsRef<str>>(&self, subset: &[S]) -> Result<Vec<BookCode>, ResolveError> {
        self.sequence_by_key(subset.iter().collect(), |s| s.as_ref())
            .map(|items| items.into_iter().map(|s| BookCode::new(s.as_ref())).collect())
    }

    /// Reorder arbitrary entries into canonical sequence order, taking each
    /// entry's BBB via `key`
    ///
    /// This is the compound-entry form: callers sequencing richer tuples
    /// (code plus attached data) keep their values intact.
    pub fn sequence_by_key<T, F>(&self, items: Vec<T>, key: F) -> Result<Vec<T>, ResolveError>
    where
        F: Fn(&T) -> &str,
    {
        for item in &items {
            let bbb = key(item);
            if self.catalog.get(bbb).is_none() {
                return Err(ResolveError::InvalidInput(format!(
                    "'{bbb}' is not a recognized book code"
                )));
            }
        }

        let mut remaining: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut result = Vec::with_capacity(remaining.len());

        for canonical in self.catalog.sequence() {
            // First matching input entry per canonical position
            for slot in &mut remaining {
                let matches = slot
                    .as_ref()
                    .is_some_and(|item| key(item) == canonical.as_str());
                if matches {
                    if let Some(item) = slot.take() {
                        result.push(item);
                    }
                    break;
                }
            }
        }

        Ok(result)
    }
}

/// Turn a code like `SA1` into the conventional display form `1SA`
///
/// Canonical codes keep the digit last so they can serve as identifiers;
/// human-facing output usually wants the digit first.
#[must_use]
pub fn tidy_bbb(bbb: &str) -> String {
    let chars: Vec<char> = bbb.chars().collect();
    match chars.as_slice() {
        [a, b, c] if c.is_ascii_digit() => format!("{c}{a}{b}"),
        _ => bbb.to_string(),
    }
}

/// [`tidy_bbb`] over a list of codes
#[must_use]
pub fn tidy_bbbs<S: AsRef<str>>(bbbs: &[S]) -> Vec<String> {
    bbbs.iter().map(|b| tidy_bbb(b.as_ref())).collect()
}
