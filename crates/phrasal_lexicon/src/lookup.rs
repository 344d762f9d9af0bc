//! The lookup interface the realisation pipeline consumes.

use phrasal_foundation::{LexicalCategory, WordElement};

/// Read-only word lookup.
///
/// Implementations are shared between realisers, so they must be safe to
/// read from several threads at once.
pub trait LexiconLookup: Send + Sync {
    /// Finds the word for a base form, inflected variant or id.
    ///
    /// Never fails: an unknown word comes back as a fresh regular word of the
    /// requested category.
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> WordElement;

    /// True if a word with this base form and category is listed.
    fn has_word(&self, base: &str, category: LexicalCategory) -> bool;
}

/// A lexicon that knows no words; every lookup yields a regular word.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyLexicon;

impl LexiconLookup for EmptyLexicon {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> WordElement {
        WordElement::new(base, category)
    }

    fn has_word(&self, _base: &str, _category: LexicalCategory) -> bool {
        false
    }
}
