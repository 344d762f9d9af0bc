//! Indexed in-memory lexicon.
//!
//! Words are stored once and indexed by base form, by every inflected
//! variant, by id and by category. The indexes are persistent maps, so
//! cloning a lexicon to hand to another realiser is cheap.

use im::{HashMap, Vector};
use phrasal_foundation::{LexicalCategory, Result, WordElement};
use tracing::{debug, warn};

use crate::english::ENGLISH;
use crate::entry::{WordEntry, parse_source};
use crate::lookup::LexiconLookup;

/// Forms "be" is also found under.
const BE_VARIANTS: &[&str] = &["is", "am", "are", "was", "were"];

/// An indexed word store.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: Vector<WordElement>,
    by_base: HashMap<String, Vector<usize>>,
    by_variant: HashMap<String, Vector<usize>>,
    by_id: HashMap<String, usize>,
    by_category: HashMap<LexicalCategory, Vector<usize>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexicon holding the built-in English word list.
    ///
    /// A malformed line is logged and skipped.
    #[must_use]
    pub fn english() -> Self {
        let mut lexicon = Self::new();
        for result in parse_source(ENGLISH) {
            match result {
                Ok(word) => lexicon.add_word(word),
                Err(e) => warn!(error = %e, context = ?e.context, "skipping lexicon entry"),
            }
        }
        debug!(words = lexicon.len(), "built English lexicon");
        lexicon
    }

    /// Creates a lexicon from a word list.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line; see [`crate::entry`] for the format.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.add_source(source)?;
        Ok(lexicon)
    }

    /// Adds every word of a word list.
    ///
    /// Nothing is added unless the whole list parses.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line.
    pub fn add_source(&mut self, source: &str) -> Result<()> {
        let words = parse_source(source).collect::<Result<Vec<_>>>()?;
        for word in words {
            self.add_word(word);
        }
        Ok(())
    }

    /// Builds and adds an entry.
    ///
    /// # Errors
    ///
    /// Fails when the entry names a bad inflection code or feature value.
    pub fn add(&mut self, entry: WordEntry) -> Result<()> {
        let word = entry.build()?;
        self.add_word(word);
        Ok(())
    }

    /// Adds a word and indexes it.
    pub fn add_word(&mut self, word: WordElement) {
        let index = self.words.len();

        push_index(&mut self.by_base, word.base_form.clone(), index);
        for variant in variants(&word) {
            push_index(&mut self.by_variant, variant, index);
        }
        if word.base_form == "be" && word.category == LexicalCategory::Verb {
            for variant in BE_VARIANTS {
                push_index(&mut self.by_variant, (*variant).to_string(), index);
            }
        }
        if let Some(id) = &word.id {
            if self.by_id.contains_key(id) {
                warn!(id = %id, "lexicon id occurs more than once");
            }
            self.by_id.insert(id.clone(), index);
        }
        self.by_category
            .entry(word.category)
            .or_insert_with(Vector::new)
            .push_back(index);

        self.words.push_back(word);
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Every word with this base form and category.
    #[must_use]
    pub fn get_words(&self, base: &str, category: LexicalCategory) -> Vec<WordElement> {
        self.candidates(&self.by_base, base, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The word with this base form, or a fresh regular word.
    #[must_use]
    pub fn get_word(&self, base: &str, category: LexicalCategory) -> WordElement {
        let candidates = self.candidates(&self.by_base, base, category);
        select_matching(&candidates, base, category)
    }

    /// The word one of whose inflected forms is `variant`, or a fresh regular word.
    #[must_use]
    pub fn get_word_from_variant(&self, variant: &str, category: LexicalCategory) -> WordElement {
        let candidates = self.candidates(&self.by_variant, variant, category);
        select_matching(&candidates, variant, category)
    }

    /// The word with this id.
    #[must_use]
    pub fn get_word_by_id(&self, id: &str) -> Option<WordElement> {
        self.by_id.get(id).and_then(|&i| self.words.get(i)).cloned()
    }

    /// True if some word of this category has `variant` among its forms.
    #[must_use]
    pub fn has_word_from_variant(&self, variant: &str, category: LexicalCategory) -> bool {
        !self.candidates(&self.by_variant, variant, category).is_empty()
    }

    /// True if a word has this id.
    #[must_use]
    pub fn has_word_by_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Every word of a category. `Any` lists the whole lexicon.
    #[must_use]
    pub fn words_in_category(&self, category: LexicalCategory) -> Vec<WordElement> {
        if category == LexicalCategory::Any {
            return self.words.iter().cloned().collect();
        }
        self.by_category
            .get(&category)
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|&i| self.words.get(i))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn candidates(
        &self,
        index: &HashMap<String, Vector<usize>>,
        key: &str,
        category: LexicalCategory,
    ) -> Vec<&WordElement> {
        index
            .get(key)
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|&i| self.words.get(i))
                    .filter(|word| category.matches(word.category))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl LexiconLookup for Lexicon {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> WordElement {
        if self.has_word(base, category) {
            self.get_word(base, category)
        } else if self.has_word_from_variant(base, category) {
            self.get_word_from_variant(base, category)
        } else if let Some(word) = self.get_word_by_id(base) {
            word
        } else {
            WordElement::new(base, category)
        }
    }

    fn has_word(&self, base: &str, category: LexicalCategory) -> bool {
        !self.candidates(&self.by_base, base, category).is_empty()
    }
}

fn push_index(index: &mut HashMap<String, Vector<usize>>, key: String, value: usize) {
    index.entry(key).or_insert_with(Vector::new).push_back(value);
}

/// Picks the candidate whose base form matches exactly.
///
/// A candidate that differs only in case yields a fresh uncategorised word,
/// so "may" the modal is not mistaken for "May" the month.
fn select_matching(
    candidates: &[&WordElement],
    base: &str,
    category: LexicalCategory,
) -> WordElement {
    let Some(first) = candidates.first() else {
        return WordElement::new(base, category);
    };
    if let Some(exact) = candidates.iter().find(|word| word.base_form == base) {
        return (*exact).clone();
    }
    if first.base_form.to_lowercase() == base.to_lowercase() {
        return WordElement::new(base, LexicalCategory::Any);
    }
    (*first).clone()
}

/// The base form plus every inflected form a word can take.
fn variants(word: &WordElement) -> Vec<String> {
    let forms = &word.forms;
    let pick = |listed: &Option<String>, suffix: &str| {
        listed
            .clone()
            .unwrap_or_else(|| attach_suffix(&word.base_form, suffix))
    };

    let mut variants = vec![word.base_form.clone()];
    match word.category {
        LexicalCategory::Noun => variants.push(pick(&forms.plural, "s")),
        LexicalCategory::Adjective => {
            variants.push(pick(&forms.comparative, "er"));
            variants.push(pick(&forms.superlative, "est"));
        }
        LexicalCategory::Verb => {
            variants.push(pick(&forms.present3s, "s"));
            variants.push(pick(&forms.past, "ed"));
            variants.push(pick(&forms.past_participle, "ed"));
            variants.push(pick(&forms.present_participle, "ing"));
        }
        _ => {}
    }
    variants.sort();
    variants.dedup();
    variants
}

/// Adds a suffix with the usual spelling adjustments.
fn attach_suffix(base: &str, suffix: &str) -> String {
    let mut stem = base.to_string();

    // cry + s = cries
    if stem.ends_with('y') && !suffix.starts_with('i') {
        stem.pop();
        stem.push_str("ie");
    }
    // like + ed = liked
    if stem.ends_with('e') && (suffix.starts_with('e') || suffix.starts_with('i')) {
        stem.pop();
    }
    // watch + s = watches
    if suffix.starts_with('s')
        && ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|ending| stem.ends_with(ending))
    {
        stem.push('e');
    }

    stem + suffix
}
