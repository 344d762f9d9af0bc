//! Word-level elements: lexicon words and words placed in a syntactic slot.

use std::fmt;

use crate::category::LexicalCategory;
use crate::feature_set::FeatureSet;
use crate::features::{Flag, Inflection};

/// Inflected forms a lexicon entry lists explicitly.
///
/// An absent form is computed by the morphology rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordForms {
    /// Noun plural.
    pub plural: Option<String>,
    /// Verb past tense.
    pub past: Option<String>,
    /// Verb past participle.
    pub past_participle: Option<String>,
    /// Verb present participle.
    pub present_participle: Option<String>,
    /// Verb third person singular present.
    pub present3s: Option<String>,
    /// Adjective or adverb comparative.
    pub comparative: Option<String>,
    /// Adjective or adverb superlative.
    pub superlative: Option<String>,
}

impl WordForms {
    /// Every listed form, for variant indexing.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.plural,
            &self.past,
            &self.past_participle,
            &self.present_participle,
            &self.present3s,
            &self.comparative,
            &self.superlative,
        ]
        .into_iter()
        .filter_map(|form| form.as_deref())
    }
}

/// A word as stored in the lexicon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordElement {
    /// Uninflected form.
    pub base_form: String,
    /// Part of speech.
    pub category: LexicalCategory,
    /// Lexicon identifier, if any.
    pub id: Option<String>,
    /// Preferred spelling when it differs from the base form.
    pub default_spelling: Option<String>,
    /// Inflectional class used when the slot names none.
    pub default_inflection: Option<Inflection>,
    /// Every inflectional class the lexicon lists for this word.
    pub inflections: Vec<Inflection>,
    /// Explicitly listed forms.
    pub forms: WordForms,
    /// Lexical features (PROPER, REFLEXIVE, PERSON, ...).
    pub features: FeatureSet,
}

impl WordElement {
    /// Creates a regular word with no listed forms.
    #[must_use]
    pub fn new(base_form: impl Into<String>, category: LexicalCategory) -> Self {
        Self {
            base_form: base_form.into(),
            category,
            id: None,
            default_spelling: None,
            default_inflection: None,
            inflections: Vec::new(),
            forms: WordForms::default(),
            features: FeatureSet::new(),
        }
    }

    /// Sets the default inflectional class.
    #[must_use]
    pub fn with_inflection(mut self, inflection: Inflection) -> Self {
        self.default_inflection = Some(inflection);
        if !self.inflections.contains(&inflection) {
            self.inflections.push(inflection);
        }
        self
    }

    /// Sets the features.
    #[must_use]
    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    /// The spelling used as the base of inflection.
    #[must_use]
    pub fn default_spelling_variant(&self) -> &str {
        self.default_spelling.as_deref().unwrap_or(&self.base_form)
    }

    /// True for words the lexicon marks uncountable.
    #[must_use]
    pub fn is_uncountable(&self) -> bool {
        self.default_inflection == Some(Inflection::Uncount)
    }
}

impl fmt::Display for WordElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordElement[{}:{}]", self.base_form, self.category)
    }
}

/// A word placed into a syntactic slot, carrying slot-local features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InflectedWordElement {
    /// Form the morphology rules start from.
    pub base_form: String,
    /// Part of speech.
    pub category: LexicalCategory,
    /// The lexicon word this slot was filled from.
    pub base_word: Option<WordElement>,
    /// Slot-local features.
    pub features: FeatureSet,
}

impl InflectedWordElement {
    /// Places a lexicon word into a slot, inheriting its lexical features.
    #[must_use]
    pub fn from_word(word: &WordElement) -> Self {
        Self {
            base_form: word.default_spelling_variant().to_string(),
            category: word.category,
            features: word.features.clone(),
            base_word: Some(word.clone()),
        }
    }

    /// Creates a slot word with no lexicon entry.
    #[must_use]
    pub fn new(base_form: impl Into<String>, category: LexicalCategory) -> Self {
        Self {
            base_form: base_form.into(),
            category,
            base_word: None,
            features: FeatureSet::new(),
        }
    }

    /// Inflectional class: the slot's base word class, else regular.
    #[must_use]
    pub fn inflection(&self) -> Inflection {
        self.base_word
            .as_ref()
            .and_then(|word| word.default_inflection)
            .unwrap_or(Inflection::Regular)
    }

    /// Explicit form listed by the lexicon word, if any.
    #[must_use]
    pub fn listed_form(&self, pick: impl Fn(&WordForms) -> Option<&String>) -> Option<&str> {
        self.base_word
            .as_ref()
            .and_then(|word| pick(&word.forms))
            .map(String::as_str)
    }

    /// Reads a flag from the slot, falling back to the lexicon word.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        self.features
            .flag_value(flag)
            .or_else(|| {
                self.base_word
                    .as_ref()
                    .and_then(|word| word.features.flag_value(flag))
            })
            .unwrap_or(false)
    }
}

impl fmt::Display for InflectedWordElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InflectedWordElement[{}:{}]", self.base_form, self.category)
    }
}
