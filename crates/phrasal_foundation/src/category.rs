//! Word, phrase and document categories.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Part of speech of a single word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexicalCategory {
    /// Matches every category in lookups.
    #[default]
    Any,
    /// Punctuation or other symbol.
    Symbol,
    /// Noun.
    Noun,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Verb.
    Verb,
    /// Determiner.
    Determiner,
    /// Pronoun.
    Pronoun,
    /// Conjunction.
    Conjunction,
    /// Preposition.
    Preposition,
    /// Complementiser ("that").
    Complementiser,
    /// Modal verb.
    Modal,
    /// Auxiliary verb.
    Auxiliary,
}

impl LexicalCategory {
    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Symbol => "SYMBOL",
            Self::Noun => "NOUN",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
            Self::Verb => "VERB",
            Self::Determiner => "DETERMINER",
            Self::Pronoun => "PRONOUN",
            Self::Conjunction => "CONJUNCTION",
            Self::Preposition => "PREPOSITION",
            Self::Complementiser => "COMPLEMENTISER",
            Self::Modal => "MODAL",
            Self::Auxiliary => "AUXILIARY",
        }
    }

    /// True if a word of category `other` satisfies a lookup for `self`.
    #[must_use]
    pub fn matches(self, other: LexicalCategory) -> bool {
        self == Self::Any || self == other
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexicalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_ascii_uppercase().as_str() {
            "ANY" => Self::Any,
            "SYMBOL" => Self::Symbol,
            "NOUN" => Self::Noun,
            "ADJECTIVE" => Self::Adjective,
            "ADVERB" => Self::Adverb,
            "VERB" => Self::Verb,
            "DETERMINER" => Self::Determiner,
            "PRONOUN" => Self::Pronoun,
            "CONJUNCTION" => Self::Conjunction,
            "PREPOSITION" => Self::Preposition,
            "COMPLEMENTISER" => Self::Complementiser,
            "MODAL" => Self::Modal,
            "AUXILIARY" => Self::Auxiliary,
            _ => return Err(Error::invalid_enum_value("CATEGORY", s)),
        };
        Ok(category)
    }
}

/// Category of a phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhraseCategory {
    /// Clause (sentence-level phrase with subjects and a verb phrase).
    Clause,
    /// Adjective phrase.
    AdjectivePhrase,
    /// Adverb phrase.
    AdverbPhrase,
    /// Noun phrase.
    NounPhrase,
    /// Prepositional phrase.
    PrepositionalPhrase,
    /// Verb phrase.
    VerbPhrase,
    /// Phrase wrapping canned text.
    CannedText,
}

impl PhraseCategory {
    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clause => "CLAUSE",
            Self::AdjectivePhrase => "ADJECTIVE_PHRASE",
            Self::AdverbPhrase => "ADVERB_PHRASE",
            Self::NounPhrase => "NOUN_PHRASE",
            Self::PrepositionalPhrase => "PREPOSITIONAL_PHRASE",
            Self::VerbPhrase => "VERB_PHRASE",
            Self::CannedText => "CANNED_TEXT",
        }
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a document-structure element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentCategory {
    /// Whole document.
    Document,
    /// Section with a title.
    Section,
    /// Paragraph of sentences.
    Paragraph,
    /// Single sentence.
    Sentence,
    /// Bulleted list.
    List,
    /// Numbered list.
    EnumeratedList,
    /// Item of a list.
    ListItem,
}

impl DocumentCategory {
    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Section => "SECTION",
            Self::Paragraph => "PARAGRAPH",
            Self::Sentence => "SENTENCE",
            Self::List => "LIST",
            Self::EnumeratedList => "ENUMERATED_LIST",
            Self::ListItem => "LIST_ITEM",
        }
    }

    /// True if an element of category `child` may sit directly inside `self`.
    ///
    /// `None` stands for any non-document element (phrases, words, text).
    #[must_use]
    pub fn has_sub_part(self, child: Option<DocumentCategory>) -> bool {
        match (self, child) {
            (Self::Document, Some(c)) => !matches!(c, Self::Document | Self::ListItem),
            (Self::Section, Some(c)) => matches!(c, Self::Paragraph | Self::Section),
            (Self::Paragraph, Some(c)) => matches!(c, Self::Sentence | Self::List),
            (Self::List | Self::EnumeratedList, Some(c)) => c == Self::ListItem,
            (Self::Sentence | Self::ListItem, None) => true,
            (Self::ListItem, Some(c)) => matches!(c, Self::Sentence | Self::List),
            _ => false,
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
