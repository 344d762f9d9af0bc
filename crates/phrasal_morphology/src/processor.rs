//! The morphology stage: slot words in, text out.

use phrasal_foundation::{
    CoordinatedPhraseElement, DiscourseFunction, DocumentElement, Element, Flag,
    InflectedWordElement, LexicalCategory, ListElement, StringElement,
};
use phrasal_lexicon::LexiconLookup;
use tracing::{trace, warn};

use crate::determiner;
use crate::pronoun;
use crate::rules;

/// Realises slot words into text.
///
/// Structure is kept: lists stay lists, coordinations keep their
/// coordinates and documents their components. Everything else that is
/// not a word passes through unchanged.
pub struct MorphologyProcessor<'a> {
    lexicon: &'a dyn LexiconLookup,
}

impl<'a> MorphologyProcessor<'a> {
    /// Creates a processor that attaches lexicon words from `lexicon`.
    #[must_use]
    pub fn new(lexicon: &'a dyn LexiconLookup) -> Self {
        Self { lexicon }
    }

    /// Realises a single element.
    #[must_use]
    pub fn realise(&self, element: &Element) -> Element {
        match element {
            Element::Inflected(word) => self.inflect(word),
            Element::Text(_) => element.clone(),
            Element::Word(word) => Element::Text(StringElement::new(word.default_spelling_variant())),
            Element::Document(document) => Element::Document(DocumentElement {
                components: self.realise_siblings(&document.components),
                ..document.clone()
            }),
            Element::List(list) => Element::List(ListElement {
                features: list.features.clone(),
                children: self.realise_siblings(&list.children),
            }),
            Element::Coordinated(coordinated) => Element::Coordinated(CoordinatedPhraseElement {
                coordinates: coordinated
                    .coordinates
                    .iter()
                    .map(|c| self.realise(c))
                    .collect(),
                ..coordinated.clone()
            }),
            Element::Phrase(phrase) => {
                warn!(category = %phrase.category, "unrealised phrase reached morphology");
                element.clone()
            }
        }
    }

    /// Realises a sequence of siblings, replacing one-child lists by their
    /// child first.
    #[must_use]
    pub fn realise_all(&self, elements: &[Element]) -> Vec<Element> {
        self.realise_siblings(elements.iter().map(Element::flattened))
    }

    /// Each result keeps the original's APPOSITIVE flag and discourse
    /// function. A specifier agrees with the first word realised after it
    /// ("an elephant", "some dogs").
    fn realise_siblings<'e>(&self, elements: impl IntoIterator<Item = &'e Element>) -> Vec<Element> {
        let mut realised: Vec<Element> = Vec::new();
        let mut determiner: Option<usize> = None;
        let mut previous: Option<&Element> = None;

        for original in elements {
            let mut current = self.realise(original);
            current
                .features_mut()
                .set_flag_value(Flag::Appositive, original.features().flag_value(Flag::Appositive));
            if let Some(function) = original.discourse_function() {
                current.set_discourse_function(function);
            }

            if matches!(previous, Some(Element::Text(_))) && original.is_word_of(LexicalCategory::Noun) {
                if let (Some(Element::Text(canned)), Some(next)) =
                    (realised.last_mut(), current.realisation())
                {
                    determiner::fix_canned_article(canned, next);
                }
            }

            match determiner {
                None if current.discourse_function() == Some(DiscourseFunction::Specifier) => {
                    current.features_mut().number = original.features().number;
                    determiner = Some(realised.len());
                }
                Some(index) => {
                    if let Some(following) = leading_text(&current) {
                        determiner::agree(&mut realised[index], &following);
                    }
                    determiner = None;
                }
                None => {}
            }

            realised.push(current);
            previous = Some(original);
        }
        realised
    }

    fn inflect(&self, word: &InflectedWordElement) -> Element {
        if word.flag(Flag::NonMorph) {
            return rules::uninflected(word);
        }

        let mut word = word.clone();
        if word.base_word.is_none() {
            word.base_word = Some(self.lexicon.lookup_word(&word.base_form, word.category));
        }
        trace!(base = %word.base_form, category = %word.category, features = %word.features, "inflecting");

        match word.category {
            LexicalCategory::Pronoun => pronoun::inflect(&word),
            LexicalCategory::Noun => rules::noun(&word),
            LexicalCategory::Verb => rules::verb(&word),
            LexicalCategory::Adjective => rules::adjective(&word),
            LexicalCategory::Adverb => rules::adverb(&word),
            _ => rules::uninflected(&word),
        }
    }
}

/// The first realised word of an element, looking inside lists and
/// coordinations.
fn leading_text(element: &Element) -> Option<String> {
    match element {
        Element::List(list) => list.first().and_then(leading_text),
        Element::Coordinated(coordinated) => coordinated.coordinates.first().and_then(leading_text),
        other => other.realisation().map(str::to_string),
    }
}
