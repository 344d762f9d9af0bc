//! Dispatch for the syntax stage.

use phrasal_foundation::{
    DiscourseFunction, DocumentElement, Element, Flag, InflectedWordElement, LexicalCategory,
    ListElement, PhraseCategory, PhraseElement, WordElement,
};
use phrasal_lexicon::LexiconLookup;
use tracing::trace;

use crate::clause::ClauseContext;

/// Realises phrase trees into ordered lists of slot words.
///
/// Words come back as slot words with their lexicon word attached, phrases
/// as lists in surface order. A list holding a single element is replaced
/// by that element, so a lone pronoun takes the discourse function its
/// parent assigns.
pub struct SyntaxProcessor<'a> {
    pub(crate) lexicon: &'a dyn LexiconLookup,
}

impl<'a> SyntaxProcessor<'a> {
    /// Creates a processor that looks words up in `lexicon`.
    #[must_use]
    pub fn new(lexicon: &'a dyn LexiconLookup) -> Self {
        Self { lexicon }
    }

    /// Realises an element. Elided elements produce nothing.
    #[must_use]
    pub fn realise(&self, element: &Element) -> Option<Element> {
        if element.flag(Flag::Elided) {
            return None;
        }
        trace!(element = %element, "syntax");

        let realised = match element {
            Element::Document(document) => Some(Element::Document(self.realise_document(document))),
            Element::Phrase(phrase) => self.realise_phrase(phrase, None),
            Element::Inflected(word) => Some(Element::Inflected(self.attach_base_word(word.clone()))),
            Element::Word(word) => {
                let slot = InflectedWordElement::from_word(word);
                Some(Element::Inflected(self.attach_base_word(slot)))
            }
            Element::Coordinated(coordinated) => Some(self.realise_coordinated(coordinated)),
            Element::Text(_) | Element::List(_) => Some(element.clone()),
        };
        realised.map(collapse)
    }

    /// Realises siblings, splicing the children of any list results in place.
    #[must_use]
    pub fn realise_all(&self, elements: &[Element]) -> Vec<Element> {
        let mut realised = Vec::with_capacity(elements.len());
        for element in elements {
            match self.realise(element) {
                Some(Element::List(list)) => realised.extend(list.children),
                Some(other) => realised.push(other),
                None => {}
            }
        }
        realised
    }

    pub(crate) fn realise_phrase(
        &self,
        phrase: &PhraseElement,
        context: Option<&ClauseContext>,
    ) -> Option<Element> {
        let list = match phrase.category {
            PhraseCategory::Clause => self.realise_clause(phrase),
            PhraseCategory::NounPhrase => self.realise_noun_phrase(phrase)?,
            PhraseCategory::VerbPhrase => self.realise_verb_phrase(phrase, context),
            PhraseCategory::PrepositionalPhrase
            | PhraseCategory::AdjectivePhrase
            | PhraseCategory::AdverbPhrase => self.realise_simple_phrase(phrase),
            PhraseCategory::CannedText => return Some(Element::Phrase(phrase.clone())),
        };
        Some(Element::List(list))
    }

    /// Components realised in place; a question anywhere among them marks
    /// the whole document element interrogative.
    fn realise_document(&self, document: &DocumentElement) -> DocumentElement {
        let mut realised = DocumentElement {
            components: Vec::with_capacity(document.components.len()),
            ..document.clone()
        };
        for component in &document.components {
            match self.realise(component) {
                Some(Element::List(list)) => {
                    if list.features.flag(Flag::Interrogative) {
                        realised.features.set(Flag::Interrogative);
                    }
                    realised.components.extend(list.children);
                }
                Some(other) => {
                    if other.features().flag(Flag::Interrogative) {
                        realised.features.set(Flag::Interrogative);
                    }
                    realised.components.push(other);
                }
                None => {}
            }
        }
        realised
    }

    fn attach_base_word(&self, mut slot: InflectedWordElement) -> InflectedWordElement {
        if slot.base_word.is_none() {
            slot.base_word = Some(self.lexicon.lookup_word(&slot.base_form, slot.category));
        }
        slot
    }

    /// Realises each element into a nested list tagged with `function`.
    ///
    /// Nothing is added when every element is elided.
    pub(crate) fn push_list(
        &self,
        out: &mut ListElement,
        elements: &[Element],
        function: DiscourseFunction,
    ) {
        let mut list = ListElement::default();
        for element in elements {
            if let Some(mut realised) = self.realise(element) {
                realised.set_discourse_function(function);
                if element.flag(Flag::Appositive) {
                    realised.set(Flag::Appositive);
                }
                list.push(realised);
            }
        }
        if !list.is_empty() {
            out.push(list);
        }
    }

    pub(crate) fn lookup(&self, base: &str, category: LexicalCategory) -> WordElement {
        self.lexicon.lookup_word(base, category)
    }

    /// A lexicon word as an element.
    pub(crate) fn word(&self, base: &str, category: LexicalCategory) -> Element {
        Element::Word(self.lookup(base, category))
    }
}

/// A list holding one element becomes that element, keeping the list's
/// INTERROGATIVE mark.
pub(crate) fn collapse(element: Element) -> Element {
    match element {
        Element::List(mut list) if list.len() == 1 => {
            let mut child = list.children.remove(0);
            if list.features.flag(Flag::Interrogative) {
                child.features_mut().set_flag(Flag::Interrogative, true);
            }
            child
        }
        other => other,
    }
}
