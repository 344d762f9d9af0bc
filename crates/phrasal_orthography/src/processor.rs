//! The orthography stage: text trees in, strings out.

use phrasal_foundation::{
    CoordinatedPhraseElement, DiscourseFunction, DocumentCategory, DocumentElement, Element,
    Error, Flag, ListElement, StringElement,
};
use tracing::warn;

use crate::config::OrthographyConfig;
use crate::punctuation::{
    capitalise_first_letter, remove_punct_space, strip_leading_commas, terminate_sentence,
};

/// Joins realised text into punctuated strings.
///
/// Lists and coordinations become single text elements. A sentence keeps
/// its components and gains a realisation; other document elements have
/// their components realised in place.
#[derive(Clone, Debug, Default)]
pub struct OrthographyProcessor {
    config: OrthographyConfig,
}

impl OrthographyProcessor {
    /// Creates a processor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with the given configuration.
    #[must_use]
    pub fn with_config(config: OrthographyConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &OrthographyConfig {
        &self.config
    }

    /// Realises a single element.
    #[must_use]
    pub fn realise(&self, element: &Element) -> Element {
        let function = match element {
            Element::List(list) => list.first().and_then(Element::discourse_function),
            other => other.discourse_function(),
        };

        let mut realised = match element {
            Element::Document(document) => Element::Document(self.realise_document(document)),
            Element::List(list) => self.realise_list_element(list, function),
            Element::Coordinated(coordinated) => self.realise_coordinated(coordinated),
            Element::Text(_) => element.clone(),
            other => {
                let error = Error::unrecognized_variant("orthography", other.to_string());
                warn!(%error, "passing element through");
                other.clone()
            }
        };

        let cue = matches!(
            function,
            Some(DiscourseFunction::CuePhrase | DiscourseFunction::FrontModifier)
        );
        if let Element::Text(text) = &mut realised {
            if cue && self.config.comma_separate_cue_phrase && !text.text.ends_with(',') {
                text.text.push(',');
            }
            text.text = remove_punct_space(&text.text);
        }
        realised
    }

    /// Realises siblings in order, replacing one-child lists by their child.
    #[must_use]
    pub fn realise_all(&self, elements: &[Element]) -> Vec<Element> {
        elements
            .iter()
            .map(|element| self.realise(element.flattened()))
            .collect()
    }

    fn realise_document(&self, document: &DocumentElement) -> DocumentElement {
        match document.category {
            DocumentCategory::Sentence => self.realise_sentence(document),
            _ => DocumentElement {
                components: document
                    .components
                    .iter()
                    .map(|component| self.realise(component))
                    .collect(),
                ..document.clone()
            },
        }
    }

    /// Joins the components, capitalises and terminates.
    ///
    /// The sentence is a question if it, or any component, is marked
    /// INTERROGATIVE.
    fn realise_sentence(&self, sentence: &DocumentElement) -> DocumentElement {
        let mut realised = sentence.clone();
        if sentence.components.is_empty() {
            return realised;
        }

        let interrogative = sentence.features.flag(Flag::Interrogative)
            || sentence
                .components
                .iter()
                .any(|component| component.features().flag(Flag::Interrogative));

        let joined = self.join(&sentence.components, "");
        let text = capitalise_first_letter(strip_leading_commas(&joined));
        let text = terminate_sentence(&text, interrogative);
        realised.realisation = Some(remove_punct_space(&text));
        realised
    }

    fn realise_list_element(&self, list: &ListElement, function: Option<DiscourseFunction>) -> Element {
        let children = &list.children;
        let text = match function {
            Some(DiscourseFunction::PreModifier) => {
                let appositive = children.iter().all(|c| c.features().flag(Flag::Appositive));
                let separator = if self.config.comma_separate_premodifiers { "," } else { "" };
                let joined = self.join(children, separator);
                if appositive {
                    format!(", {joined}, ")
                } else {
                    joined
                }
            }
            Some(DiscourseFunction::PostModifier) => self.join_postmodifiers(children),
            Some(DiscourseFunction::CuePhrase | DiscourseFunction::FrontModifier)
                if self.config.comma_separate_cue_phrase =>
            {
                self.join(children, ",")
            }
            _ => self.join(children, ""),
        };

        let mut realised = StringElement::new(text);
        realised.features.discourse_function = function;
        Element::Text(realised)
    }

    /// Appositive postmodifiers are set off by commas ("the dog, Rex,").
    fn join_postmodifiers(&self, children: &[Element]) -> String {
        let mut buffer = String::new();
        for (index, child) in children.iter().enumerate() {
            let realised = self.realise(child);
            let text = realised.realisation().unwrap_or_default();
            if child.features().flag(Flag::Appositive) {
                buffer.push_str(", ");
                buffer.push_str(text);
                if index + 1 < children.len() {
                    buffer.push_str(", ");
                }
            } else {
                buffer.push_str(text);
                if matches!(child, Element::List(_)) || !text.is_empty() {
                    buffer.push(' ');
                }
            }
        }
        buffer.trim_end_matches(' ').to_string()
    }

    /// Comma separates all but the last conjunction ("A, B and C").
    fn realise_coordinated(&self, coordinated: &CoordinatedPhraseElement) -> Element {
        let coordinates = &coordinated.coordinates;
        let mut buffer = String::new();
        for (index, child) in coordinates.iter().enumerate() {
            let conjunction = child.discourse_function() == Some(DiscourseFunction::Conjunction);
            if conjunction && index + 2 < coordinates.len() {
                buffer.push_str(", ");
            } else {
                let realised = self.realise(child);
                buffer.push_str(realised.realisation().unwrap_or_default());
                buffer.push(' ');
            }
        }

        let mut realised = StringElement::new(buffer.trim().replace(" ,", ","));
        realised.features.discourse_function = coordinated.features.discourse_function;
        Element::Text(realised)
    }

    /// Non-empty realisations, each followed by `separator` unless last,
    /// joined by spaces.
    fn join(&self, children: &[Element], separator: &str) -> String {
        let mut buffer = String::new();
        let last = children.len().saturating_sub(1);
        for (index, child) in children.iter().enumerate() {
            let realised = self.realise(child);
            let Some(text) = realised.realisation().filter(|text| !text.is_empty()) else {
                continue;
            };
            buffer.push_str(text);
            if index < last {
                buffer.push_str(separator);
            }
            buffer.push(' ');
        }
        buffer.trim_end_matches(' ').to_string()
    }
}
