//! Coordinated phrases.
//!
//! The coordination's agreement features are pushed down onto every
//! coordinate before it is realised, and the conjunction is inserted
//! between coordinates as its own slot word. Orthography later turns all
//! but the last conjunction into commas.

use phrasal_foundation::{
    CoordinatedPhraseElement, DiscourseFunction, Element, Feature, Flag, InflectedWordElement,
    LexicalCategory, ListElement,
};

use crate::processor::SyntaxProcessor;

/// Flags a coordination shares with its coordinates.
const SHARED_FLAGS: [Flag; 3] = [Flag::Progressive, Flag::Perfect, Flag::Negated];

impl SyntaxProcessor<'_> {
    pub(crate) fn realise_coordinated(&self, phrase: &CoordinatedPhraseElement) -> Element {
        let mut out = ListElement::default();
        self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);

        let mut coordinated = CoordinatedPhraseElement::new();
        coordinated.features.conjunction.clone_from(&phrase.features.conjunction);
        coordinated
            .features
            .conjunction_type
            .clone_from(&phrase.features.conjunction_type);

        let mut children = phrase.coordinates.clone();
        if !children.is_empty() {
            if phrase.features.flag(Flag::RaiseSpecifier) {
                raise_specifier(&mut children);
            }
            if let (Some(last), Some(possessive)) = (
                children.last_mut(),
                phrase.features.flag_value(Flag::Possessive),
            ) {
                last.features_mut().set_flag(Flag::Possessive, possessive);
            }

            let conjunction = phrase.conjunction().filter(|c| !c.is_empty());
            for (index, child) in children.iter_mut().enumerate() {
                push_child_features(phrase, child);
                if index > 0 {
                    if phrase.features.flag(Flag::AggregateAuxiliary) {
                        child.set(Feature::Flag(Flag::RealiseAuxiliary, false));
                    }
                    if child.is_clause() {
                        child.features_mut().set_flag_value(
                            Flag::SuppressedComplementiser,
                            phrase.features.flag_value(Flag::SuppressedComplementiser),
                        );
                    }
                    if let Some(conjunction) = conjunction {
                        let mut word =
                            InflectedWordElement::new(conjunction, LexicalCategory::Conjunction);
                        word.features.discourse_function = Some(DiscourseFunction::Conjunction);
                        coordinated.coordinates.push(Element::Inflected(word));
                    }
                }
                if let Some(realised) = self.realise(child) {
                    coordinated.coordinates.push(realised);
                }
            }
            out.push(coordinated);
        }

        self.push_list(&mut out, &phrase.postmodifiers, DiscourseFunction::PostModifier);
        self.push_list(&mut out, &phrase.complements, DiscourseFunction::Complement);
        Element::List(out)
    }
}

/// Copies the coordination's agreement features onto a coordinate.
fn push_child_features(phrase: &CoordinatedPhraseElement, child: &mut Element) {
    let from = &phrase.features;
    for flag in SHARED_FLAGS {
        if let Some(value) = from.flag_value(flag) {
            child.set(Feature::Flag(flag, value));
        }
    }
    if let (Some(specifier), Element::Phrase(p)) = (phrase.specifier.as_deref(), &mut *child) {
        p.specifier = Some(Box::new(specifier.clone()));
    }
    if let Some(gender) = from.gender {
        child.set(gender);
    }
    if let Some(number) = from.number {
        child.set(number);
    }
    if let Some(tense) = from.tense {
        child.set(tense);
    }
    if let Some(person) = from.person {
        child.set(person);
    }
    if let Some(modal) = &from.modal {
        child.set(Feature::Modal(modal.clone()));
    }
    if let Some(function) = from.discourse_function {
        child.set(function);
    }
    if let Some(form) = from.form {
        child.set(form);
    }
    if let Some(status) = from.clause_status {
        child.set(status);
    }
    if from.interrogative_type.is_some() {
        child.set(Flag::IgnoreModal);
    }
}

/// Marks every coordinate after the first RAISED when all share the first
/// coordinate's specifier, so "every" is realised once.
fn raise_specifier(children: &mut [Element]) {
    let specifier_base = |child: &Element| -> Option<String> {
        let specifier = child.as_phrase()?.specifier.as_deref()?;
        match specifier {
            Element::Word(w) => Some(w.base_form.clone()),
            Element::Inflected(w) => Some(w.base_form.clone()),
            Element::Text(t) => Some(t.text.clone()),
            _ => None,
        }
    };

    let Some(first) = children.first().and_then(specifier_base) else {
        return;
    };
    let all_match = children[1..]
        .iter()
        .all(|child| specifier_base(child).as_deref() == Some(first.as_str()));
    if all_match {
        for child in &mut children[1..] {
            child.set(Flag::Raised);
        }
    }
}
