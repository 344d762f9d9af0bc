//! Noun phrases: specifier, premodifiers, head, complements, postmodifiers.
//!
//! A PRONOMINAL noun phrase is replaced by a single personal pronoun. The
//! head inherits the phrase's number, person, gender and possession so the
//! morphology stage sees them on the word itself.

use phrasal_foundation::{
    DiscourseFunction, Element, Flag, Gender, InflectedWordElement, LexicalCategory, ListElement,
    Person, PhraseCategory, PhraseElement,
};

use crate::processor::SyntaxProcessor;

/// Flags a noun phrase hands down to its head.
const HEAD_FLAGS: [Flag; 4] = [Flag::Elided, Flag::Acronym, Flag::Possessive, Flag::Passive];

impl SyntaxProcessor<'_> {
    pub(crate) fn realise_noun_phrase(&self, phrase: &PhraseElement) -> Option<ListElement> {
        if phrase.features.flag(Flag::Elided) {
            return None;
        }
        let mut out = ListElement::default();

        if phrase.features.flag(Flag::Pronominal) {
            out.push(self.pronoun_for(phrase));
            return Some(out);
        }

        self.push_specifier(&mut out, phrase);
        self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);
        self.push_head_noun(&mut out, phrase);
        self.push_list(&mut out, &phrase.complements, DiscourseFunction::Complement);
        self.push_list(&mut out, &phrase.postmodifiers, DiscourseFunction::PostModifier);
        Some(out)
    }

    /// The personal pronoun standing in for a pronominalised phrase.
    fn pronoun_for(&self, phrase: &PhraseElement) -> Element {
        let features = &phrase.features;
        let base = match (features.person, features.gender) {
            (Some(Person::First), _) => "I",
            (Some(Person::Second), _) => "you",
            (_, Some(Gender::Feminine)) => "she",
            (_, Some(Gender::Masculine)) => "he",
            _ => "it",
        };

        let word = self.lookup(base, LexicalCategory::Pronoun);
        let mut pronoun = InflectedWordElement::from_word(&word);
        pronoun.base_word = Some(word);
        pronoun.features.discourse_function = Some(
            features
                .discourse_function
                .unwrap_or(DiscourseFunction::Specifier),
        );
        pronoun
            .features
            .set_flag_value(Flag::Possessive, features.flag_value(Flag::Possessive));
        pronoun.features.number = features.number;
        Element::Inflected(pronoun)
    }

    fn push_specifier(&self, out: &mut ListElement, phrase: &PhraseElement) {
        let Some(specifier) = phrase.specifier.as_deref() else {
            return;
        };
        if phrase.features.flag(Flag::Raised) {
            return;
        }

        let mut specifier = specifier.clone();
        let keeps_own_number = specifier.is_word_of(LexicalCategory::Pronoun)
            || specifier.is_phrase(PhraseCategory::NounPhrase);
        if !keeps_own_number {
            specifier.features_mut().number = phrase.features.number;
        }
        if let Some(mut realised) = self.realise(&specifier) {
            realised.set_discourse_function(DiscourseFunction::Specifier);
            out.push(realised);
        }
    }

    fn push_head_noun(&self, out: &mut ListElement, phrase: &PhraseElement) {
        let Some(head) = phrase.head.as_deref() else {
            return;
        };

        let mut head = head.clone();
        let from = &phrase.features;
        let to = head.features_mut();
        to.gender = from.gender.or(to.gender);
        to.number = from.number.or(to.number);
        to.person = from.person.or(to.person);
        for flag in HEAD_FLAGS {
            if let Some(value) = from.flag_value(flag) {
                to.set_flag(flag, value);
            }
        }

        if let Some(mut realised) = self.realise(&head) {
            realised.set_discourse_function(DiscourseFunction::Subject);
            out.push(realised);
        }
    }
}
