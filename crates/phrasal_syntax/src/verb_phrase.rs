//! Verb phrases and the verb group.
//!
//! The verb group is built as a stack, innermost verb first: the main verb,
//! then one auxiliary per tense/aspect/voice feature, with the modal on top.
//! Popping it back off yields the surface order ("will not have been being
//! kicked").

use phrasal_foundation::{
    DiscourseFunction, Element, Feature, Flag, Form, InflectedWordElement, InterrogativeType,
    LexicalCategory, ListElement, NumberAgreement, PhraseCategory, PhraseElement, Tense,
};
use tracing::trace;

use crate::clause::ClauseContext;
use crate::processor::SyntaxProcessor;

impl SyntaxProcessor<'_> {
    pub(crate) fn realise_verb_phrase(
        &self,
        phrase: &PhraseElement,
        context: Option<&ClauseContext>,
    ) -> ListElement {
        let mut out = ListElement::default();
        let group = verb_group(phrase, context);
        let (mut main, mut auxiliaries) = split_verb_group(group);

        if phrase.features.flag_value(Flag::RealiseAuxiliary) != Some(false) {
            while let Some(auxiliary) = auxiliaries.pop() {
                if let Some(mut realised) = self.realise(&auxiliary) {
                    realised.set_discourse_function(DiscourseFunction::Auxiliary);
                    out.push(realised);
                }
            }
            self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);
            self.push_main_verbs(&mut out, phrase, &mut main);
        } else if is_copular(phrase.head.as_deref()) {
            self.push_main_verbs(&mut out, phrase, &mut main);
            self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);
        } else {
            self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);
            self.push_main_verbs(&mut out, phrase, &mut main);
        }

        self.push_verb_complements(&mut out, phrase);
        self.push_list(&mut out, &phrase.postmodifiers, DiscourseFunction::PostModifier);
        out
    }

    fn push_main_verbs(&self, out: &mut ListElement, phrase: &PhraseElement, main: &mut Vec<Element>) {
        while let Some(mut verb) = main.pop() {
            if let Some(interrogative) = phrase.features.interrogative_type {
                verb.set(interrogative);
            }
            if let Some(realised) = self.realise(&verb) {
                out.push(realised);
            }
        }
    }

    /// Indirect objects, then direct objects, then anything else.
    ///
    /// A question about an object leaves that object out, and a passive
    /// phrase leaves out everything but indirect objects since the clause
    /// realises those as the subject.
    fn push_verb_complements(&self, out: &mut ListElement, phrase: &PhraseElement) {
        let mut indirects = Vec::new();
        let mut directs = Vec::new();
        let mut unknowns = Vec::new();

        for complement in &phrase.complements {
            let function = complement.discourse_function();
            let Some(mut realised) = self.realise(complement) else {
                continue;
            };
            realised.set_discourse_function(DiscourseFunction::Complement);
            match function {
                Some(DiscourseFunction::IndirectObject) => indirects.push(realised),
                Some(DiscourseFunction::Object) => directs.push(realised),
                _ => unknowns.push(realised),
            }
        }

        let interrogative = phrase.features.interrogative_type;
        if !interrogative.is_some_and(InterrogativeType::is_indirect_object) {
            out.children.extend(indirects);
        }
        if !phrase.features.flag(Flag::Passive) {
            if !interrogative.is_some_and(InterrogativeType::is_object) {
                out.children.extend(directs);
            }
            out.children.extend(unknowns);
        }
    }
}

/// True if the element is, or is headed by, the verb "be".
#[must_use]
pub fn is_copular(element: Option<&Element>) -> bool {
    match element {
        Some(Element::Word(word)) => word.base_form == "be",
        Some(Element::Inflected(word)) => word.base_form == "be",
        Some(Element::Phrase(phrase)) => {
            let head = if phrase.category == PhraseCategory::Clause {
                phrase.verb_phrase.as_deref().and_then(|vp| vp.as_phrase()?.head.as_deref())
            } else {
                phrase.head.as_deref()
            };
            matches!(head, Some(Element::Word(_) | Element::Inflected(_)))
                && head.and_then(Element::base_form) == Some("be")
        }
        _ => false,
    }
}

fn verb(base: &str) -> Element {
    Element::Inflected(InflectedWordElement::new(base, LexicalCategory::Verb))
}

fn not() -> Element {
    Element::Inflected(InflectedWordElement::new("not", LexicalCategory::Adverb))
}

/// Builds the verb group stack for a verb phrase.
fn verb_group(phrase: &PhraseElement, context: Option<&ClauseContext>) -> Vec<Element> {
    let features = &phrase.features;
    let form = features.form;
    let mut tense = features.tense;
    let modal = features.modal.as_deref();
    let interrogative = features.interrogative_type.is_some();
    let mut modal_past = false;
    let mut group = Vec::new();

    if matches!(form, Some(Form::Gerund | Form::Infinitive)) {
        tense = Some(Tense::Present);
    }

    let mut actual_modal = None;
    if form == Some(Form::Infinitive) {
        actual_modal = Some("to");
    } else if matches!(form, None | Some(Form::Normal)) {
        let coordinated_head = matches!(phrase.head.as_deref(), Some(Element::Coordinated(_)));
        if tense == Some(Tense::Future) && modal.is_none() && (!coordinated_head || interrogative) {
            actual_modal = Some("will");
        } else if modal.is_some() {
            actual_modal = modal;
            modal_past = tense == Some(Tense::Past);
        }
    }

    if let Some(particle) = &features.particle {
        group.push(Element::text(particle.clone()));
    }

    let mut front = phrase.head.as_deref().map(|head| {
        let mut front = match head {
            Element::Word(word) => Element::Inflected(InflectedWordElement::from_word(word)),
            other => other.clone(),
        };
        if let Some(tense) = tense {
            front.set(tense);
        }
        if modal.is_some() {
            front.set(Feature::Flag(Flag::Negated, false));
        }
        front
    });

    if matches!(
        form,
        Some(Form::Imperative | Form::Infinitive | Form::BareInfinitive)
    ) {
        if let Some(front) = front.as_mut() {
            front.set(Flag::NonMorph);
        }
    }

    if features.flag(Flag::Passive) {
        front = Some(add_be(front, &mut group, Form::PastParticiple));
    }
    if features.flag(Flag::Progressive) {
        front = Some(add_be(front, &mut group, Form::PresentParticiple));
    }
    if features.flag(Flag::Perfect) || modal_past {
        if let Some(mut previous) = front.take() {
            previous.set(Form::PastParticiple);
            group.push(previous);
        }
        let mut have = verb("have");
        if let Some(tense) = tense {
            have.set(tense);
        }
        if modal.is_some() {
            have.set(Flag::NonMorph);
        }
        front = Some(have);
    }

    let ignore_modal = features.flag(Flag::IgnoreModal);
    if actual_modal.is_some() && !ignore_modal {
        if let Some(mut previous) = front.take() {
            previous.set(Flag::NonMorph);
            group.push(previous);
        }
    }

    if features.flag(Flag::Negated) {
        if !group.is_empty() || is_copular(front.as_ref()) {
            group.push(not());
        } else {
            if modal.is_none() {
                if let Some(mut previous) = front.take() {
                    previous.set(Flag::Negated);
                    group.push(previous);
                }
            }
            group.push(not());
            let object_question = features
                .interrogative_type
                .is_some_and(InterrogativeType::is_object);
            if !object_question {
                front = Some(verb("do"));
            }
        }
    }

    if let Some(front) = front {
        push_front_verb(phrase, context, &mut group, front, interrogative);
    }

    if let Some(modal) = actual_modal {
        if !ignore_modal {
            group.push(Element::Inflected(InflectedWordElement::new(
                modal,
                LexicalCategory::Modal,
            )));
        }
    }
    trace!(size = group.len(), ?form, ?tense, modal = actual_modal, "verb group");
    group
}

/// Pushes the current front verb and gives it a new "be" above it.
fn add_be(front: Option<Element>, group: &mut Vec<Element>, form: Form) -> Element {
    if let Some(mut previous) = front {
        previous.set(form);
        group.push(previous);
    }
    verb("be")
}

/// The topmost verb of the group carries tense and agreement, unless the
/// form dictates a participle or the verb is left uninflected.
fn push_front_verb(
    phrase: &PhraseElement,
    context: Option<&ClauseContext>,
    group: &mut Vec<Element>,
    mut front: Element,
    interrogative: bool,
) {
    let features = &phrase.features;
    let interrogative_type = features.interrogative_type;
    let subject_question = interrogative_type.is_some_and(InterrogativeType::is_subject);

    match features.form {
        Some(Form::Gerund | Form::PresentParticiple) => {
            front.set(Form::PresentParticiple);
            group.push(front);
        }
        Some(Form::PastParticiple) => {
            front.set(Form::PastParticiple);
            group.push(front);
        }
        form if (!matches!(form, None | Some(Form::Normal)) || interrogative)
            && !is_copular(phrase.head.as_deref())
            && group.is_empty() =>
        {
            if !subject_question {
                front.set(Flag::NonMorph);
            }
            group.push(front);
        }
        _ => {
            let number = determine_number(phrase, context);
            let slot = front.features_mut();
            slot.tense = features.tense;
            slot.person = features.person;
            slot.number = Some(number);

            let object_question = interrogative_type.is_some_and(InterrogativeType::is_object);
            if !(features.flag(Flag::Negated) && object_question) {
                group.push(front);
            }
        }
    }
}

/// Number for the finite verb.
///
/// A copular verb under an expletive subject ("there are dogs") or a subject
/// question agrees with its noun phrase complements instead.
fn determine_number(phrase: &PhraseElement, context: Option<&ClauseContext>) -> NumberAgreement {
    let number = phrase.features.number.unwrap_or(NumberAgreement::Singular);
    let Some(context) = context else {
        return number;
    };

    let subject_question = context
        .interrogative_type
        .is_some_and(InterrogativeType::is_subject);
    if (context.expletive_subject || subject_question) && is_copular(phrase.head.as_deref()) {
        let plural_complement = phrase.complements.iter().any(|complement| {
            complement.is_phrase(PhraseCategory::NounPhrase)
                && complement.features().number == Some(NumberAgreement::Plural)
        });
        if plural_complement {
            NumberAgreement::Plural
        } else {
            NumberAgreement::Singular
        }
    } else {
        number
    }
}

/// Splits the stack into the main verb (with any "not" beneath it) and the
/// auxiliaries above it.
fn split_verb_group(group: Vec<Element>) -> (Vec<Element>, Vec<Element>) {
    let mut main = Vec::new();
    let mut auxiliaries = Vec::new();
    let mut main_seen = false;
    for word in group {
        if main_seen {
            auxiliaries.push(word);
        } else {
            main_seen = !is_not(&word);
            main.push(word);
        }
    }
    (main, auxiliaries)
}

fn is_not(element: &Element) -> bool {
    element.base_form().or_else(|| element.realisation()) == Some("not")
}
