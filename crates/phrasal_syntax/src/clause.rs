//! Clauses.
//!
//! Surface order is complementiser, cue phrase, front modifiers, subjects,
//! verb phrase. Questions move a keyword or auxiliary to the front and may
//! split the subjects into the verb group; passives swap objects into
//! subject position and add a "by" phrase.
//!
//! Elements never see their parent, so the clause hands the verb phrase a
//! [`ClauseContext`] and marks its own output list INTERROGATIVE for the
//! sentence above it.

use phrasal_foundation::{
    ClauseStatus, DiscourseFunction, Element, Flag, Form, InterrogativeType, LexicalCategory,
    ListElement, NumberAgreement, Person, PhraseCategory, PhraseElement, Tense,
};
use tracing::trace;

use crate::phrase::is_expletive_subject;
use crate::processor::{SyntaxProcessor, collapse};
use crate::verb_phrase::is_copular;

/// What a verb phrase needs to know about the clause around it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClauseContext {
    /// The clause's subject is expletive "there".
    pub expletive_subject: bool,
    /// The clause's question type.
    pub interrogative_type: Option<InterrogativeType>,
}

impl SyntaxProcessor<'_> {
    pub(crate) fn realise_clause(&self, phrase: &PhraseElement) -> ListElement {
        let mut clause = phrase.clone();
        let mut out = ListElement::default();

        check_discourse_function(&mut clause);
        check_subject_number_person(&mut clause);
        copy_front_modifiers(&mut clause);

        let features = clause.resolved_features();
        if features.clause_status == Some(ClauseStatus::Subordinate)
            && !features.flag(Flag::SuppressedComplementiser)
        {
            let complementiser = clause
                .complementiser
                .as_deref()
                .cloned()
                .unwrap_or_else(|| self.word("that", LexicalCategory::Complementiser));
            out.children.extend(self.realise(&complementiser));
        }
        if let Some(cue) = clause.cue_phrase.as_deref() {
            if let Some(mut realised) = self.realise(cue) {
                realised.set_discourse_function(DiscourseFunction::CuePhrase);
                out.push(realised);
            }
        }

        let interrogative = features.interrogative_type;
        let mut split = None;
        if let Some(kind) = interrogative {
            out.features.set(Flag::Interrogative);
            split = self.realise_interrogative(&mut out, &mut clause, kind);
        } else {
            self.push_list(&mut out, &clause.front_modifiers, DiscourseFunction::FrontModifier);
        }

        let form = features.form;
        let passive = features.flag(Flag::Passive);
        if !matches!(form, Some(Form::Infinitive | Form::Imperative)) && !passive && split.is_none()
        {
            out.children.extend(self.realise_subjects(&clause).children);
        }
        if let Some(object) = self.push_passive_complements(&mut out, &mut clause) {
            split = Some(object);
        }

        let object_question = matches!(
            interrogative,
            Some(
                InterrogativeType::WhatObject
                    | InterrogativeType::WhoObject
                    | InterrogativeType::HowPredicate
                    | InterrogativeType::How
                    | InterrogativeType::Why
                    | InterrogativeType::Where
            )
        );
        self.push_verb(&mut out, &clause, split, object_question);

        if passive {
            self.push_passive_subjects(&mut out, &clause);
        }
        if interrogative.is_some() {
            for modifier in &clause.front_modifiers {
                if let Some(mut realised) = self.realise(modifier) {
                    realised.set_discourse_function(DiscourseFunction::FrontModifier);
                    out.push(realised);
                }
            }
        }
        if interrogative == Some(InterrogativeType::WhoIndirectObject) {
            out.children
                .extend(self.realise(&self.word("to", LexicalCategory::Preposition)));
        }
        out
    }

    /// Subjects in order, possessive when the clause is a gerund.
    fn realise_subjects(&self, clause: &PhraseElement) -> ListElement {
        let features = clause.resolved_features();
        let genitive = features.form == Some(Form::Gerund)
            && !features.flag(Flag::SuppressGenitiveInGerund);

        let mut out = ListElement::default();
        for subject in &clause.subjects {
            let mut subject = subject.clone();
            subject.set_discourse_function(DiscourseFunction::Subject);
            if genitive {
                subject.set(Flag::Possessive);
            }
            out.children.extend(self.realise(&subject));
        }
        out
    }

    /// Emits the question's keyword and any "do". Returns the subjects when
    /// they must follow the first verb instead ("is the dog happy").
    fn realise_interrogative(
        &self,
        out: &mut ListElement,
        clause: &mut PhraseElement,
        kind: InterrogativeType,
    ) -> Option<Element> {
        let features = clause.resolved_features();
        trace!(kind = kind.as_str(), "interrogative");
        match kind {
            InterrogativeType::YesNo => {
                let copular = clause
                    .verb_phrase
                    .as_deref()
                    .and_then(Element::as_phrase)
                    .is_some_and(|vp| is_copular(vp.head.as_deref()));
                let needs_do = !copular
                    && !features.flag(Flag::Progressive)
                    && features.modal.is_none()
                    && features.tense != Some(Tense::Future)
                    && !features.flag(Flag::Negated)
                    && !features.flag(Flag::Passive);
                if needs_do {
                    self.push_do_auxiliary(out, clause);
                    None
                } else {
                    Some(Element::List(self.realise_subjects(clause)))
                }
            }
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject => {
                self.push_keyword(out, kind.keyword(), LexicalCategory::Pronoun);
                clause.subjects.clear();
                None
            }
            InterrogativeType::HowMany => {
                self.push_keyword(out, "how", LexicalCategory::Pronoun);
                self.push_keyword(out, "many", LexicalCategory::Adverb);
                None
            }
            InterrogativeType::How
            | InterrogativeType::Why
            | InterrogativeType::Where
            | InterrogativeType::WhoObject
            | InterrogativeType::WhoIndirectObject
            | InterrogativeType::WhatObject
            | InterrogativeType::HowPredicate => {
                self.push_keyword(out, kind.keyword(), LexicalCategory::Pronoun);
                let has_auxiliary = features.modal.is_some()
                    || features.flag(Flag::Perfect)
                    || features.flag(Flag::Progressive)
                    || features.flag(Flag::Passive)
                    || features.tense == Some(Tense::Future);
                if !has_auxiliary && !is_copular(clause.verb_phrase.as_deref()) {
                    self.push_do_auxiliary(out, clause);
                    None
                } else if features.flag(Flag::Passive) {
                    None
                } else {
                    Some(Element::List(self.realise_subjects(clause)))
                }
            }
        }
    }

    fn push_keyword(&self, out: &mut ListElement, keyword: &str, category: LexicalCategory) {
        out.children.extend(self.realise(&self.word(keyword, category)));
    }

    /// A "do" agreeing with the clause ("does", "did").
    fn push_do_auxiliary(&self, out: &mut ListElement, clause: &PhraseElement) {
        let features = clause.resolved_features();
        let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
        vp.set_head(self.lookup("do", LexicalCategory::Verb));
        vp.features.tense = features.tense;
        vp.features.person = features.person;
        vp.features.number = features.number;
        out.children.extend(self.realise(&Element::Phrase(vp)));
    }

    /// Realises the verb phrase's objects in subject position and makes
    /// the verb agree with them. In a question the objects are returned
    /// to be placed after the first verb.
    fn push_passive_complements(
        &self,
        out: &mut ListElement,
        clause: &mut PhraseElement,
    ) -> Option<Element> {
        let features = clause.resolved_features();
        if !features.flag(Flag::Passive)
            || features.interrogative_type == Some(InterrogativeType::WhatObject)
        {
            return None;
        }
        let vp = clause.verb_phrase.as_deref_mut()?.as_phrase_mut()?;
        let objects: Vec<Element> = vp.complements_with(DiscourseFunction::Object).cloned().collect();

        let mut split = None;
        let mut plural = objects.len() > 1;
        let mut person = None;
        for mut object in objects {
            object.set(Flag::Passive);
            if let Some(mut realised) = self.realise(&object) {
                realised.set_discourse_function(DiscourseFunction::Object);
                if features.interrogative_type.is_some() {
                    split = Some(realised);
                } else {
                    out.push(realised);
                }
            }

            plural |= agrees_plural(&object);
            person = match (object.features().person, person) {
                (Some(Person::First), _) => Some(Person::First),
                (Some(Person::Second), p) if p != Some(Person::First) => Some(Person::Second),
                (_, None) => Some(Person::Third),
                (_, p) => p,
            };
        }

        if let Some(person) = person {
            vp.features.person = Some(person);
            vp.features.number = Some(if plural {
                NumberAgreement::Plural
            } else {
                NumberAgreement::Singular
            });
        }
        split
    }

    /// The verb phrase, with split subjects after its first word.
    fn push_verb(
        &self,
        out: &mut ListElement,
        clause: &PhraseElement,
        split: Option<Element>,
        object_question: bool,
    ) {
        let context = ClauseContext {
            expletive_subject: is_expletive_subject(clause),
            interrogative_type: clause.resolved_features().interrogative_type,
        };
        let realised = match clause.verb_phrase.as_deref().or(clause.head.as_deref()) {
            Some(Element::Phrase(vp)) if !vp.features.flag(Flag::Elided) => {
                self.realise_phrase(vp, Some(&context)).map(collapse)
            }
            Some(other) => self.realise(other),
            None => None,
        };
        let Some(mut verb) = realised else {
            return;
        };

        let Some(split) = split else {
            verb.set_discourse_function(DiscourseFunction::VerbPhrase);
            out.push(verb);
            return;
        };
        match verb {
            Element::List(list) => {
                let mut children = list.children.into_iter();
                if let Some(mut first) = children.next() {
                    first.set_discourse_function(DiscourseFunction::VerbPhrase);
                    out.push(first);
                }
                out.push(split);
                for mut child in children {
                    child.set_discourse_function(DiscourseFunction::VerbPhrase);
                    out.push(child);
                }
            }
            mut verb => {
                verb.set_discourse_function(DiscourseFunction::VerbPhrase);
                if object_question {
                    out.push(verb);
                    out.push(split);
                } else {
                    out.push(split);
                    out.push(verb);
                }
            }
        }
    }

    /// "by" followed by the logical subjects.
    fn push_passive_subjects(&self, out: &mut ListElement, clause: &PhraseElement) {
        if !clause.subjects.is_empty() || clause.resolved_features().interrogative_type.is_some() {
            let mut by = PhraseElement::new(PhraseCategory::PrepositionalPhrase);
            by.set_head(self.lookup("by", LexicalCategory::Preposition));
            out.children.extend(self.realise(&Element::Phrase(by)));
        }
        for subject in &clause.subjects {
            if !(subject.is_phrase(PhraseCategory::NounPhrase)
                || matches!(subject, Element::Coordinated(_)))
            {
                continue;
            }
            let subject = subject.clone().with(Flag::Passive);
            if let Some(mut realised) = self.realise(&subject) {
                realised.set_discourse_function(DiscourseFunction::Subject);
                out.push(realised);
            }
        }
    }
}

/// True if a subject makes its verb plural on its own.
fn agrees_plural(subject: &Element) -> bool {
    match subject {
        Element::Coordinated(coordinated) => coordinated.check_if_plural(),
        _ if subject.is_plural() && !subject.is_clause() => true,
        Element::Phrase(np) if np.category == PhraseCategory::NounPhrase => np
            .head
            .as_deref()
            .is_some_and(|head| head.is_plural() || matches!(head, Element::List(_))),
        _ => false,
    }
}

/// Sets the verb's number and person from the subjects.
fn check_subject_number_person(clause: &mut PhraseElement) {
    let (plural, person) = match clause.subjects.as_slice() {
        [] => (false, None),
        [subject] => {
            let person = subject
                .is_phrase(PhraseCategory::NounPhrase)
                .then(|| subject.features().person)
                .flatten();
            (agrees_plural(subject), person)
        }
        _ => (true, None),
    };

    let number = if plural {
        Some(NumberAgreement::Plural)
    } else {
        clause.features.number
    };
    if let Some(verb) = verb_mut(clause) {
        let features = verb.features_mut();
        features.number = number;
        if person.is_some() {
            features.person = person;
        }
    }
}

/// A clause used as an object loses its complementiser when it is an
/// imperative or subjectless gerund; one used as a subject becomes a
/// gerund ("walking is fun").
fn check_discourse_function(clause: &mut PhraseElement) {
    let form = clause.resolved_features().form;
    match clause.features.discourse_function {
        Some(DiscourseFunction::Object | DiscourseFunction::IndirectObject) => {
            if form == Some(Form::Imperative) {
                clause.set(Flag::SuppressedComplementiser);
                clause.set(Form::Infinitive);
            } else if form == Some(Form::Gerund) && clause.subjects.is_empty() {
                clause.set(Flag::SuppressedComplementiser);
            }
        }
        Some(DiscourseFunction::Subject) => {
            clause.set(Form::Gerund);
            clause.set(Flag::SuppressedComplementiser);
        }
        _ => {}
    }
}

/// Moves clause postmodifiers onto the verb phrase. An infinitive clause
/// also moves its front modifiers there ("to walk quickly").
fn copy_front_modifiers(clause: &mut PhraseElement) {
    let infinitive = clause.resolved_features().form == Some(Form::Infinitive);
    let postmodifiers = clause.postmodifiers.clone();
    let front = if infinitive {
        std::mem::take(&mut clause.front_modifiers)
    } else {
        Vec::new()
    };

    if let Some(verb) = verb_mut(clause) {
        if let Element::Phrase(vp) = &mut *verb {
            for modifier in postmodifiers {
                if !vp.postmodifiers.contains(&modifier) {
                    vp.add_post_modifier(modifier);
                }
            }
            for modifier in front {
                vp.add_post_modifier(modifier);
            }
        }
        if infinitive {
            verb.set(Flag::NonMorph);
        }
    }
    if infinitive {
        clause.set(Flag::SuppressedComplementiser);
    }
}

fn verb_mut(clause: &mut PhraseElement) -> Option<&mut Element> {
    match clause.verb_phrase.as_deref_mut() {
        Some(vp) => Some(vp),
        None => clause.head.as_deref_mut(),
    }
}
