//! Adjective, adverb and prepositional phrases.
//!
//! Premodifiers, head, complements, postmodifiers. Several complements are
//! joined with "and".

use phrasal_foundation::{
    DiscourseFunction, Flag, InflectedWordElement, LexicalCategory, ListElement, PhraseCategory,
    PhraseElement,
};

use crate::processor::SyntaxProcessor;

impl SyntaxProcessor<'_> {
    pub(crate) fn realise_simple_phrase(&self, phrase: &PhraseElement) -> ListElement {
        let mut out = ListElement::default();
        self.push_list(&mut out, &phrase.premodifiers, DiscourseFunction::PreModifier);

        if let Some(head) = phrase.head.as_deref() {
            let mut head = head.clone();
            for grade in [Flag::IsComparative, Flag::IsSuperlative] {
                if let Some(value) = phrase.features.flag_value(grade) {
                    head.features_mut().set_flag(grade, value);
                    break;
                }
            }
            if let Some(mut realised) = self.realise(&head) {
                realised.set_discourse_function(DiscourseFunction::Head);
                out.push(realised);
            }
        }

        let mut first = true;
        for complement in &phrase.complements {
            let Some(mut realised) = self.realise(complement) else {
                continue;
            };
            realised.set_discourse_function(DiscourseFunction::Complement);
            if !first {
                out.push(InflectedWordElement::new("and", LexicalCategory::Conjunction));
            }
            first = false;
            out.push(realised);
        }

        self.push_list(&mut out, &phrase.postmodifiers, DiscourseFunction::PostModifier);
        out
    }
}

/// True if a clause's only subject is expletive "there".
#[must_use]
pub fn is_expletive_subject(clause: &PhraseElement) -> bool {
    let [subject] = clause.subjects.as_slice() else {
        return false;
    };
    if subject.is_phrase(PhraseCategory::NounPhrase) {
        subject.flag(Flag::ExpletiveSubject)
    } else {
        subject.phrase_category() == Some(PhraseCategory::CannedText)
            && subject.realisation() == Some("there")
    }
}
