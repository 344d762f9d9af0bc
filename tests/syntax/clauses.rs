//! Integration tests for clause realisation

use phrasal_foundation::{
    DiscourseFunction, Element, Feature, Flag, InterrogativeType, LexicalCategory,
    NumberAgreement, PhraseCategory, PhraseElement, Tense,
};
use phrasal_lexicon::{Lexicon, LexiconLookup};
use phrasal_morphology::MorphologyProcessor;
use phrasal_orthography::OrthographyProcessor;
use phrasal_syntax::SyntaxProcessor;

fn noun_phrase(lexicon: &Lexicon, determiner: &str, noun: &str) -> PhraseElement {
    let mut np = PhraseElement::new(PhraseCategory::NounPhrase);
    np.set_specifier(lexicon.lookup_word(determiner, LexicalCategory::Determiner));
    np.set_head(lexicon.lookup_word(noun, LexicalCategory::Noun));
    np
}

fn clause(lexicon: &Lexicon, subject: &str, verb: &str, object: Option<&str>) -> PhraseElement {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.set_head(lexicon.lookup_word(verb, LexicalCategory::Verb));
    if let Some(object) = object {
        vp.add_complement(noun_phrase(lexicon, "the", object));
    }
    let mut clause = PhraseElement::new(PhraseCategory::Clause);
    clause.subjects.push(noun_phrase(lexicon, "the", subject).into());
    clause.verb_phrase = Some(Box::new(vp.into()));
    clause
}

fn realise(lexicon: &Lexicon, element: impl Into<Element>) -> String {
    let syntax = SyntaxProcessor::new(lexicon)
        .realise(&element.into())
        .expect("nothing elided");
    let morphology = MorphologyProcessor::new(lexicon).realise(&syntax);
    OrthographyProcessor::new()
        .realise(&morphology)
        .realisation()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Declaratives
// =============================================================================

#[test]
fn simple_past() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man")).with(Tense::Past);
    assert_eq!(realise(&lexicon, clause), "the woman kissed the man");
}

#[test]
fn progressive_past() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "dog", "chase", Some("cat"))
        .with(Tense::Past)
        .with(Flag::Progressive);
    assert_eq!(realise(&lexicon, clause), "the dog was chasing the cat");
}

#[test]
fn negation_brings_do() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "dog", "chase", Some("cat"))
        .with(Tense::Past)
        .with(Flag::Negated);
    assert_eq!(realise(&lexicon, clause), "the dog did not chase the cat");
}

#[test]
fn modal() {
    let lexicon = Lexicon::english();
    let clause =
        clause(&lexicon, "woman", "kiss", Some("man")).with(Feature::Modal("can".to_string()));
    assert_eq!(realise(&lexicon, clause), "the woman can kiss the man");
}

#[test]
fn passive() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man"))
        .with(Tense::Past)
        .with(Flag::Passive);
    assert_eq!(realise(&lexicon, clause), "the man was kissed by the woman");
}

// =============================================================================
// Questions
// =============================================================================

#[test]
fn yes_no_question() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man"))
        .with(Tense::Past)
        .with(InterrogativeType::YesNo);
    assert_eq!(realise(&lexicon, clause), "did the woman kiss the man");
}

#[test]
fn object_question_drops_the_object() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man"))
        .with(Tense::Present)
        .with(InterrogativeType::WhoObject);
    assert_eq!(realise(&lexicon, clause), "who does the woman kiss");
}

#[test]
fn where_question_keeps_the_object() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man"))
        .with(InterrogativeType::Where);
    assert_eq!(realise(&lexicon, clause), "where does the woman kiss the man");
}

#[test]
fn subject_question_replaces_the_subject() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man"))
        .with(Tense::Past)
        .with(InterrogativeType::WhoSubject);
    assert_eq!(realise(&lexicon, clause), "who kissed the man");
}

#[test]
fn how_many_question() {
    let lexicon = Lexicon::english();
    let mut dogs = PhraseElement::new(PhraseCategory::NounPhrase);
    dogs.set_head(lexicon.lookup_word("dog", LexicalCategory::Noun));
    dogs.set(NumberAgreement::Plural);

    let mut clause = clause(&lexicon, "dog", "chase", Some("cat")).with(InterrogativeType::HowMany);
    clause.subjects = vec![dogs.into()];
    assert_eq!(realise(&lexicon, clause), "how many dogs chase the cat");
}

#[test]
fn indirect_object_question_ends_with_to() {
    let lexicon = Lexicon::english();
    let mut clause = clause(&lexicon, "woman", "give", Some("flower"))
        .with(Tense::Past)
        .with(InterrogativeType::WhoIndirectObject);
    if let Some(vp) = clause.verb_phrase.as_deref_mut().and_then(Element::as_phrase_mut) {
        vp.add_complement(
            noun_phrase(&lexicon, "the", "man").with(DiscourseFunction::IndirectObject),
        );
    }
    assert_eq!(
        realise(&lexicon, clause),
        "who did the woman give the flower to"
    );
}

#[test]
fn passive_object_questions_invert_be() {
    let lexicon = Lexicon::english();
    let passive = |kind: InterrogativeType, tense: Tense| {
        clause(&lexicon, "woman", "kiss", Some("man"))
            .with(tense)
            .with(Flag::Passive)
            .with(kind)
    };

    assert_eq!(
        realise(&lexicon, passive(InterrogativeType::WhoObject, Tense::Past)),
        "who was the man kissed by the woman"
    );
    assert_eq!(
        realise(&lexicon, passive(InterrogativeType::WhoObject, Tense::Present)),
        "who is the man kissed by the woman"
    );
    assert_eq!(
        realise(&lexicon, passive(InterrogativeType::WhatObject, Tense::Past)),
        "what was kissed by the woman"
    );
    assert_eq!(
        realise(&lexicon, passive(InterrogativeType::WhatObject, Tense::Present)),
        "what is kissed by the woman"
    );
}

#[test]
fn questions_are_marked_interrogative() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "woman", "kiss", Some("man")).with(InterrogativeType::YesNo);
    let realised = SyntaxProcessor::new(&lexicon)
        .realise(&clause.into())
        .expect("nothing elided");
    assert!(realised.features().flag(Flag::Interrogative));
}

// =============================================================================
// Subordination
// =============================================================================

#[test]
fn clause_complement_takes_that() {
    let lexicon = Lexicon::english();
    let inner = clause(&lexicon, "dog", "bark", None).with(Tense::Past);
    let mut outer = clause(&lexicon, "man", "know", None);
    if let Some(vp) = outer.verb_phrase.as_deref_mut().and_then(Element::as_phrase_mut) {
        vp.add_complement(inner);
    }
    assert_eq!(realise(&lexicon, outer), "the man knows that the dog barked");
}

#[test]
fn elided_clause_vanishes() {
    let lexicon = Lexicon::english();
    let clause = clause(&lexicon, "dog", "bark", None).with(Flag::Elided);
    assert!(SyntaxProcessor::new(&lexicon).realise(&clause.into()).is_none());
}
