//! End-to-end realisations of clauses and phrases

use phrasal_foundation::{
    Element, Flag, InterrogativeType, NumberAgreement, Tense,
};
use phrasal_lexicon::Lexicon;
use phrasal_orthography::OrthographyConfig;
use phrasal_realiser::{PhraseFactory, Realiser, RealiserConfig};

fn realised(realiser: &Realiser, element: impl Into<Element>) -> String {
    realiser
        .realise(&element.into())
        .realisation()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Questions
// =============================================================================

#[test]
fn yes_no_question_sentence() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let clause = nlg
        .clause("the woman", "kiss", "the man")
        .with(Tense::Present)
        .with(InterrogativeType::YesNo);
    assert_eq!(
        realiser.realise_sentence(&clause.into()),
        "Does the woman kiss the man?"
    );
}

#[test]
fn yes_no_question_in_the_past() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let clause = nlg
        .clause("the woman", "kiss", "the man")
        .with(Tense::Past)
        .with(InterrogativeType::YesNo);
    assert_eq!(realised(&realiser, clause), "did the woman kiss the man");
}

#[test]
fn who_object_question() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let clause = nlg
        .clause("the woman", "kiss", "the man")
        .with(InterrogativeType::WhoObject);
    assert_eq!(realised(&realiser, clause), "who does the woman kiss");
}

// =============================================================================
// Verb Groups
// =============================================================================

#[test]
fn passive_perfect_future() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let kick = nlg
        .verb_phrase("kick")
        .with(Flag::Passive)
        .with(Flag::Perfect)
        .with(Tense::Future);
    assert_eq!(realised(&realiser, kick.clone()), "will have been kicked");

    let kick = kick.with(Flag::Progressive);
    assert_eq!(realised(&realiser, kick.clone()), "will have been being kicked");

    let kick = kick.with(Flag::Negated);
    assert_eq!(realised(&realiser, kick), "will not have been being kicked");
}

#[test]
fn coordinated_phrasal_verbs() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let mut coordinated = nlg.coordinated(nlg.verb_phrase("get up"), nlg.verb_phrase("fall down"));
    coordinated.features.set(Tense::Past);
    assert_eq!(realised(&realiser, coordinated), "got up and fell down");
}

#[test]
fn passive_sentence() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let clause = nlg
        .clause("the woman", "kiss", "the man")
        .with(Tense::Past)
        .with(Flag::Passive);
    assert_eq!(
        realiser.realise_sentence(&clause.into()),
        "The man was kissed by the woman."
    );
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn plural_indefinite_article() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let dogs = nlg
        .noun_phrase_with("a", "dog")
        .with(NumberAgreement::Plural);
    assert_eq!(realised(&realiser, dogs), "some dogs");
}

#[test]
fn article_before_numbers() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    assert_eq!(
        realised(&realiser, nlg.noun_phrase_with("a", "11,000 change")),
        "an 11,000 change"
    );
    assert_eq!(
        realised(&realiser, nlg.noun_phrase_with("a", "180,000 change")),
        "a 180,000 change"
    );
}

#[test]
fn pronoun_subjects_agree() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    assert_eq!(
        realiser.realise_sentence(&nlg.clause("I", "be", "happy").into()),
        "I am happy."
    );
    assert_eq!(
        realiser.realise_sentence(&nlg.clause("we", "be", "happy").into()),
        "We are happy."
    );
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn adverb_premodifies_the_verb() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let mut clause = nlg.clause("the dog", "chase", "the cat");
    nlg.add_modifier(&mut clause, "quickly");
    assert_eq!(
        realiser.realise_sentence(&clause.into()),
        "The dog quickly chases the cat."
    );
}

#[test]
fn canned_postmodifier() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let mut clause = nlg.clause("the dog", "chase", "the cat");
    nlg.add_modifier(&mut clause, "in the park");
    assert_eq!(
        realiser.realise_sentence(&clause.into()),
        "The dog chases the cat in the park."
    );
}

#[test]
fn sentence_modifier_comma_is_configurable() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);

    let mut clause = nlg.clause("the dog", "chase", "the cat");
    nlg.add_modifier(&mut clause, "fortunately");
    let element: Element = clause.into();

    let plain = Realiser::new(lexicon.clone());
    assert_eq!(
        plain.realise_sentence(&element),
        "Fortunately the dog chases the cat."
    );

    let config = RealiserConfig::new()
        .with_orthography(OrthographyConfig::new().with_comma_separate_cue_phrase(true));
    let comma = Realiser::with_config(lexicon.clone(), config);
    assert_eq!(
        comma.realise_sentence(&element),
        "Fortunately, the dog chases the cat."
    );
}
