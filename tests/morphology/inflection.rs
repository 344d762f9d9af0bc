//! Integration tests for noun, verb, adjective and pronoun inflection

use phrasal_foundation::{
    DiscourseFunction, Element, Flag, Form, InflectedWordElement, LexicalCategory,
    NumberAgreement, Person, Tense,
};
use phrasal_lexicon::Lexicon;
use phrasal_morphology::MorphologyProcessor;

fn slot(base: &str, category: LexicalCategory) -> InflectedWordElement {
    InflectedWordElement::new(base, category)
}

fn realise(word: InflectedWordElement) -> String {
    let lexicon = Lexicon::english();
    let morphology = MorphologyProcessor::new(&lexicon);
    morphology
        .realise(&Element::Inflected(word))
        .realisation()
        .unwrap_or_default()
        .to_string()
}

fn verb(base: &str, setup: impl FnOnce(&mut InflectedWordElement)) -> String {
    let mut word = slot(base, LexicalCategory::Verb);
    setup(&mut word);
    realise(word)
}

fn plural(base: &str) -> String {
    let mut word = slot(base, LexicalCategory::Noun);
    word.features.number = Some(NumberAgreement::Plural);
    realise(word)
}

// =============================================================================
// Verbs
// =============================================================================

#[test]
fn regular_verb_paradigm() {
    assert_eq!(verb("walk", |_| {}), "walks");
    assert_eq!(verb("walk", |w| w.features.tense = Some(Tense::Past)), "walked");
    assert_eq!(
        verb("walk", |w| w.features.form = Some(Form::PresentParticiple)),
        "walking"
    );
    assert_eq!(
        verb("walk", |w| w.features.form = Some(Form::PastParticiple)),
        "walked"
    );
    assert_eq!(
        verb("walk", |w| w.features.number = Some(NumberAgreement::Plural)),
        "walk"
    );
    assert_eq!(
        verb("walk", |w| {
            w.features.person = Some(Person::First);
            w.features.number = Some(NumberAgreement::Singular);
        }),
        "walk"
    );
}

#[test]
fn be_agrees_in_present_and_past() {
    assert_eq!(verb("be", |_| {}), "is");
    assert_eq!(
        verb("be", |w| {
            w.features.person = Some(Person::First);
            w.features.number = Some(NumberAgreement::Singular);
        }),
        "am"
    );
    assert_eq!(
        verb("be", |w| w.features.number = Some(NumberAgreement::Plural)),
        "are"
    );
    assert_eq!(verb("be", |w| w.features.tense = Some(Tense::Past)), "was");
    assert_eq!(
        verb("be", |w| {
            w.features.tense = Some(Tense::Past);
            w.features.number = Some(NumberAgreement::Plural);
        }),
        "were"
    );
    assert_eq!(
        verb("be", |w| w.features.form = Some(Form::PastParticiple)),
        "been"
    );
    assert_eq!(
        verb("be", |w| w.features.form = Some(Form::PresentParticiple)),
        "being"
    );
}

#[test]
fn inflected_slot_conjugates_from_its_base() {
    assert_eq!(verb("is", |w| w.features.tense = Some(Tense::Past)), "was");
}

#[test]
fn irregular_and_doubling_verbs() {
    assert_eq!(verb("give", |w| w.features.tense = Some(Tense::Past)), "gave");
    assert_eq!(
        verb("give", |w| w.features.form = Some(Form::PastParticiple)),
        "given"
    );
    assert_eq!(verb("stop", |w| w.features.tense = Some(Tense::Past)), "stopped");
    assert_eq!(
        verb("stop", |w| w.features.form = Some(Form::PresentParticiple)),
        "stopping"
    );
}

#[test]
fn spelling_adjustments() {
    assert_eq!(verb("cry", |_| {}), "cries");
    assert_eq!(verb("cry", |w| w.features.tense = Some(Tense::Past)), "cried");
    assert_eq!(verb("like", |w| w.features.tense = Some(Tense::Past)), "liked");
    assert_eq!(verb("kiss", |_| {}), "kisses");
}

#[test]
fn negated_and_bare_infinitive_keep_base() {
    assert_eq!(verb("walk", |w| w.features.set(Flag::Negated)), "walk");
    assert_eq!(
        verb("walk", |w| w.features.form = Some(Form::BareInfinitive)),
        "walk"
    );
}

// =============================================================================
// Nouns
// =============================================================================

#[test]
fn regular_plurals() {
    assert_eq!(plural("dog"), "dogs");
    assert_eq!(plural("sandwich"), "sandwiches");
    assert_eq!(plural("toy"), "toys");
    assert_eq!(plural("fly"), "flies");
}

#[test]
fn listed_and_latin_plurals() {
    assert_eq!(plural("woman"), "women");
    assert_eq!(plural("child"), "children");
    assert_eq!(plural("cactus"), "cacti");
}

#[test]
fn uncountable_invariant_and_proper_nouns_do_not_pluralise() {
    assert_eq!(plural("information"), "information");
    assert_eq!(plural("sheep"), "sheep");
    assert_eq!(plural("Mary"), "Mary");
}

#[test]
fn possessive_nouns() {
    let mut dog = slot("dog", LexicalCategory::Noun);
    dog.features.set(Flag::Possessive);
    assert_eq!(realise(dog.clone()), "dog's");

    dog.features.number = Some(NumberAgreement::Plural);
    assert_eq!(realise(dog), "dogs'");
}

// =============================================================================
// Adjectives and Adverbs
// =============================================================================

#[test]
fn comparatives_and_superlatives() {
    let graded = |base: &str, category: LexicalCategory, flag: Flag| {
        let mut word = slot(base, category);
        word.features.set(flag);
        realise(word)
    };
    assert_eq!(graded("happy", LexicalCategory::Adjective, Flag::IsComparative), "happier");
    assert_eq!(graded("big", LexicalCategory::Adjective, Flag::IsSuperlative), "biggest");
    assert_eq!(graded("good", LexicalCategory::Adjective, Flag::IsComparative), "better");
    assert_eq!(graded("fine", LexicalCategory::Adjective, Flag::IsSuperlative), "finest");
    assert_eq!(graded("well", LexicalCategory::Adverb, Flag::IsSuperlative), "best");
}

// =============================================================================
// Pronouns
// =============================================================================

#[test]
fn pronouns_take_case_from_position() {
    let mut she = slot("she", LexicalCategory::Pronoun);
    she.features.person = Some(Person::Third);
    she.features.gender = Some(phrasal_foundation::Gender::Feminine);
    she.features.discourse_function = Some(DiscourseFunction::Object);
    assert_eq!(realise(she.clone()), "her");

    she.features.discourse_function = Some(DiscourseFunction::Subject);
    she.features.number = Some(NumberAgreement::Plural);
    assert_eq!(realise(she), "they");
}

#[test]
fn wh_pronouns_do_not_inflect() {
    let mut who = slot("who", LexicalCategory::Pronoun);
    who.features.discourse_function = Some(DiscourseFunction::Object);
    assert_eq!(realise(who), "who");
}
