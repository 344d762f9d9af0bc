//! Integration tests for coordinated phrases

use phrasal_foundation::{
    CoordinatedPhraseElement, Element, Feature, Flag, LexicalCategory, PhraseCategory,
    PhraseElement, Tense,
};
use phrasal_lexicon::{Lexicon, LexiconLookup};
use phrasal_morphology::MorphologyProcessor;
use phrasal_orthography::OrthographyProcessor;
use phrasal_syntax::SyntaxProcessor;

fn noun_phrase(lexicon: &Lexicon, determiner: &str, noun: &str) -> Element {
    let mut np = PhraseElement::new(PhraseCategory::NounPhrase);
    np.set_specifier(lexicon.lookup_word(determiner, LexicalCategory::Determiner));
    np.set_head(lexicon.lookup_word(noun, LexicalCategory::Noun));
    np.into()
}

fn verb_phrase(lexicon: &Lexicon, verb: &str) -> Element {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.set_head(lexicon.lookup_word(verb, LexicalCategory::Verb));
    vp.into()
}

/// `subject` is happy.
fn is_happy(lexicon: &Lexicon, subject: CoordinatedPhraseElement) -> PhraseElement {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.set_head(lexicon.lookup_word("be", LexicalCategory::Verb));
    vp.add_complement(lexicon.lookup_word("happy", LexicalCategory::Adjective));
    let mut clause = PhraseElement::new(PhraseCategory::Clause);
    clause.subjects.push(subject.into());
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
// Agreement
// =============================================================================

#[test]
fn and_makes_the_verb_plural() {
    let lexicon = Lexicon::english();
    let subjects = CoordinatedPhraseElement::of([
        noun_phrase(&lexicon, "the", "dog"),
        noun_phrase(&lexicon, "the", "cat"),
    ]);
    assert_eq!(
        realise(&lexicon, is_happy(&lexicon, subjects)),
        "the dog and the cat are happy"
    );
}

#[test]
fn or_leaves_the_verb_singular() {
    let lexicon = Lexicon::english();
    let mut subjects = CoordinatedPhraseElement::of([
        noun_phrase(&lexicon, "the", "dog"),
        noun_phrase(&lexicon, "the", "cat"),
    ]);
    subjects.set_conjunction("or");
    assert_eq!(
        realise(&lexicon, is_happy(&lexicon, subjects)),
        "the dog or the cat is happy"
    );
}

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn commas_between_all_but_the_last_pair() {
    let lexicon = Lexicon::english();
    let subjects = CoordinatedPhraseElement::of([
        noun_phrase(&lexicon, "the", "dog"),
        noun_phrase(&lexicon, "the", "cat"),
        noun_phrase(&lexicon, "the", "boy"),
    ]);
    assert_eq!(
        realise(&lexicon, is_happy(&lexicon, subjects)),
        "the dog, the cat and the boy are happy"
    );
}

// =============================================================================
// Shared Features
// =============================================================================

#[test]
fn tense_reaches_every_verb_phrase() {
    let lexicon = Lexicon::english();
    let mut coordinated =
        CoordinatedPhraseElement::of([verb_phrase(&lexicon, "kick"), verb_phrase(&lexicon, "fall")]);
    coordinated.features.set(Tense::Past);
    assert_eq!(realise(&lexicon, coordinated), "kicked and fell");
}

#[test]
fn particles_follow_their_verbs() {
    let lexicon = Lexicon::english();
    let get_up = verb_phrase(&lexicon, "get").with(Feature::Particle("up".to_string()));
    let fall_down = verb_phrase(&lexicon, "fall").with(Feature::Particle("down".to_string()));
    let mut coordinated = CoordinatedPhraseElement::of([get_up, fall_down]);
    coordinated.features.set(Tense::Past);
    assert_eq!(realise(&lexicon, coordinated), "got up and fell down");
}

#[test]
fn negation_reaches_every_verb_phrase() {
    let lexicon = Lexicon::english();
    let mut coordinated =
        CoordinatedPhraseElement::of([verb_phrase(&lexicon, "kick"), verb_phrase(&lexicon, "chase")]);
    coordinated.features.set(Tense::Past);
    coordinated.features.set(Flag::Negated);
    assert_eq!(
        realise(&lexicon, coordinated),
        "did not kick and did not chase"
    );
}

#[test]
fn shared_specifier_is_raised() {
    let lexicon = Lexicon::english();
    let mut coordinated = CoordinatedPhraseElement::of([
        noun_phrase(&lexicon, "every", "dog"),
        noun_phrase(&lexicon, "every", "cat"),
    ]);
    coordinated.features.set(Flag::RaiseSpecifier);
    assert_eq!(realise(&lexicon, coordinated), "every dog and cat");
}

// =============================================================================
// Auxiliaries
// =============================================================================

fn transitive(lexicon: &Lexicon, verb: &str, object: &str) -> Element {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.set_head(lexicon.lookup_word(verb, LexicalCategory::Verb));
    vp.add_complement(noun_phrase(lexicon, "the", object));
    vp.into()
}

#[test]
fn auxiliaries_repeat_by_default() {
    let lexicon = Lexicon::english();
    let mut coordinated = CoordinatedPhraseElement::of([
        transitive(&lexicon, "kick", "dog"),
        transitive(&lexicon, "chase", "cat"),
    ]);
    coordinated.features.set(Tense::Past);
    coordinated.features.set(Flag::Perfect);
    assert_eq!(
        realise(&lexicon, coordinated),
        "had kicked the dog and had chased the cat"
    );
}

#[test]
fn aggregated_auxiliaries_are_realised_once() {
    let lexicon = Lexicon::english();
    let mut coordinated = CoordinatedPhraseElement::of([
        transitive(&lexicon, "kick", "dog"),
        transitive(&lexicon, "chase", "cat"),
    ]);
    coordinated.features.set(Tense::Past);
    coordinated.features.set(Flag::Perfect);
    coordinated.features.set(Flag::AggregateAuxiliary);
    assert_eq!(
        realise(&lexicon, coordinated),
        "had kicked the dog and chased the cat"
    );
}
