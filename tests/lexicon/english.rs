//! Integration tests for the built-in English lexicon

use phrasal_foundation::{
    Flag, Gender, Inflection, LexicalCategory, NumberAgreement, Person,
};
use phrasal_lexicon::{Lexicon, LexiconLookup};

// =============================================================================
// Irregular Words
// =============================================================================

#[test]
fn irregular_verbs_list_their_forms() {
    let lexicon = Lexicon::english();
    let give = lexicon.get_word("give", LexicalCategory::Verb);
    assert_eq!(give.default_inflection, Some(Inflection::Irregular));
    assert_eq!(give.forms.past.as_deref(), Some("gave"));
    assert_eq!(give.forms.past_participle.as_deref(), Some("given"));
}

#[test]
fn irregular_plurals() {
    let lexicon = Lexicon::english();
    assert_eq!(
        lexicon.get_word("woman", LexicalCategory::Noun).forms.plural.as_deref(),
        Some("women")
    );
    assert_eq!(
        lexicon.get_word("sheep", LexicalCategory::Noun).default_inflection,
        Some(Inflection::Invariant)
    );
    assert_eq!(
        lexicon.get_word("information", LexicalCategory::Noun).default_inflection,
        Some(Inflection::Uncount)
    );
}

#[test]
fn doubling_verbs() {
    let lexicon = Lexicon::english();
    let stop = lexicon.get_word("stop", LexicalCategory::Verb);
    assert_eq!(stop.default_inflection, Some(Inflection::RegularDouble));
}

// =============================================================================
// Variant Lookup
// =============================================================================

#[test]
fn inflected_forms_find_their_base() {
    let lexicon = Lexicon::english();
    assert_eq!(lexicon.lookup_word("fell", LexicalCategory::Verb).base_form, "fall");
    assert_eq!(lexicon.lookup_word("men", LexicalCategory::Noun).base_form, "man");
    assert_eq!(lexicon.lookup_word("kicked", LexicalCategory::Verb).base_form, "kick");
    assert_eq!(lexicon.lookup_word("better", LexicalCategory::Adjective).base_form, "good");
}

#[test]
fn forms_of_be() {
    let lexicon = Lexicon::english();
    for form in ["is", "am", "are", "was", "were", "been", "being"] {
        assert_eq!(
            lexicon.lookup_word(form, LexicalCategory::Verb).base_form,
            "be",
            "{form}"
        );
    }
}

#[test]
fn unknown_words_are_regular() {
    let lexicon = Lexicon::english();
    let word = lexicon.lookup_word("frobnicate", LexicalCategory::Verb);
    assert_eq!(word.base_form, "frobnicate");
    assert_eq!(word.category, LexicalCategory::Verb);
    assert!(!lexicon.has_word("frobnicate", LexicalCategory::Verb));
}

#[test]
fn any_category_matches_every_word() {
    let lexicon = Lexicon::english();
    assert!(lexicon.has_word("dog", LexicalCategory::Any));
    assert!(!lexicon.has_word("dog", LexicalCategory::Verb));
}

// =============================================================================
// Closed-Class Words
// =============================================================================

#[test]
fn pronouns_carry_their_features() {
    let lexicon = Lexicon::english();
    let she = lexicon.get_word("she", LexicalCategory::Pronoun);
    assert_eq!(she.features.person, Some(Person::Third));
    assert_eq!(she.features.number, Some(NumberAgreement::Singular));
    assert_eq!(she.features.gender, Some(Gender::Feminine));

    let themselves = lexicon.get_word("themselves", LexicalCategory::Pronoun);
    assert!(themselves.features.flag(Flag::Reflexive));
}

#[test]
fn expletive_there() {
    let lexicon = Lexicon::english();
    let there = lexicon.get_word("there", LexicalCategory::Pronoun);
    assert!(there.features.flag(Flag::ExpletiveSubject));
    assert!(there.features.flag(Flag::NonMorph));
}

#[test]
fn sentence_modifier_adverbs() {
    let lexicon = Lexicon::english();
    assert!(
        lexicon
            .get_word("fortunately", LexicalCategory::Adverb)
            .features
            .flag(Flag::SentenceModifier)
    );
    assert!(
        !lexicon
            .get_word("quickly", LexicalCategory::Adverb)
            .features
            .flag(Flag::SentenceModifier)
    );
}

#[test]
fn proper_nouns() {
    let lexicon = Lexicon::english();
    assert!(lexicon.get_word("Mary", LexicalCategory::Noun).features.flag(Flag::Proper));
}

#[test]
fn determiners_are_listed() {
    let lexicon = Lexicon::english();
    let determiners = lexicon.words_in_category(LexicalCategory::Determiner);
    let bases: Vec<&str> = determiners.iter().map(|w| w.base_form.as_str()).collect();
    assert!(bases.contains(&"a"));
    assert!(bases.contains(&"the"));
    assert!(bases.contains(&"some"));
}
