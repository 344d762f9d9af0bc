//! Integration tests for feature sets and the feature vocabulary

use phrasal_foundation::{
    ErrorKind, Feature, FeatureSet, Flag, InterrogativeType, NumberAgreement, PhraseCategory,
    PhraseElement, Tense,
};

// =============================================================================
// Named Features
// =============================================================================

#[test]
fn named_features_are_case_insensitive() {
    let mut features = FeatureSet::new();
    features.set_named("tense", "past").unwrap();
    features.set_named("Number", "PLURAL").unwrap();
    features.set_named("negated", "TRUE").unwrap();

    assert_eq!(features.tense, Some(Tense::Past));
    assert_eq!(features.number, Some(NumberAgreement::Plural));
    assert!(features.flag(Flag::Negated));
    assert_eq!(features.get_named("TENSE").as_deref(), Some("PAST"));
    assert_eq!(features.get_named("negated").as_deref(), Some("true"));
}

#[test]
fn unknown_enum_value_is_rejected() {
    let mut features = FeatureSet::new();
    let err = features.set_named("INTERROGATIVE_TYPE", "sometimes").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEnumValue { .. }));
    assert_eq!(features.interrogative_type, None);
}

#[test]
fn interrogative_type_parses_from_text() {
    let mut features = FeatureSet::new();
    features.set_named("interrogative_type", "who_object").unwrap();
    assert_eq!(features.interrogative_type, Some(InterrogativeType::WhoObject));
}

#[test]
fn unknown_names_are_kept() {
    let mut features = FeatureSet::new();
    features.set_named("colour", "blue").unwrap();
    assert_eq!(features.extra("COLOUR"), Some("blue"));
    assert_eq!(features.get_named("colour").as_deref(), Some("blue"));
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn unset_flags_read_false() {
    let features = FeatureSet::new();
    assert!(!features.flag(Flag::Passive));
    assert_eq!(features.flag_value(Flag::Passive), None);
    assert!(features.is_empty());
}

#[test]
fn flags_can_be_cleared() {
    let mut features = FeatureSet::new().with(Flag::Perfect);
    assert!(features.has_flag(Flag::Perfect));
    features.clear_flag(Flag::Perfect);
    assert!(!features.has_flag(Flag::Perfect));
}

// =============================================================================
// Clause Forwarding
// =============================================================================

#[test]
fn clause_forwards_verb_features() {
    let mut clause = PhraseElement::new(PhraseCategory::Clause);
    clause.verb_phrase = Some(Box::new(PhraseElement::new(PhraseCategory::VerbPhrase).into()));
    clause.set(Tense::Future);
    clause.set(Feature::Modal("can".to_string()));

    let vp = clause.verb_phrase.as_deref().unwrap();
    assert_eq!(vp.features().tense, Some(Tense::Future));
    assert_eq!(vp.features().modal.as_deref(), Some("can"));
}

#[test]
fn clause_reads_verb_features_it_lacks() {
    let mut clause = PhraseElement::new(PhraseCategory::Clause);
    let vp = PhraseElement::new(PhraseCategory::VerbPhrase)
        .with(Tense::Past)
        .with(Flag::Negated);
    clause.verb_phrase = Some(Box::new(vp.into()));

    let resolved = clause.resolved_features();
    assert_eq!(resolved.tense, Some(Tense::Past));
    assert!(resolved.flag(Flag::Negated));
}

#[test]
fn non_verb_features_stay_on_the_clause() {
    let mut clause = PhraseElement::new(PhraseCategory::Clause);
    clause.verb_phrase = Some(Box::new(PhraseElement::new(PhraseCategory::VerbPhrase).into()));
    clause.set(Flag::SuppressedComplementiser);

    let vp = clause.verb_phrase.as_deref().unwrap();
    assert!(!vp.flag(Flag::SuppressedComplementiser));
    assert!(clause.features.flag(Flag::SuppressedComplementiser));
}
