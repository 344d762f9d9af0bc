//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use phrasal_foundation::{Error, ErrorContext, ErrorKind, Inflection};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_enum_value() {
    let err = Error::invalid_enum_value("TENSE", "yesterday");
    assert!(matches!(err.kind, ErrorKind::InvalidEnumValue { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("TENSE"));
    assert!(msg.contains("yesterday"));
}

#[test]
fn error_unknown_inflection_code() {
    let err = Inflection::from_code("weird").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownInflectionCode(_)));
    assert!(format!("{err}").contains("weird"));
}

#[test]
fn error_unrecognized_variant() {
    let err = Error::unrecognized_variant("orthography", "Word(dog)");
    assert!(matches!(
        err.kind,
        ErrorKind::UnrecognizedVariant { stage: "orthography", .. }
    ));
    assert!(format!("{err}").contains("orthography"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::invalid_enum_value("FORM", "odd").with_context(
        ErrorContext::new()
            .with_stage("lexicon")
            .with_element("walk"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.stage.as_deref(), Some("lexicon"));
    assert_eq!(context.element.as_deref(), Some("walk"));
}

#[test]
fn inflection_codes() {
    assert_eq!(Inflection::from_code("reg").unwrap(), Inflection::Regular);
    assert_eq!(Inflection::from_code("IRREG").unwrap(), Inflection::Irregular);
    assert_eq!(Inflection::from_code("regd").unwrap(), Inflection::RegularDouble);
    assert_eq!(Inflection::from_code("glreg").unwrap(), Inflection::GrecoLatinRegular);
    assert_eq!(Inflection::from_code("noncount").unwrap(), Inflection::Uncount);
    assert_eq!(Inflection::from_code("groupuncount").unwrap(), Inflection::Uncount);
    assert_eq!(Inflection::from_code("inv").unwrap(), Inflection::Invariant);
}
