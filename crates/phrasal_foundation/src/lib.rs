//! Feature vocabulary, element tree, and error types for Phrasal.
//!
//! This crate provides:
//! - [`Element`] - The tree every realisation stage consumes and produces
//! - [`FeatureSet`] / [`Feature`] - Typed grammatical features
//! - The closed feature vocabulary ([`Tense`], [`Form`], [`Flag`], ...)
//! - [`LexicalCategory`], [`PhraseCategory`], [`DocumentCategory`]
//! - [`Error`] - Structured error type with context
//!
//! # Modules
//!
//! - [`features`] - Enumerated feature values
//! - [`category`] - Word, phrase and document categories
//! - [`feature_set`] - Per-element feature storage
//! - [`word`] - Lexicon words and slot words
//! - [`element`] - Phrases, coordinations, lists, documents
//! - [`pretty`] - Tree outline printer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod element;
pub mod error;
pub mod feature_set;
pub mod features;
pub mod pretty;
pub mod word;

// Re-export main types for convenience
pub use category::{DocumentCategory, LexicalCategory, PhraseCategory};
pub use element::{
    CoordinatedPhraseElement, DocumentElement, Element, ListElement, PhraseElement,
    StringElement,
};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use feature_set::{Feature, FeatureSet};
pub use features::{
    ClauseStatus, DiscourseFunction, Flag, Form, Gender, Inflection, InterrogativeType,
    NumberAgreement, Person, Tense,
};
pub use word::{InflectedWordElement, WordElement, WordForms};
