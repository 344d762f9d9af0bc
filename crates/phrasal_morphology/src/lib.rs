//! Morphology stage for Phrasal.
//!
//! Turns the slot words produced by the syntax stage into text: plurals,
//! verb agreement, participles, comparatives, pronoun case and the a/an
//! choice of the indefinite article.
//!
//! This crate provides:
//! - [`MorphologyProcessor`] - Realises an element tree down to text
//! - [`rules`] - Per-category inflection rules
//! - [`requires_an`] - The a/an heuristic
//!
//! # Modules
//!
//! - [`processor`] - Tree walk and determiner agreement
//! - [`rules`] - Noun, verb, adjective and adverb inflection
//! - [`pronoun`] - Personal pronoun table
//! - [`determiner`] - Indefinite article agreement

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod determiner;
pub mod processor;
pub mod pronoun;
pub mod rules;

// Re-export main types for convenience
pub use determiner::{ends_with_indefinite_article, requires_an};
pub use processor::MorphologyProcessor;
pub use pronoun::{PERSONAL_PRONOUNS, is_personal_pronoun, is_wh_pronoun};
