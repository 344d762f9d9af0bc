//! Syntax stage for Phrasal.
//!
//! Linearises phrase trees into ordered lists of slot words. Agreement is
//! settled here: subjects fix the verb's number and person, the verb group
//! gains its auxiliaries, questions are reordered, and every slot is tagged
//! with the discourse function morphology needs.
//!
//! This crate provides:
//! - [`SyntaxProcessor`] - Realises phrases, clauses and coordinations
//!
//! # Modules
//!
//! - [`processor`] - Dispatch and list handling
//! - [`phrase`] - Adjective, adverb and prepositional phrases
//! - [`noun_phrase`] - Specifiers, pronominalisation and heads
//! - [`verb_phrase`] - Verb groups and complement ordering
//! - [`clause`] - Subjects, questions and passives
//! - [`coordination`] - Coordinated phrases

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod coordination;
pub mod noun_phrase;
pub mod phrase;
pub mod processor;
pub mod verb_phrase;

// Re-export main types for convenience
pub use processor::SyntaxProcessor;
pub use verb_phrase::is_copular;
