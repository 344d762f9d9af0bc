//! Word lookup for Phrasal.
//!
//! This crate provides:
//! - [`LexiconLookup`] - The read-only lookup interface the pipeline consumes
//! - [`Lexicon`] - An indexed in-memory word store
//! - [`WordEntry`] - Builder for lexicon words
//! - [`ENGLISH`] - The built-in English word list
//!
//! # Modules
//!
//! - [`lookup`] - Lookup trait
//! - [`lexicon`] - Indexed word store
//! - [`entry`] - Entry builder and word-list line format
//! - [`english`] - Built-in word list

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod entry;
pub mod lexicon;
pub mod lookup;

// Re-export main types for convenience
pub use english::ENGLISH;
pub use entry::{WordEntry, parse_line, parse_source};
pub use lexicon::Lexicon;
pub use lookup::{EmptyLexicon, LexiconLookup};
