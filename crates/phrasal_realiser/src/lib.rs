//! Realisation pipeline for Phrasal.
//!
//! Ties the stages together: syntax orders and agrees the tree, morphology
//! inflects the words, orthography punctuates, and the text formatter lays
//! out documents. Also provides the factory used to build input trees.
//!
//! This crate provides:
//! - [`Realiser`] - Runs every stage over a tree
//! - [`RealiserConfig`] - Orthography options and stage tracing
//! - [`TextFormatter`] - Plain-text document layout
//! - [`PhraseFactory`] - Builds phrases, clauses and documents
//!
//! # Modules
//!
//! - [`realiser`] - The pipeline
//! - [`config`] - Realiser configuration
//! - [`format`] - Document layout
//! - [`factory`] - Construction API

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod factory;
pub mod format;
pub mod realiser;

// Re-export main types for convenience
pub use config::RealiserConfig;
pub use factory::{PhraseFactory, TextOrElement};
pub use format::TextFormatter;
pub use realiser::Realiser;
