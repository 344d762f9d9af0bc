//! Orthography stage for Phrasal.
//!
//! Flattens the morphology stage's text tree into strings: premodifiers
//! joined with commas, appositives bracketed, coordinations comma
//! separated, and sentences capitalised and terminated.
//!
//! This crate provides:
//! - [`OrthographyProcessor`] - Realises an element tree to text
//! - [`OrthographyConfig`] - Comma placement options
//! - [`punctuation`] - The string-level cleanup rules
//!
//! # Modules
//!
//! - [`config`] - Processor configuration
//! - [`processor`] - Tree walk
//! - [`punctuation`] - Cleanup, capitalisation and sentence termination

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod processor;
pub mod punctuation;

// Re-export main types for convenience
pub use config::OrthographyConfig;
pub use processor::OrthographyProcessor;
pub use punctuation::{capitalise_first_letter, remove_punct_space, terminate_sentence};
