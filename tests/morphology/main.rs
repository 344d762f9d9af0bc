//! Integration tests for Layer 2: Morphology
//!
//! Tests inflection of slot words against the English lexicon and the
//! indefinite article heuristic.

mod inflection;
