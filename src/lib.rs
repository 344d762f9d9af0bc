//! Phrasal - Rule-based English sentence realiser
//!
//! This crate re-exports all layers of the Phrasal system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: phrasal_realiser    - Pipeline, text formatter, phrase factory
//! Layer 2: phrasal_syntax      - Ordering, agreement, verb groups, questions
//!          phrasal_morphology  - Inflection, pronoun case, a/an
//!          phrasal_orthography - Punctuation, capitalisation, spacing
//! Layer 1: phrasal_lexicon     - Word lookup and the built-in English word list
//! Layer 0: phrasal_foundation  - Features, element tree, Error
//! ```

pub use phrasal_foundation as foundation;
pub use phrasal_lexicon as lexicon;
pub use phrasal_morphology as morphology;
pub use phrasal_orthography as orthography;
pub use phrasal_realiser as realiser;
pub use phrasal_syntax as syntax;
