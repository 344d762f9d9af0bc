//! Error types for Phrasal.
//!
//! Realisation itself never fails: missing features read as defaults and
//! unexpected element kinds pass through untouched. Errors arise at the
//! edges, where loosely typed input (feature names, inflection codes) is
//! turned into the closed vocabulary.

use std::fmt;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Phrasal operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid enumerated value error.
    #[must_use]
    pub fn invalid_enum_value(feature: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidEnumValue {
            feature: feature.into(),
            value: value.into(),
        })
    }

    /// Creates an unknown inflection code error.
    #[must_use]
    pub fn unknown_inflection_code(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownInflectionCode(code.into()))
    }

    /// Creates an unrecognized variant error.
    #[must_use]
    pub fn unrecognized_variant(stage: &'static str, element: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedVariant {
            stage,
            element: element.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A feature that requires a definite enumerated value received something else.
    #[error("invalid value {value:?} for feature {feature}")]
    InvalidEnumValue {
        /// The feature being set.
        feature: String,
        /// The rejected value.
        value: String,
    },

    /// A lexicon entry named an inflection code that does not exist.
    #[error("unknown inflection code: {0}")]
    UnknownInflectionCode(String),

    /// An element of an unexpected kind reached a category-specific stage.
    #[error("{stage} cannot handle {element}")]
    UnrecognizedVariant {
        /// The stage that received the element.
        stage: &'static str,
        /// Short description of the element.
        element: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Pipeline stage or API entry point.
    pub stage: Option<String>,
    /// Description of the element being processed.
    pub element: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stage name.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Sets the element description.
    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stage) = &self.stage {
            write!(f, "in {stage}")?;
        }
        if let Some(element) = &self.element {
            if self.stage.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {element}")?;
        }
        Ok(())
    }
}
