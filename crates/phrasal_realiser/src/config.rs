//! Configuration for the realiser.

use phrasal_orthography::OrthographyConfig;

/// Options for a [`Realiser`](crate::Realiser).
#[derive(Clone, Debug, Default)]
pub struct RealiserConfig {
    /// Comma placement for the orthography stage.
    pub orthography: OrthographyConfig,
    /// Log the whole tree after every stage at TRACE level.
    pub trace_trees: bool,
}

impl RealiserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with stage tree tracing enabled.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            trace_trees: true,
            ..Self::default()
        }
    }

    /// Builder method to replace the orthography options.
    #[must_use]
    pub fn with_orthography(mut self, orthography: OrthographyConfig) -> Self {
        self.orthography = orthography;
        self
    }

    /// Builder method to toggle premodifier commas.
    #[must_use]
    pub fn with_comma_separate_premodifiers(mut self, enabled: bool) -> Self {
        self.orthography.comma_separate_premodifiers = enabled;
        self
    }

    /// Builder method to toggle stage tree tracing.
    #[must_use]
    pub fn with_trace_trees(mut self, enabled: bool) -> Self {
        self.trace_trees = enabled;
        self
    }
}
