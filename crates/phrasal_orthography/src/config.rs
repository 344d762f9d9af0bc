//! Configuration for the orthography stage.

/// Comma placement options.
#[derive(Clone, Debug)]
pub struct OrthographyConfig {
    /// Separate premodifiers with commas ("a big, red dog").
    pub comma_separate_premodifiers: bool,
    /// Follow cue phrases and front modifiers with a comma ("however, ...").
    pub comma_separate_cue_phrase: bool,
}

impl Default for OrthographyConfig {
    fn default() -> Self {
        Self {
            comma_separate_premodifiers: true,
            comma_separate_cue_phrase: false,
        }
    }
}

impl OrthographyConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No commas beyond those coordination and apposition require.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            comma_separate_premodifiers: false,
            comma_separate_cue_phrase: false,
        }
    }

    /// Builder method to toggle premodifier commas.
    #[must_use]
    pub fn with_comma_separate_premodifiers(mut self, enabled: bool) -> Self {
        self.comma_separate_premodifiers = enabled;
        self
    }

    /// Builder method to toggle cue phrase commas.
    #[must_use]
    pub fn with_comma_separate_cue_phrase(mut self, enabled: bool) -> Self {
        self.comma_separate_cue_phrase = enabled;
        self
    }
}
