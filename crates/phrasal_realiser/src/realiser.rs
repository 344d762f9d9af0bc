//! The realisation pipeline.

use phrasal_foundation::pretty::print_tree;
use phrasal_foundation::{DocumentCategory, DocumentElement, Element};
use phrasal_lexicon::{Lexicon, LexiconLookup};
use phrasal_morphology::MorphologyProcessor;
use phrasal_orthography::OrthographyProcessor;
use phrasal_syntax::SyntaxProcessor;
use tracing::{debug, trace};

use crate::config::RealiserConfig;
use crate::format::TextFormatter;

/// Runs syntax, morphology, orthography and formatting over a tree.
///
/// The input tree is never modified, so one realiser can be shared and the
/// same tree realised any number of times.
#[derive(Clone, Debug)]
pub struct Realiser<L = Lexicon> {
    lexicon: L,
    config: RealiserConfig,
    formatter: TextFormatter,
}

impl<L: LexiconLookup> Realiser<L> {
    /// Creates a realiser with the default configuration.
    #[must_use]
    pub fn new(lexicon: L) -> Self {
        Self::with_config(lexicon, RealiserConfig::default())
    }

    /// Creates a realiser with the given configuration.
    #[must_use]
    pub fn with_config(lexicon: L, config: RealiserConfig) -> Self {
        Self {
            lexicon,
            config,
            formatter: TextFormatter::new(),
        }
    }

    /// The lexicon words are looked up in.
    #[must_use]
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut RealiserConfig {
        &mut self.config
    }

    /// Realises a tree to formatted text.
    ///
    /// An ELIDED element is returned as it was given.
    #[must_use]
    pub fn realise(&self, element: &Element) -> Element {
        debug!(kind = element.kind(), "realising");
        self.trace_tree("input", element);

        let Some(syntax) = SyntaxProcessor::new(&self.lexicon).realise(element) else {
            debug!(kind = element.kind(), "element is elided");
            return element.clone();
        };
        self.trace_tree("syntax", &syntax);

        let morphology = MorphologyProcessor::new(&self.lexicon).realise(&syntax);
        self.trace_tree("morphology", &morphology);

        let orthography =
            OrthographyProcessor::with_config(self.config.orthography.clone()).realise(&morphology);
        self.trace_tree("orthography", &orthography);

        let text = self.formatter.format(&orthography);
        debug!(length = text.len(), "realised");
        Element::text(text)
    }

    /// Realises an element as a single sentence string.
    ///
    /// Anything that is not already a document element is wrapped in a
    /// sentence first. A tree with nothing left to say gives an empty string.
    #[must_use]
    pub fn realise_sentence(&self, element: &Element) -> String {
        let realised = if element.document_category().is_some() {
            self.realise(element)
        } else {
            let mut sentence = DocumentElement::new(DocumentCategory::Sentence, None);
            sentence.add_component(element.clone());
            self.realise(&Element::Document(sentence))
        };
        realised.realisation().unwrap_or_default().to_string()
    }

    fn trace_tree(&self, stage: &'static str, element: &Element) {
        if self.config.trace_trees {
            trace!(stage, tree = %print_tree(element), "stage output");
        }
    }
}
