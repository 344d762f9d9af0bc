//! The element tree realised by the pipeline.
//!
//! Every stage takes an [`Element`] by reference and builds a new one, so a
//! tree can be realised any number of times and shared between threads.
//! Children are owned by their parent; there are no back references.

use std::fmt;

use crate::category::{DocumentCategory, LexicalCategory, PhraseCategory};
use crate::feature_set::{Feature, FeatureSet};
use crate::features::{ClauseStatus, DiscourseFunction, Flag, NumberAgreement};
use crate::word::{InflectedWordElement, WordElement};

// =============================================================================
// Element
// =============================================================================

/// A node of the tree being realised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// A lexicon word.
    Word(WordElement),
    /// A word placed into a syntactic slot.
    Inflected(InflectedWordElement),
    /// Canned text, or the realised text of any element.
    Text(StringElement),
    /// A phrase or clause.
    Phrase(PhraseElement),
    /// Coordinated phrases joined by a conjunction.
    Coordinated(CoordinatedPhraseElement),
    /// An ordered sequence produced during realisation.
    List(ListElement),
    /// Document structure: sentences, paragraphs, sections, lists.
    Document(DocumentElement),
}

impl Element {
    /// Creates a text element.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(StringElement::new(text))
    }

    /// Creates a list element.
    #[must_use]
    pub fn list(children: Vec<Element>) -> Self {
        Self::List(ListElement::new(children))
    }

    /// The element's features.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        match self {
            Self::Word(e) => &e.features,
            Self::Inflected(e) => &e.features,
            Self::Text(e) => &e.features,
            Self::Phrase(e) => &e.features,
            Self::Coordinated(e) => &e.features,
            Self::List(e) => &e.features,
            Self::Document(e) => &e.features,
        }
    }

    /// The element's features, mutably.
    pub fn features_mut(&mut self) -> &mut FeatureSet {
        match self {
            Self::Word(e) => &mut e.features,
            Self::Inflected(e) => &mut e.features,
            Self::Text(e) => &mut e.features,
            Self::Phrase(e) => &mut e.features,
            Self::Coordinated(e) => &mut e.features,
            Self::List(e) => &mut e.features,
            Self::Document(e) => &mut e.features,
        }
    }

    /// Applies a feature. Clauses also forward it to their verb phrase.
    pub fn set(&mut self, feature: impl Into<Feature>) {
        match self {
            Self::Phrase(phrase) => phrase.set(feature),
            other => other.features_mut().set(feature),
        }
    }

    /// Builder form of [`Element::set`].
    #[must_use]
    pub fn with(mut self, feature: impl Into<Feature>) -> Self {
        self.set(feature);
        self
    }

    /// Reads a flag; slot words fall back to their lexicon word.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        match self {
            Self::Inflected(word) => word.flag(flag),
            other => other.features().flag(flag),
        }
    }

    /// True if the number is PLURAL.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.features().is_plural()
    }

    /// Sets NUMBER to PLURAL or SINGULAR.
    pub fn set_plural(&mut self, plural: bool) {
        let number = if plural {
            NumberAgreement::Plural
        } else {
            NumberAgreement::Singular
        };
        self.set(number);
    }

    /// The discourse function tag.
    #[must_use]
    pub fn discourse_function(&self) -> Option<DiscourseFunction> {
        self.features().discourse_function
    }

    /// Tags the element with a discourse function.
    pub fn set_discourse_function(&mut self, function: DiscourseFunction) {
        self.features_mut().discourse_function = Some(function);
    }

    /// Lexical category of a word-bearing element.
    #[must_use]
    pub fn lexical_category(&self) -> Option<LexicalCategory> {
        match self {
            Self::Word(e) => Some(e.category),
            Self::Inflected(e) => Some(e.category),
            _ => None,
        }
    }

    /// Phrase category of a phrase.
    #[must_use]
    pub fn phrase_category(&self) -> Option<PhraseCategory> {
        match self {
            Self::Phrase(p) => Some(p.category),
            Self::Text(_) => Some(PhraseCategory::CannedText),
            _ => None,
        }
    }

    /// Document category of a document element.
    #[must_use]
    pub fn document_category(&self) -> Option<DocumentCategory> {
        match self {
            Self::Document(d) => Some(d.category),
            _ => None,
        }
    }

    /// True for a phrase of the given category.
    #[must_use]
    pub fn is_phrase(&self, category: PhraseCategory) -> bool {
        matches!(self, Self::Phrase(p) if p.category == category)
    }

    /// True for a clause.
    #[must_use]
    pub fn is_clause(&self) -> bool {
        self.is_phrase(PhraseCategory::Clause)
    }

    /// True for a word-bearing element of the given category.
    #[must_use]
    pub fn is_word_of(&self, category: LexicalCategory) -> bool {
        self.lexical_category() == Some(category)
    }

    /// Base form of a word-bearing element.
    #[must_use]
    pub fn base_form(&self) -> Option<&str> {
        match self {
            Self::Word(e) => Some(&e.base_form),
            Self::Inflected(e) => Some(&e.base_form),
            _ => None,
        }
    }

    /// Realised text, for text and realised document elements.
    #[must_use]
    pub fn realisation(&self) -> Option<&str> {
        match self {
            Self::Text(e) => Some(&e.text),
            Self::Document(e) => e.realisation.as_deref(),
            _ => None,
        }
    }

    /// The phrase, if this is one.
    #[must_use]
    pub fn as_phrase(&self) -> Option<&PhraseElement> {
        match self {
            Self::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// The phrase, mutably.
    pub fn as_phrase_mut(&mut self) -> Option<&mut PhraseElement> {
        match self {
            Self::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// Child elements in surface order, for printing and traversal.
    #[must_use]
    pub fn children(&self) -> Vec<&Element> {
        match self {
            Self::Word(_) | Self::Inflected(_) | Self::Text(_) => Vec::new(),
            Self::Phrase(p) => p.children(),
            Self::Coordinated(c) => c.coordinates.iter().collect(),
            Self::List(l) => l.children.iter().collect(),
            Self::Document(d) => d.components.iter().collect(),
        }
    }

    /// The only child of a one-element list, otherwise the element itself.
    #[must_use]
    pub fn flattened(&self) -> &Element {
        match self {
            Self::List(list) => match list.children.as_slice() {
                [only] => only,
                _ => self,
            },
            other => other,
        }
    }

    /// Short kind name used in logs and errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Word(_) => "Word",
            Self::Inflected(_) => "Inflected",
            Self::Text(_) => "Text",
            Self::Phrase(_) => "Phrase",
            Self::Coordinated(_) => "Coordinated",
            Self::List(_) => "List",
            Self::Document(_) => "Document",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::Inflected(e) => write!(f, "{e}"),
            Self::Text(e) => write!(f, "StringElement[{}]", e.text),
            Self::Phrase(p) => write!(f, "Phrase({})", p.category),
            Self::Coordinated(c) => write!(f, "Coordinated({})", c.coordinates.len()),
            Self::List(l) => write!(f, "List({})", l.children.len()),
            Self::Document(d) => write!(f, "Document({})", d.category),
        }
    }
}

impl From<WordElement> for Element {
    fn from(value: WordElement) -> Self {
        Self::Word(value)
    }
}

impl From<InflectedWordElement> for Element {
    fn from(value: InflectedWordElement) -> Self {
        Self::Inflected(value)
    }
}

impl From<StringElement> for Element {
    fn from(value: StringElement) -> Self {
        Self::Text(value)
    }
}

impl From<PhraseElement> for Element {
    fn from(value: PhraseElement) -> Self {
        Self::Phrase(value)
    }
}

impl From<CoordinatedPhraseElement> for Element {
    fn from(value: CoordinatedPhraseElement) -> Self {
        Self::Coordinated(value)
    }
}

impl From<ListElement> for Element {
    fn from(value: ListElement) -> Self {
        Self::List(value)
    }
}

impl From<DocumentElement> for Element {
    fn from(value: DocumentElement) -> Self {
        Self::Document(value)
    }
}

// =============================================================================
// StringElement
// =============================================================================

/// Opaque text, realised verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringElement {
    /// The text.
    pub text: String,
    /// Features.
    pub features: FeatureSet,
}

impl StringElement {
    /// Creates a text element.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            features: FeatureSet::new(),
        }
    }
}

// =============================================================================
// PhraseElement
// =============================================================================

/// A phrase of any category, including clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseElement {
    /// Phrase category.
    pub category: PhraseCategory,
    /// Features.
    pub features: FeatureSet,
    /// Head word or phrase.
    pub head: Option<Box<Element>>,
    /// Determiner or possessor of a noun phrase.
    pub specifier: Option<Box<Element>>,
    /// Modifiers realised before the head.
    pub premodifiers: Vec<Element>,
    /// Modifiers realised after the head and complements.
    pub postmodifiers: Vec<Element>,
    /// Clause modifiers realised before the subject.
    pub front_modifiers: Vec<Element>,
    /// Complements, tagged with their discourse function.
    pub complements: Vec<Element>,
    /// Clause subjects.
    pub subjects: Vec<Element>,
    /// Verb phrase of a clause.
    pub verb_phrase: Option<Box<Element>>,
    /// Cue phrase of a clause ("however").
    pub cue_phrase: Option<Box<Element>>,
    /// Complementiser of a subordinate clause ("that").
    pub complementiser: Option<Box<Element>>,
}

impl PhraseElement {
    /// Creates an empty phrase. ELIDED starts as `false`.
    #[must_use]
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category,
            features: FeatureSet::new().with(Feature::Flag(Flag::Elided, false)),
            head: None,
            specifier: None,
            premodifiers: Vec::new(),
            postmodifiers: Vec::new(),
            front_modifiers: Vec::new(),
            complements: Vec::new(),
            subjects: Vec::new(),
            verb_phrase: None,
            cue_phrase: None,
            complementiser: None,
        }
    }

    /// Applies a feature; a clause forwards verb features to its verb phrase.
    pub fn set(&mut self, feature: impl Into<Feature>) {
        let feature = feature.into();
        if self.category == PhraseCategory::Clause && feature.forwards_to_verb_phrase() {
            if let Some(vp) = self.verb_phrase.as_deref_mut() {
                vp.set(feature.clone());
            }
        }
        self.features.set(feature);
    }

    /// Builder form of [`PhraseElement::set`].
    #[must_use]
    pub fn with(mut self, feature: impl Into<Feature>) -> Self {
        self.set(feature);
        self
    }

    /// Features with verb features a clause leaves unset read from its verb phrase.
    #[must_use]
    pub fn resolved_features(&self) -> FeatureSet {
        let mut features = self.features.clone();
        if self.category != PhraseCategory::Clause {
            return features;
        }
        let Some(vp) = self.verb_phrase.as_deref() else {
            return features;
        };
        let from = vp.features();
        features.tense = features.tense.or(from.tense);
        features.form = features.form.or(from.form);
        features.number = features.number.or(from.number);
        features.person = features.person.or(from.person);
        features.interrogative_type = features.interrogative_type.or(from.interrogative_type);
        if features.modal.is_none() {
            features.modal.clone_from(&from.modal);
        }
        if features.particle.is_none() {
            features.particle.clone_from(&from.particle);
        }
        for flag in [
            Flag::Negated,
            Flag::Passive,
            Flag::Perfect,
            Flag::Progressive,
            Flag::RealiseAuxiliary,
        ] {
            if !features.has_flag(flag) {
                features.set_flag_value(flag, from.flag_value(flag));
            }
        }
        features
    }

    /// Sets the head.
    pub fn set_head(&mut self, head: impl Into<Element>) {
        self.head = Some(Box::new(head.into()));
    }

    /// Sets the specifier.
    pub fn set_specifier(&mut self, specifier: impl Into<Element>) {
        self.specifier = Some(Box::new(specifier.into()));
    }

    /// Adds a premodifier.
    pub fn add_pre_modifier(&mut self, modifier: impl Into<Element>) {
        self.premodifiers.push(modifier.into());
    }

    /// Adds a front modifier.
    pub fn add_front_modifier(&mut self, modifier: impl Into<Element>) {
        self.front_modifiers.push(modifier.into());
    }

    /// Adds a postmodifier, tagging non-text modifiers POST_MODIFIER.
    pub fn add_post_modifier(&mut self, modifier: impl Into<Element>) {
        let mut modifier = modifier.into();
        if !matches!(modifier, Element::Text(_)) {
            modifier.set_discourse_function(DiscourseFunction::PostModifier);
        }
        self.postmodifiers.push(modifier);
    }

    /// Adds a complement.
    ///
    /// Untagged complements become OBJECTs. Clauses and coordinations become
    /// SUBORDINATE.
    pub fn add_complement(&mut self, complement: impl Into<Element>) {
        let mut complement = complement.into();
        if !matches!(complement, Element::Text(_)) {
            if complement.discourse_function().is_none() {
                complement.set_discourse_function(DiscourseFunction::Object);
            }
            if complement.is_clause() || matches!(complement, Element::Coordinated(_)) {
                complement.set(ClauseStatus::Subordinate);
            }
        }
        self.complements.push(complement);
    }

    /// Replaces any complement with the same discourse function.
    pub fn set_complement(&mut self, complement: impl Into<Element>) {
        let complement = complement.into();
        match complement.discourse_function() {
            Some(function) => self.remove_complements(function),
            None => self.complements.clear(),
        }
        self.add_complement(complement);
    }

    /// Removes every complement tagged with the discourse function.
    pub fn remove_complements(&mut self, function: DiscourseFunction) {
        self.complements
            .retain(|c| c.discourse_function() != Some(function));
    }

    /// The complements tagged with the discourse function.
    pub fn complements_with(
        &self,
        function: DiscourseFunction,
    ) -> impl Iterator<Item = &Element> {
        self.complements
            .iter()
            .filter(move |c| c.discourse_function() == Some(function))
    }

    /// Child elements in surface order.
    #[must_use]
    pub fn children(&self) -> Vec<&Element> {
        let mut children: Vec<&Element> = Vec::new();
        match self.category {
            PhraseCategory::Clause => {
                children.extend(self.cue_phrase.as_deref());
                children.extend(&self.front_modifiers);
                children.extend(&self.premodifiers);
                children.extend(&self.subjects);
                children.extend(self.verb_phrase.as_deref());
                children.extend(&self.complements);
            }
            PhraseCategory::CannedText => {}
            _ => {
                children.extend(self.specifier.as_deref());
                children.extend(&self.premodifiers);
                children.extend(self.head.as_deref());
                children.extend(&self.complements);
                children.extend(&self.postmodifiers);
            }
        }
        children
    }
}

// =============================================================================
// CoordinatedPhraseElement
// =============================================================================

const PLURAL_COORDINATORS: &[&str] = &["and"];

/// Phrases joined by a conjunction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinatedPhraseElement {
    /// Features. CONJUNCTION starts as "and".
    pub features: FeatureSet,
    /// The coordinated phrases.
    pub coordinates: Vec<Element>,
    /// Specifier shared by every coordinate ("every").
    pub specifier: Option<Box<Element>>,
    /// Modifiers before the whole coordination.
    pub premodifiers: Vec<Element>,
    /// Modifiers after the whole coordination.
    pub postmodifiers: Vec<Element>,
    /// Complements shared by the coordinates.
    pub complements: Vec<Element>,
}

impl Default for CoordinatedPhraseElement {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatedPhraseElement {
    /// Creates an empty coordination joined by "and".
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: FeatureSet::new().with(Feature::Conjunction("and".to_string())),
            coordinates: Vec::new(),
            specifier: None,
            premodifiers: Vec::new(),
            postmodifiers: Vec::new(),
            complements: Vec::new(),
        }
    }

    /// Creates a coordination of the given elements.
    #[must_use]
    pub fn of(coordinates: impl IntoIterator<Item = Element>) -> Self {
        let mut coordinated = Self::new();
        for coordinate in coordinates {
            coordinated.add_coordinate(coordinate);
        }
        coordinated
    }

    /// Adds a coordinate.
    ///
    /// Every clause after the first, and every text coordinate, has its
    /// complementiser suppressed.
    pub fn add_coordinate(&mut self, coordinate: impl Into<Element>) {
        let mut coordinate = coordinate.into();
        let suppress = match &coordinate {
            Element::Text(_) => true,
            other => other.is_clause() && !self.coordinates.is_empty(),
        };
        if suppress {
            coordinate.set(Flag::SuppressedComplementiser);
        }
        self.coordinates.push(coordinate);
    }

    /// The conjunction, if any.
    #[must_use]
    pub fn conjunction(&self) -> Option<&str> {
        self.features.conjunction.as_deref()
    }

    /// Sets the conjunction.
    pub fn set_conjunction(&mut self, conjunction: impl Into<String>) {
        self.features.conjunction = Some(conjunction.into());
    }

    /// The last coordinate.
    #[must_use]
    pub fn last_coordinate(&self) -> Option<&Element> {
        self.coordinates.last()
    }

    /// True if the coordination agrees as a plural.
    ///
    /// A single coordinate decides by its own number; otherwise the
    /// conjunction decides ("and" is plural, "or" is not).
    #[must_use]
    pub fn check_if_plural(&self) -> bool {
        if self.coordinates.len() == 1 {
            self.last_coordinate().is_some_and(Element::is_plural)
        } else {
            self.conjunction()
                .is_some_and(|c| PLURAL_COORDINATORS.contains(&c))
        }
    }
}

// =============================================================================
// ListElement
// =============================================================================

/// An ordered sequence of elements produced during realisation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListElement {
    /// Features. INTERROGATIVE marks the realised output of a question.
    pub features: FeatureSet,
    /// The elements, in surface order.
    pub children: Vec<Element>,
}

impl ListElement {
    /// Creates a list.
    #[must_use]
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            features: FeatureSet::new(),
            children,
        }
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// First child.
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.children.first()
    }
}

// =============================================================================
// DocumentElement
// =============================================================================

/// A unit of document structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentElement {
    /// Document category.
    pub category: DocumentCategory,
    /// Title of a document or section.
    pub title: Option<String>,
    /// Components.
    pub components: Vec<Element>,
    /// Text produced by orthography or formatting.
    pub realisation: Option<String>,
    /// Features.
    pub features: FeatureSet,
}

impl DocumentElement {
    /// Creates an empty document element.
    #[must_use]
    pub fn new(category: DocumentCategory, title: Option<String>) -> Self {
        Self {
            category,
            title,
            components: Vec::new(),
            realisation: None,
            features: FeatureSet::new(),
        }
    }

    /// Adds a component, promoting it when it cannot sit here directly.
    ///
    /// A non-document element is wrapped in a sentence, and a sentence in a
    /// paragraph, until the result fits. Anything that still does not fit is
    /// added unchanged.
    pub fn add_component(&mut self, element: impl Into<Element>) {
        let element = element.into();
        let promoted = self.promote(element);
        self.components.push(promoted);
    }

    /// Adds several components.
    pub fn add_components(&mut self, elements: impl IntoIterator<Item = Element>) {
        for element in elements {
            self.add_component(element);
        }
    }

    fn promote(&self, element: Element) -> Element {
        if self.category.has_sub_part(element.document_category()) {
            return element;
        }
        let wrapped = match element.document_category() {
            None => DocumentCategory::Sentence,
            Some(DocumentCategory::Sentence) => DocumentCategory::Paragraph,
            Some(_) => return element,
        };
        if !self.category.has_sub_part(Some(wrapped))
            && !(wrapped == DocumentCategory::Sentence
                && self.category.has_sub_part(Some(DocumentCategory::Paragraph)))
        {
            return element;
        }
        let mut wrapper = DocumentElement::new(wrapped, None);
        wrapper.components.push(element);
        self.promote(Element::Document(wrapper))
    }
}
