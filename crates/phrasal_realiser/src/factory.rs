//! Construction API for input trees.
//!
//! [`PhraseFactory`] builds phrases with the default features each kind of
//! phrase expects, looking words up in a lexicon as it goes. Arguments are
//! either plain strings or ready-made elements; see [`TextOrElement`].

use phrasal_foundation::{
    ClauseStatus, CoordinatedPhraseElement, DiscourseFunction, DocumentCategory, DocumentElement,
    Element, Feature, Flag, Form, Gender, LexicalCategory, NumberAgreement, Person,
    PhraseCategory, PhraseElement, Tense, WordElement,
};
use phrasal_lexicon::LexiconLookup;

const PRONOUNS: &[&str] = &[
    "I", "you", "he", "she", "it", "me", "him", "her", "myself", "yourself", "himself",
    "herself", "itself", "mine", "yours", "his", "hers", "its", "we", "they", "us", "them",
    "ourselves", "yourselves", "themselves", "ours", "theirs", "there",
];
const FIRST_PERSON: &[&str] = &[
    "I", "me", "myself", "we", "us", "ourselves", "mine", "my", "ours", "our",
];
const SECOND_PERSON: &[&str] = &["you", "yourself", "yourselves", "yours", "your"];
const REFLEXIVE: &[&str] = &[
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
    "themselves",
];
const MASCULINE: &[&str] = &["he", "him", "himself", "his"];
const FEMININE: &[&str] = &["she", "her", "herself", "hers"];
const POSSESSIVE: &[&str] = &[
    "mine", "ours", "yours", "his", "hers", "its", "theirs", "my", "our", "your", "her",
    "their",
];
const PLURAL: &[&str] = &["we", "us", "ourselves", "ours", "our", "they", "them", "theirs", "their"];
const EXPLETIVE: &[&str] = &["there"];

/// A factory argument: a string to look up, an element, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextOrElement {
    /// No argument.
    #[default]
    Nothing,
    /// A string, turned into a word when it is one.
    Text(String),
    /// A ready-made element.
    Element(Element),
}

impl From<()> for TextOrElement {
    fn from((): ()) -> Self {
        Self::Nothing
    }
}

impl From<&str> for TextOrElement {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextOrElement {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Element> for TextOrElement {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<WordElement> for TextOrElement {
    fn from(value: WordElement) -> Self {
        Self::Element(Element::Word(value))
    }
}

impl From<PhraseElement> for TextOrElement {
    fn from(value: PhraseElement) -> Self {
        Self::Element(Element::Phrase(value))
    }
}

impl From<CoordinatedPhraseElement> for TextOrElement {
    fn from(value: CoordinatedPhraseElement) -> Self {
        Self::Element(Element::Coordinated(value))
    }
}

impl From<DocumentElement> for TextOrElement {
    fn from(value: DocumentElement) -> Self {
        Self::Element(Element::Document(value))
    }
}

impl<T: Into<TextOrElement>> From<Option<T>> for TextOrElement {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Into::into)
    }
}

/// Builds phrases, clauses and documents.
pub struct PhraseFactory<'a> {
    lexicon: &'a dyn LexiconLookup,
}

impl<'a> PhraseFactory<'a> {
    /// Creates a factory that looks words up in `lexicon`.
    #[must_use]
    pub fn new(lexicon: &'a dyn LexiconLookup) -> Self {
        Self { lexicon }
    }

    // =========================================================================
    // Words
    // =========================================================================

    /// Looks up a word. Pronouns are recategorised and given their person,
    /// number, gender, reflexive and possessive features.
    #[must_use]
    pub fn word(&self, word: &str, category: LexicalCategory) -> WordElement {
        let mut element = self.lexicon.lookup_word(word, category);
        if PRONOUNS.contains(&word) {
            set_pronoun_features(&mut element, word);
        }
        element
    }

    /// Turns an argument into an element.
    ///
    /// Strings that name a single word (or a listed word or pronoun) become
    /// words; longer strings stay canned text. A slot word is replaced by its
    /// lexicon word.
    #[must_use]
    pub fn element(&self, input: impl Into<TextOrElement>, category: LexicalCategory) -> Option<Element> {
        match input.into() {
            TextOrElement::Nothing => None,
            TextOrElement::Text(text) => Some(self.text_element(text, category)),
            TextOrElement::Element(Element::Inflected(mut word)) => match word.base_word.take() {
                Some(base) => Some(Element::Word(base)),
                None => Some(Element::Inflected(word)),
            },
            TextOrElement::Element(Element::Text(text)) if text.features.is_empty() => {
                Some(self.text_element(text.text, category))
            }
            TextOrElement::Element(element) => Some(element),
        }
    }

    /// Canned text.
    #[must_use]
    pub fn text(&self, text: &str) -> Element {
        Element::text(text)
    }

    fn text_element(&self, text: String, category: LexicalCategory) -> Element {
        if self.is_word(&text, category) {
            Element::Word(self.word(&text, category))
        } else {
            Element::text(text)
        }
    }

    fn is_word(&self, text: &str, category: LexicalCategory) -> bool {
        !text.is_empty()
            && (self.lexicon.has_word(text, category)
                || PRONOUNS.contains(&text)
                || !text.contains(' '))
    }

    // =========================================================================
    // Phrases
    // =========================================================================

    /// A noun phrase headed by `noun`. A noun phrase passed in is returned
    /// unchanged.
    #[must_use]
    pub fn noun_phrase(&self, noun: impl Into<TextOrElement>) -> PhraseElement {
        match noun.into() {
            TextOrElement::Element(Element::Phrase(phrase))
                if phrase.category == PhraseCategory::NounPhrase =>
            {
                phrase
            }
            input => {
                let mut phrase = PhraseElement::new(PhraseCategory::NounPhrase);
                if let Some(head) = self.element(input, LexicalCategory::Noun) {
                    set_noun_head(&mut phrase, head);
                }
                phrase
            }
        }
    }

    /// A noun phrase with a specifier ("the dog").
    #[must_use]
    pub fn noun_phrase_with(
        &self,
        specifier: impl Into<TextOrElement>,
        noun: impl Into<TextOrElement>,
    ) -> PhraseElement {
        let mut phrase = self.noun_phrase(noun);
        self.set_specifier(&mut phrase, specifier);
        phrase
    }

    /// Sets a noun phrase's specifier. Strings are looked up as determiners.
    pub fn set_specifier(&self, phrase: &mut PhraseElement, specifier: impl Into<TextOrElement>) {
        let specifier = match specifier.into() {
            TextOrElement::Nothing => return,
            TextOrElement::Text(text) => Element::Word(self.word(&text, LexicalCategory::Determiner)),
            TextOrElement::Element(element) => element,
        };
        phrase.set_specifier(specifier.with(DiscourseFunction::Specifier));
    }

    /// A verb phrase with the default verb features. "pick up" becomes the
    /// verb "pick" with the particle "up".
    #[must_use]
    pub fn verb_phrase(&self, verb: impl Into<TextOrElement>) -> PhraseElement {
        let mut phrase = empty_verb_phrase();
        self.set_verb(&mut phrase, verb);
        phrase
    }

    /// A prepositional phrase ("in the park").
    #[must_use]
    pub fn preposition_phrase(
        &self,
        preposition: impl Into<TextOrElement>,
        complement: impl Into<TextOrElement>,
    ) -> PhraseElement {
        let mut phrase = PhraseElement::new(PhraseCategory::PrepositionalPhrase);
        if let Some(head) = self.element(preposition, LexicalCategory::Preposition) {
            phrase.set_head(head);
        }
        if let Some(complement) = self.element(complement, LexicalCategory::Any) {
            phrase.add_complement(complement);
        }
        phrase
    }

    /// An adjective phrase.
    #[must_use]
    pub fn adjective_phrase(&self, adjective: impl Into<TextOrElement>) -> PhraseElement {
        self.headed(PhraseCategory::AdjectivePhrase, adjective, LexicalCategory::Adjective)
    }

    /// An adverb phrase.
    #[must_use]
    pub fn adverb_phrase(&self, adverb: impl Into<TextOrElement>) -> PhraseElement {
        self.headed(PhraseCategory::AdverbPhrase, adverb, LexicalCategory::Adverb)
    }

    fn headed(
        &self,
        category: PhraseCategory,
        head: impl Into<TextOrElement>,
        lexical: LexicalCategory,
    ) -> PhraseElement {
        let mut phrase = PhraseElement::new(category);
        if let Some(head) = self.element(head, lexical) {
            phrase.set_head(head);
        }
        phrase
    }

    /// Coordinates two elements with "and".
    #[must_use]
    pub fn coordinated(
        &self,
        first: impl Into<TextOrElement>,
        second: impl Into<TextOrElement>,
    ) -> CoordinatedPhraseElement {
        let first = self.element(first, LexicalCategory::Any);
        let second = self.element(second, LexicalCategory::Any);
        CoordinatedPhraseElement::of(first.into_iter().chain(second))
    }

    // =========================================================================
    // Clauses
    // =========================================================================

    /// A matrix clause. Any argument may be `()` or `None`.
    ///
    /// Strings for the subject and object become noun phrases; a verb phrase
    /// given as the verb replaces the clause's own.
    #[must_use]
    pub fn clause(
        &self,
        subject: impl Into<TextOrElement>,
        verb: impl Into<TextOrElement>,
        object: impl Into<TextOrElement>,
    ) -> PhraseElement {
        let mut clause = PhraseElement::new(PhraseCategory::Clause)
            .with(ClauseStatus::Matrix)
            .with(Feature::Flag(Flag::SuppressedComplementiser, false))
            .with(Feature::Flag(Flag::ExpletiveSubject, false));
        clause.verb_phrase = Some(Box::new(Element::Phrase(empty_verb_phrase())));
        clause.complementiser = Some(Box::new(Element::Word(
            self.word("that", LexicalCategory::Complementiser),
        )));

        match verb.into() {
            TextOrElement::Element(element @ (Element::Phrase(_) | Element::Coordinated(_))) => {
                clause.verb_phrase = Some(Box::new(element));
            }
            verb => self.set_verb(&mut clause, verb),
        }
        self.set_subject(&mut clause, subject);
        self.set_object(&mut clause, object);
        clause
    }

    /// Sets the head verb of a verb phrase, or of a clause's verb phrase.
    pub fn set_verb(&self, phrase: &mut PhraseElement, verb: impl Into<TextOrElement>) {
        if phrase.category == PhraseCategory::Clause {
            if let Some(vp) = verb_phrase_mut(phrase) {
                self.set_verb(vp, verb);
            }
            return;
        }

        let head = match verb.into() {
            TextOrElement::Text(text) => match text.split_once(' ') {
                Some((verb, particle)) => {
                    phrase.set(Feature::Particle(particle.to_string()));
                    Element::Word(self.word(verb, LexicalCategory::Verb))
                }
                None => Element::Word(self.word(&text, LexicalCategory::Verb)),
            },
            other => match self.element(other, LexicalCategory::Verb) {
                Some(element) => element,
                None => return,
            },
        };
        phrase.set_head(head);
    }

    /// Replaces a clause's subjects.
    pub fn set_subject(&self, clause: &mut PhraseElement, subject: impl Into<TextOrElement>) {
        if let Some(subject) = self.argument_phrase(subject) {
            clause.subjects = vec![subject];
        }
    }

    /// Sets the direct object of a verb phrase or clause.
    pub fn set_object(&self, phrase: &mut PhraseElement, object: impl Into<TextOrElement>) {
        self.set_verb_complement(phrase, object, DiscourseFunction::Object);
    }

    /// Sets the indirect object of a verb phrase or clause.
    pub fn set_indirect_object(&self, phrase: &mut PhraseElement, object: impl Into<TextOrElement>) {
        self.set_verb_complement(phrase, object, DiscourseFunction::IndirectObject);
    }

    /// Adds a complement; a clause passes it to its verb phrase.
    pub fn add_complement(&self, phrase: &mut PhraseElement, complement: impl Into<TextOrElement>) {
        let Some(complement) = self.element(complement, LexicalCategory::Any) else {
            return;
        };
        if phrase.category == PhraseCategory::Clause {
            if let Some(vp) = verb_phrase_mut(phrase) {
                vp.add_complement(complement);
                return;
            }
        }
        phrase.add_complement(complement);
    }

    fn set_verb_complement(
        &self,
        phrase: &mut PhraseElement,
        object: impl Into<TextOrElement>,
        function: DiscourseFunction,
    ) {
        if phrase.category == PhraseCategory::Clause {
            if let Some(vp) = verb_phrase_mut(phrase) {
                self.set_verb_complement(vp, object, function);
            }
            return;
        }
        if let Some(object) = self.argument_phrase(object) {
            phrase.set_complement(object.with(function));
        }
    }

    /// Phrases and coordinations as given; anything else as a noun phrase.
    fn argument_phrase(&self, argument: impl Into<TextOrElement>) -> Option<Element> {
        match argument.into() {
            TextOrElement::Nothing => None,
            TextOrElement::Element(element @ (Element::Phrase(_) | Element::Coordinated(_))) => {
                Some(element)
            }
            other => Some(Element::Phrase(self.noun_phrase(other))),
        }
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Adds a modifier where it belongs.
    ///
    /// In a clause, adverb phrases and adverbs premodify the verb, sentence
    /// modifiers ("fortunately") go to the front and everything else
    /// postmodifies. In a verb phrase adverbs premodify and everything else
    /// postmodifies. Other phrases take every modifier before the head.
    pub fn add_modifier(&self, phrase: &mut PhraseElement, modifier: impl Into<TextOrElement>) {
        let modifier = modifier.into();
        match phrase.category {
            PhraseCategory::Clause => self.add_clause_modifier(phrase, modifier),
            PhraseCategory::VerbPhrase => self.add_verb_modifier(phrase, modifier),
            _ => match modifier {
                TextOrElement::Nothing => {}
                TextOrElement::Text(text) => phrase.add_pre_modifier(Element::text(text)),
                TextOrElement::Element(element) => phrase.add_pre_modifier(element),
            },
        }
    }

    fn add_clause_modifier(&self, clause: &mut PhraseElement, modifier: TextOrElement) {
        let Some(element) = self.modifier_element(modifier) else {
            return;
        };
        if element.is_phrase(PhraseCategory::AdverbPhrase) {
            add_clause_pre_modifier(clause, element);
            return;
        }
        match adverb(&element).map(|word| word.features.flag(Flag::SentenceModifier)) {
            Some(true) => clause.add_front_modifier(element),
            Some(false) => add_clause_pre_modifier(clause, element),
            None => clause.add_post_modifier(element),
        }
    }

    fn add_verb_modifier(&self, phrase: &mut PhraseElement, modifier: TextOrElement) {
        let Some(element) = self.modifier_element(modifier) else {
            return;
        };
        if adverb(&element).is_some() {
            phrase.add_pre_modifier(element);
        } else {
            phrase.add_post_modifier(element);
        }
    }

    /// Single-word strings are looked up; longer ones stay canned text.
    fn modifier_element(&self, modifier: TextOrElement) -> Option<Element> {
        match modifier {
            TextOrElement::Nothing => None,
            TextOrElement::Text(text) if !text.is_empty() && !text.contains(' ') => {
                Some(Element::Word(self.word(&text, LexicalCategory::Any)))
            }
            TextOrElement::Text(text) => Some(Element::text(text)),
            TextOrElement::Element(element) => Some(element),
        }
    }

    // =========================================================================
    // Documents
    // =========================================================================

    /// A sentence holding `content`. Strings become canned text.
    #[must_use]
    pub fn sentence(&self, content: impl Into<TextOrElement>) -> DocumentElement {
        let mut sentence = DocumentElement::new(DocumentCategory::Sentence, None);
        match content.into() {
            TextOrElement::Nothing => {}
            TextOrElement::Text(text) => sentence.add_component(Element::text(text)),
            TextOrElement::Element(element) => sentence.add_component(element),
        }
        sentence
    }

    /// A sentence holding a single clause.
    #[must_use]
    pub fn clause_sentence(
        &self,
        subject: impl Into<TextOrElement>,
        verb: impl Into<TextOrElement>,
        object: impl Into<TextOrElement>,
    ) -> DocumentElement {
        self.sentence(self.clause(subject, verb, object))
    }

    /// A titled document.
    #[must_use]
    pub fn document(&self, title: Option<&str>) -> DocumentElement {
        DocumentElement::new(DocumentCategory::Document, title.map(str::to_string))
    }

    /// A titled section.
    #[must_use]
    pub fn section(&self, title: Option<&str>) -> DocumentElement {
        DocumentElement::new(DocumentCategory::Section, title.map(str::to_string))
    }

    /// A paragraph. Bare phrases are wrapped in sentences.
    #[must_use]
    pub fn paragraph(&self, components: impl IntoIterator<Item = Element>) -> DocumentElement {
        let mut paragraph = DocumentElement::new(DocumentCategory::Paragraph, None);
        paragraph.add_components(components);
        paragraph
    }

    /// A bulleted list.
    #[must_use]
    pub fn list(&self, items: impl IntoIterator<Item = Element>) -> DocumentElement {
        self.list_of(DocumentCategory::List, items)
    }

    /// A numbered list.
    #[must_use]
    pub fn enumerated_list(&self, items: impl IntoIterator<Item = Element>) -> DocumentElement {
        self.list_of(DocumentCategory::EnumeratedList, items)
    }

    fn list_of(
        &self,
        category: DocumentCategory,
        items: impl IntoIterator<Item = Element>,
    ) -> DocumentElement {
        let mut list = DocumentElement::new(category, None);
        for item in items {
            match item.document_category() {
                Some(DocumentCategory::ListItem) => list.add_component(item),
                _ => list.add_component(self.list_item(item)),
            }
        }
        list
    }

    /// A list item.
    #[must_use]
    pub fn list_item(&self, content: impl Into<TextOrElement>) -> DocumentElement {
        let mut item = DocumentElement::new(DocumentCategory::ListItem, None);
        match content.into() {
            TextOrElement::Nothing => {}
            TextOrElement::Text(text) => item.add_component(Element::text(text)),
            TextOrElement::Element(element) => item.add_component(element),
        }
        item
    }
}

fn empty_verb_phrase() -> PhraseElement {
    PhraseElement::new(PhraseCategory::VerbPhrase)
        .with(Feature::Flag(Flag::Perfect, false))
        .with(Feature::Flag(Flag::Progressive, false))
        .with(Feature::Flag(Flag::Passive, false))
        .with(Feature::Flag(Flag::Negated, false))
        .with(Tense::Present)
        .with(Person::Third)
        .with(NumberAgreement::Singular)
        .with(Form::Normal)
        .with(Flag::RealiseAuxiliary)
}

fn verb_phrase_mut(clause: &mut PhraseElement) -> Option<&mut PhraseElement> {
    clause.verb_phrase.as_deref_mut().and_then(Element::as_phrase_mut)
}

/// Clause premodifiers belong to the verb phrase when there is one.
fn add_clause_pre_modifier(clause: &mut PhraseElement, modifier: Element) {
    match clause.verb_phrase.as_deref_mut() {
        Some(Element::Phrase(vp)) => vp.add_pre_modifier(modifier),
        Some(Element::Coordinated(coordinated)) => coordinated.premodifiers.push(modifier),
        _ => clause.add_pre_modifier(modifier),
    }
}

/// The lexicon word behind an adverb element.
fn adverb(element: &Element) -> Option<&WordElement> {
    let word = match element {
        Element::Word(word) => word,
        Element::Inflected(word) => word.base_word.as_ref()?,
        _ => return None,
    };
    (word.category == LexicalCategory::Adverb).then_some(word)
}

/// The head decides the phrase's agreement features.
fn set_noun_head(phrase: &mut PhraseElement, head: Element) {
    let from = head.features().clone();
    phrase.set_head(head);

    let features = &mut phrase.features;
    features.set_flag(Flag::Possessive, from.flag(Flag::Possessive));
    features.set_flag(Flag::Raised, false);
    features.set_flag(Flag::Acronym, false);
    features.number = Some(from.number.unwrap_or(NumberAgreement::Singular));
    features.person = Some(from.person.unwrap_or(Person::Third));
    features.gender = Some(from.gender.unwrap_or(Gender::Neuter));
    if let Some(expletive) = from.flag_value(Flag::ExpletiveSubject) {
        features.set_flag(Flag::ExpletiveSubject, expletive);
    }
}

fn set_pronoun_features(word: &mut WordElement, text: &str) {
    word.category = LexicalCategory::Pronoun;
    let features = &mut word.features;
    let second = SECOND_PERSON.contains(&text);

    if FIRST_PERSON.contains(&text) {
        features.set(Person::First);
    } else if second {
        features.set(Person::Second);
        features.set(match text {
            "yourself" => NumberAgreement::Singular,
            "yourselves" => NumberAgreement::Plural,
            _ => NumberAgreement::Both,
        });
    } else {
        features.set(Person::Third);
    }

    features.set_flag(Flag::Reflexive, REFLEXIVE.contains(&text));
    features.set(if MASCULINE.contains(&text) {
        Gender::Masculine
    } else if FEMININE.contains(&text) {
        Gender::Feminine
    } else {
        Gender::Neuter
    });
    features.set_flag(Flag::Possessive, POSSESSIVE.contains(&text));

    if PLURAL.contains(&text) {
        features.set(NumberAgreement::Plural);
    } else if !second && !EXPLETIVE.contains(&text) {
        features.set(NumberAgreement::Singular);
    }

    if EXPLETIVE.contains(&text) {
        features.set(Flag::NonMorph);
        features.set(Flag::ExpletiveSubject);
    }
}
