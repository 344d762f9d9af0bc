//! Integration tests for the element tree

use phrasal_foundation::pretty::print_tree;
use phrasal_foundation::{
    ClauseStatus, CoordinatedPhraseElement, DiscourseFunction, DocumentCategory, DocumentElement,
    Element, Flag, LexicalCategory, PhraseCategory, PhraseElement, WordElement,
};

fn noun(base: &str) -> Element {
    Element::Word(WordElement::new(base, LexicalCategory::Noun))
}

// =============================================================================
// Phrases
// =============================================================================

#[test]
fn new_phrases_are_not_elided() {
    let phrase = PhraseElement::new(PhraseCategory::NounPhrase);
    assert_eq!(phrase.features.flag_value(Flag::Elided), Some(false));
}

#[test]
fn complements_default_to_objects() {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.add_complement(noun("ball"));
    assert_eq!(vp.complements_with(DiscourseFunction::Object).count(), 1);
}

#[test]
fn clause_complements_become_subordinate() {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.add_complement(PhraseElement::new(PhraseCategory::Clause));
    assert_eq!(
        vp.complements[0].features().clause_status,
        Some(ClauseStatus::Subordinate)
    );
}

#[test]
fn set_complement_replaces_same_function() {
    let mut vp = PhraseElement::new(PhraseCategory::VerbPhrase);
    vp.set_complement(noun("ball").with(DiscourseFunction::Object));
    vp.set_complement(noun("bat").with(DiscourseFunction::Object));
    vp.add_complement(noun("Mary").with(DiscourseFunction::IndirectObject));
    assert_eq!(vp.complements.len(), 2);
    assert_eq!(
        vp.complements_with(DiscourseFunction::Object).next().and_then(Element::base_form),
        Some("bat")
    );
}

// =============================================================================
// Coordination
// =============================================================================

#[test]
fn coordination_plurality_follows_conjunction() {
    let mut coordinated = CoordinatedPhraseElement::of([noun("dog"), noun("cat")]);
    assert!(coordinated.check_if_plural());
    coordinated.set_conjunction("or");
    assert!(!coordinated.check_if_plural());
}

#[test]
fn later_clauses_lose_their_complementiser() {
    let coordinated = CoordinatedPhraseElement::of([
        PhraseElement::new(PhraseCategory::Clause).into(),
        PhraseElement::new(PhraseCategory::Clause).into(),
    ]);
    assert!(!coordinated.coordinates[0].flag(Flag::SuppressedComplementiser));
    assert!(coordinated.coordinates[1].flag(Flag::SuppressedComplementiser));
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn phrases_are_promoted_into_sentences() {
    let mut paragraph = DocumentElement::new(DocumentCategory::Paragraph, None);
    paragraph.add_component(PhraseElement::new(PhraseCategory::Clause));
    assert_eq!(
        paragraph.components[0].document_category(),
        Some(DocumentCategory::Sentence)
    );
}

#[test]
fn sentences_are_promoted_into_paragraphs() {
    let mut section = DocumentElement::new(DocumentCategory::Section, Some("One".to_string()));
    section.add_component(DocumentElement::new(DocumentCategory::Sentence, None));
    assert_eq!(
        section.components[0].document_category(),
        Some(DocumentCategory::Paragraph)
    );
}

#[test]
fn sub_part_rules() {
    use DocumentCategory::{Document, ListItem, Paragraph, Section, Sentence};
    assert!(Document.has_sub_part(Some(Section)));
    assert!(!Document.has_sub_part(Some(ListItem)));
    assert!(Paragraph.has_sub_part(Some(Sentence)));
    assert!(Sentence.has_sub_part(None));
    assert!(!Paragraph.has_sub_part(None));
}

// =============================================================================
// Pretty Printing
// =============================================================================

#[test]
fn tree_printer_outlines_children() {
    let mut np = PhraseElement::new(PhraseCategory::NounPhrase);
    np.set_head(noun("dog"));
    let tree = print_tree(&np.into());
    let lines: Vec<&str> = tree.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Phrase: category=NOUN_PHRASE"));
    assert_eq!(lines[1], " \\-Word: base=dog, category=NOUN");
}
