//! End-to-end realisation of documents, sections, paragraphs and lists

use phrasal_foundation::Element;
use phrasal_lexicon::Lexicon;
use phrasal_realiser::{PhraseFactory, Realiser};

fn realised(realiser: &Realiser, element: impl Into<Element>) -> String {
    realiser
        .realise(&element.into())
        .realisation()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Paragraphs and Sections
// =============================================================================

#[test]
fn paragraph_of_clauses() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let paragraph = nlg.paragraph([
        nlg.clause("the dog", "bark", ()).into(),
        nlg.clause("the cat", "sleep", ()).into(),
    ]);
    assert_eq!(
        realised(&realiser, paragraph),
        "The dog barks. The cat sleeps.\n\n"
    );
}

#[test]
fn titled_document_with_sections() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let mut dogs = nlg.section(Some("Dogs"));
    dogs.add_component(nlg.paragraph([nlg.clause("the dog", "bark", ()).into()]));
    let mut cats = nlg.section(Some("Cats"));
    cats.add_component(nlg.paragraph([nlg.clause("the cat", "sleep", ()).into()]));

    let mut document = nlg.document(Some("Pets"));
    document.add_component(dogs);
    document.add_component(cats);

    assert_eq!(
        realised(&realiser, document),
        "Pets\n\nDogs\nThe dog barks.\n\nCats\nThe cat sleeps.\n\n"
    );
}

#[test]
fn questions_in_a_paragraph() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let question = nlg
        .clause("the dog", "bark", ())
        .with(phrasal_foundation::InterrogativeType::YesNo);
    let paragraph = nlg.paragraph([question.into(), nlg.clause("the cat", "sleep", ()).into()]);
    assert_eq!(
        realised(&realiser, paragraph),
        "Does the dog bark? The cat sleeps.\n\n"
    );
}

#[test]
fn canned_text_sentences() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let paragraph = nlg.paragraph([Element::text("hello world"), Element::text("goodbye.")]);
    assert_eq!(realised(&realiser, paragraph), "Hello world. Goodbye.\n\n");
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn bulleted_list() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let list = nlg.list([Element::text("apples"), Element::text("pears")]);
    assert_eq!(realised(&realiser, list), " * apples\n * pears\n");
}

#[test]
fn enumerated_list() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let list = nlg.enumerated_list([Element::text("apples"), Element::text("pears")]);
    assert_eq!(realised(&realiser, list), "1 - apples\n2 - pears\n");
}

#[test]
fn list_items_hold_clauses() {
    let lexicon = Lexicon::english();
    let nlg = PhraseFactory::new(&lexicon);
    let realiser = Realiser::new(lexicon.clone());

    let list = nlg.list([nlg.clause("the dog", "bark", ()).into()]);
    assert_eq!(realised(&realiser, list), " * the dog barks\n");
}
