//! Property tests over the whole pipeline and its string rules

use phrasal_foundation::Element;
use phrasal_lexicon::Lexicon;
use phrasal_morphology::requires_an;
use phrasal_orthography::{remove_punct_space, terminate_sentence};
use phrasal_realiser::{PhraseFactory, Realiser};
use proptest::prelude::*;

const NOUNS: &[&str] = &["dog", "cat", "woman", "man", "boy"];
const VERBS: &[&str] = &["kiss", "chase", "kick", "like"];

// =============================================================================
// String Rules
// =============================================================================

proptest! {
    #[test]
    fn punctuation_cleanup_is_idempotent(text in "[a-z ,.]{0,40}") {
        let once = remove_punct_space(&text);
        prop_assert_eq!(remove_punct_space(&once), once);
    }

    #[test]
    fn termination_appends_one_mark(text in "[a-z ]*[a-z]", interrogative in any::<bool>()) {
        let terminated = terminate_sentence(&text, interrogative);
        let mark = if interrogative { '?' } else { '.' };
        prop_assert_eq!(terminated.clone(), format!("{text}{mark}"));
        prop_assert_eq!(terminate_sentence(&terminated, !interrogative), terminated);
    }

    #[test]
    fn vowel_initial_words_take_an(word in "[aeiu][a-z]{0,8}") {
        prop_assert!(requires_an(&word));
    }
}

// =============================================================================
// Realisation
// =============================================================================

proptest! {
    #[test]
    fn sentences_are_repeatable(
        subject in prop::sample::select(NOUNS),
        verb in prop::sample::select(VERBS),
        object in prop::sample::select(NOUNS),
    ) {
        let lexicon = Lexicon::english();
        let nlg = PhraseFactory::new(&lexicon);
        let realiser = Realiser::new(lexicon.clone());

        let clause: Element = nlg
            .clause(format!("the {subject}"), verb, format!("the {object}"))
            .into();
        let before = clause.clone();

        let first = realiser.realise_sentence(&clause);
        let second = realiser.realise_sentence(&clause);

        prop_assert_eq!(&clause, &before);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with("The "));
        prop_assert!(first.ends_with('.'));
        let expected_tail = format!("the {object}.");
        prop_assert!(first.ends_with(&expected_tail));
    }
}
