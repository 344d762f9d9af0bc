//! Personal pronoun inflection.
//!
//! A pronoun slot is re-inflected from its features, so "me" placed in a
//! subject slot becomes "I" and "he" marked possessive becomes "his".

use phrasal_foundation::{
    DiscourseFunction, Element, Flag, Gender, InflectedWordElement, Person, StringElement,
};

/// Personal pronouns by number, position and person/gender.
///
/// Positions: subject, object, reflexive, possessive, possessive determiner.
/// Person/gender columns: first, second, third masculine, third feminine,
/// third neuter.
pub const PERSONAL_PRONOUNS: [[[&str; 5]; 5]; 2] = [
    [
        ["I", "you", "he", "she", "it"],
        ["me", "you", "him", "her", "it"],
        ["myself", "yourself", "himself", "herself", "itself"],
        ["mine", "yours", "his", "hers", "its"],
        ["my", "your", "his", "her", "its"],
    ],
    [
        ["we", "you", "they", "they", "they"],
        ["us", "you", "them", "them", "them"],
        ["ourselves", "yourselves", "themselves", "themselves", "themselves"],
        ["ours", "yours", "theirs", "theirs", "theirs"],
        ["our", "your", "their", "their", "their"],
    ],
];

const WH_PRONOUNS: &[&str] = &["who", "what", "which", "where", "why", "how", "how many"];

/// True for question words, which never inflect.
#[must_use]
pub fn is_wh_pronoun(base: &str) -> bool {
    WH_PRONOUNS.contains(&base)
}

/// True if `word` appears anywhere in [`PERSONAL_PRONOUNS`].
#[must_use]
pub fn is_personal_pronoun(word: &str) -> bool {
    PERSONAL_PRONOUNS
        .iter()
        .flatten()
        .flatten()
        .any(|pronoun| *pronoun == word)
}

/// Inflects a pronoun slot.
#[must_use]
pub fn inflect(word: &InflectedWordElement) -> Element {
    let features = &word.features;
    let realised = if word.flag(Flag::NonMorph) || is_wh_pronoun(&word.base_form) {
        word.base_form.as_str()
    } else {
        let number = usize::from(features.is_plural());
        PERSONAL_PRONOUNS[number][position(word)][column(features.person, features.gender)]
    };

    let mut text = StringElement::new(realised);
    text.features.discourse_function = features.discourse_function;
    Element::Text(text)
}

fn column(person: Option<Person>, gender: Option<Gender>) -> usize {
    match person {
        Some(Person::First) => 0,
        Some(Person::Second) => 1,
        Some(Person::Third) | None => match gender {
            Some(Gender::Masculine) => 2,
            Some(Gender::Feminine) => 3,
            Some(Gender::Neuter) | None => 4,
        },
    }
}

fn position(word: &InflectedWordElement) -> usize {
    let function = word.features.discourse_function;
    if word.flag(Flag::Reflexive) {
        return 2;
    }
    if word.flag(Flag::Possessive) {
        return if function == Some(DiscourseFunction::Specifier) { 4 } else { 3 };
    }

    let passive = word.flag(Flag::Passive);
    let nominative = match function {
        Some(DiscourseFunction::Subject) => !passive,
        Some(DiscourseFunction::Object | DiscourseFunction::Complement) => passive,
        Some(DiscourseFunction::Specifier) => true,
        _ => false,
    };
    usize::from(!nominative)
}
