//! Inflection rules for nouns, verbs, adjectives and adverbs.
//!
//! Each rule takes a slot word whose lexicon word is already attached and
//! returns its text, tagged with the slot's discourse function. Listed forms
//! win; otherwise the word's inflectional class picks a regular builder.

use phrasal_foundation::{
    Element, Flag, Form, Inflection, InflectedWordElement, LexicalCategory, NumberAgreement,
    Person, StringElement, Tense,
};

// =============================================================================
// Category Rules
// =============================================================================

/// Pluralises and marks possession on a noun.
#[must_use]
pub fn noun(word: &InflectedWordElement) -> Element {
    let base = base_form(word);
    let mut realised = if word.features.is_plural() && !word.flag(Flag::Proper) {
        match word.inflection() {
            Inflection::Uncount | Inflection::Invariant => base.to_string(),
            inflection => match word.listed_form(|f| f.plural.as_ref()) {
                Some(plural) => plural.to_string(),
                None if inflection == Inflection::GrecoLatinRegular => greco_latin_plural(base),
                None => regular_plural(base),
            },
        }
    } else {
        base.to_string()
    };

    if word.flag(Flag::Possessive) {
        realised.push_str(if realised.ends_with('s') { "'" } else { "'s" });
    }
    text(word, realised)
}

/// Conjugates a verb for tense, form, person and number.
#[must_use]
pub fn verb(word: &InflectedWordElement) -> Element {
    let features = &word.features;
    let base = base_form(word);
    let tense = features.tense.unwrap_or(Tense::Present);
    let form = features.form;
    let double = word.inflection() == Inflection::RegularDouble;

    let realised = if word.flag(Flag::Negated) || form == Some(Form::BareInfinitive) {
        base.to_string()
    } else if form == Some(Form::PresentParticiple) {
        match word.listed_form(|f| f.present_participle.as_ref()) {
            Some(listed) => listed.to_string(),
            None if double => doubled(base, "ing"),
            None => regular_present_participle(base),
        }
    } else if form == Some(Form::PastParticiple) {
        match word.listed_form(|f| f.past_participle.as_ref()) {
            Some(listed) => listed.to_string(),
            None if base == "be" => "been".to_string(),
            None if double => doubled(base, "ed"),
            None => regular_past(base, features.number, features.person),
        }
    } else if tense == Tense::Past {
        // "be" agrees in the past, so its single listed form does not apply.
        let listed = (base != "be")
            .then(|| word.listed_form(|f| f.past.as_ref()))
            .flatten();
        match listed {
            Some(listed) => listed.to_string(),
            None if double => doubled(base, "ed"),
            None => regular_past(base, features.number, features.person),
        }
    } else if features.number.is_none_or(|n| n == NumberAgreement::Singular)
        && features.person.is_none_or(|p| p == Person::Third)
        && tense == Tense::Present
    {
        let listed = (base != "be")
            .then(|| word.listed_form(|f| f.present3s.as_ref()))
            .flatten();
        listed.map_or_else(|| regular_present3s(base), str::to_string)
    } else if base == "be" {
        let first_singular = features.person == Some(Person::First)
            && features.number.is_none_or(|n| n == NumberAgreement::Singular);
        let form = if first_singular { "am" } else { "are" };
        form.to_string()
    } else {
        base.to_string()
    };
    text(word, realised)
}

/// Forms the comparative or superlative of an adjective.
#[must_use]
pub fn adjective(word: &InflectedWordElement) -> Element {
    let double = word.inflection() == Inflection::RegularDouble;
    graded(word, double)
}

/// Forms the comparative or superlative of an adverb.
#[must_use]
pub fn adverb(word: &InflectedWordElement) -> Element {
    graded(word, false)
}

fn graded(word: &InflectedWordElement, double: bool) -> Element {
    let base = base_form(word);
    let realised = if word.flag(Flag::IsComparative) {
        match word.listed_form(|f| f.comparative.as_ref()) {
            Some(listed) => listed.to_string(),
            None if double => doubled(base, "er"),
            None => regular_comparative(base),
        }
    } else if word.flag(Flag::IsSuperlative) {
        match word.listed_form(|f| f.superlative.as_ref()) {
            Some(listed) => listed.to_string(),
            None if double => doubled(base, "est"),
            None => regular_superlative(base),
        }
    } else {
        base.to_string()
    };
    text(word, realised)
}

/// Text of an uninflected slot word.
#[must_use]
pub fn uninflected(word: &InflectedWordElement) -> Element {
    text(word, word.base_form.clone())
}

/// The form a slot word inflects from.
///
/// Verbs start from their lexicon word's spelling, so a slot filled with
/// "is" still conjugates as "be".
#[must_use]
pub fn base_form(word: &InflectedWordElement) -> &str {
    match (&word.base_word, word.category) {
        (Some(base_word), LexicalCategory::Verb) => base_word.default_spelling_variant(),
        _ => &word.base_form,
    }
}

fn text(word: &InflectedWordElement, realised: String) -> Element {
    let mut text = StringElement::new(realised);
    text.features.discourse_function = word.features.discourse_function;
    Element::Text(text)
}

// =============================================================================
// Regular Builders
// =============================================================================

/// True if the word ends in a consonant followed by "y" ("cry", not "play").
fn ends_with_consonant_y(base: &str) -> bool {
    let mut chars = base.chars().rev();
    chars.next() == Some('y')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() && !"aeiou".contains(c))
}

fn replace_final_y(base: &str, suffix: &str) -> String {
    format!("{}{suffix}", &base[..base.len() - 1])
}

fn ends_with_sibilant(base: &str) -> bool {
    base.ends_with(['s', 'z', 'x']) || base.ends_with("ch") || base.ends_with("sh")
}

/// "dog" → "dogs", "watch" → "watches", "cry" → "cries".
#[must_use]
pub fn regular_plural(base: &str) -> String {
    if ends_with_consonant_y(base) {
        replace_final_y(base, "ies")
    } else if ends_with_sibilant(base) {
        format!("{base}es")
    } else {
        format!("{base}s")
    }
}

/// Latin and Greek plurals: "cactus" → "cacti", "stimulus" → "stimuli".
#[must_use]
pub fn greco_latin_plural(base: &str) -> String {
    const ENDINGS: &[(&str, &str)] = &[
        ("us", "i"),
        ("ma", "mata"),
        ("a", "ae"),
        ("um", "a"),
        ("on", "a"),
        ("sis", "ses"),
        ("is", "ides"),
        ("men", "mina"),
        ("ex", "ices"),
        ("x", "ces"),
    ];
    ENDINGS
        .iter()
        .find(|(ending, _)| base.ends_with(ending))
        .map_or_else(
            || base.to_string(),
            |(ending, plural)| format!("{}{plural}", &base[..base.len() - ending.len()]),
        )
}

/// "walk" → "walks", "watch" → "watches", "be" → "is".
#[must_use]
pub fn regular_present3s(base: &str) -> String {
    if base == "be" {
        "is".to_string()
    } else if ends_with_sibilant(base) {
        format!("{base}es")
    } else if ends_with_consonant_y(base) {
        replace_final_y(base, "ies")
    } else {
        format!("{base}s")
    }
}

/// "walk" → "walked", "like" → "liked", "cry" → "cried".
///
/// "be" agrees: "were" for plurals and the second person, else "was".
#[must_use]
pub fn regular_past(base: &str, number: Option<NumberAgreement>, person: Option<Person>) -> String {
    if base == "be" {
        let were = number == Some(NumberAgreement::Plural) || person == Some(Person::Second);
        let form = if were { "were" } else { "was" };
        form.to_string()
    } else if base.ends_with('e') {
        format!("{base}d")
    } else if ends_with_consonant_y(base) {
        replace_final_y(base, "ied")
    } else {
        format!("{base}ed")
    }
}

/// "walk" → "walking", "like" → "liking", "lie" → "lying".
#[must_use]
pub fn regular_present_participle(base: &str) -> String {
    if base == "be" {
        return "being".to_string();
    }
    if let Some(stem) = base.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    let mut chars = base.chars().rev();
    if chars.next() == Some('e') && chars.next().is_some_and(|c| !"iyeo".contains(c)) {
        return format!("{}ing", &base[..base.len() - 1]);
    }
    format!("{base}ing")
}

/// "happy" → "happier", "fine" → "finer", "quick" → "quicker".
#[must_use]
pub fn regular_comparative(base: &str) -> String {
    if ends_with_consonant_y(base) {
        replace_final_y(base, "ier")
    } else if base.ends_with('e') {
        format!("{base}r")
    } else {
        format!("{base}er")
    }
}

/// "happy" → "happiest", "fine" → "finest", "quick" → "quickest".
#[must_use]
pub fn regular_superlative(base: &str) -> String {
    if ends_with_consonant_y(base) {
        replace_final_y(base, "iest")
    } else if base.ends_with('e') {
        format!("{base}st")
    } else {
        format!("{base}est")
    }
}

/// Doubles the final consonant before a suffix: "stop" → "stopped".
fn doubled(base: &str, suffix: &str) -> String {
    match base.chars().last() {
        Some(last) => format!("{base}{last}{suffix}"),
        None => suffix.to_string(),
    }
}
