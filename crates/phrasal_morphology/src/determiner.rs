//! Indefinite article agreement.
//!
//! "a" becomes "an" before a vowel sound and "some" before a plural. The
//! vowel-sound test is a spelling heuristic with a few numeric special
//! cases ("an 11,000 change", "an 8", but "a 180,000 change").

use phrasal_foundation::{Element, StringElement};

/// Words and numbers that start with a vowel letter but not a vowel sound.
const AN_EXCEPTIONS: &[&str] = &["one", "180", "110"];

/// True if `word` should follow "an" rather than "a".
#[must_use]
pub fn requires_an(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    let starts_with_vowel = lower.starts_with(['a', 'e', 'i', 'o', 'u']);
    if starts_with_vowel && !AN_EXCEPTIONS.iter().any(|ex| lower.starts_with(ex)) {
        return true;
    }

    let Some(prefix) = numeric_prefix(&lower) else {
        return false;
    };
    if !(prefix.starts_with('8') || prefix.starts_with("11") || prefix.starts_with("18")) {
        return false;
    }
    // Too long to parse means far beyond any of the special cases below.
    prefix.parse::<u64>().is_ok_and(number_requires_an)
}

/// The leading digits of `word`, skipping thousands separators.
fn numeric_prefix(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next().filter(char::is_ascii_digit)?;

    let mut digits = String::from(first);
    for c in chars {
        match c {
            '0'..='9' => digits.push(c),
            ',' => {}
            _ => break,
        }
    }
    Some(digits)
}

/// Eight, eleven, eighteen and the eighties; larger numbers are read in
/// thousands.
fn number_requires_an(number: u64) -> bool {
    match number {
        8 | 11 | 18 | 80..=89 => true,
        n if n > 1000 => number_requires_an(round_thousands(n)),
        _ => false,
    }
}

fn round_thousands(n: u64) -> u64 {
    n / 1000 + u64::from(n % 1000 >= 500)
}

/// Fixes a realised determiner against the text that follows it.
///
/// Only the indefinite article changes: "some" when the determiner is
/// plural, "an" when [`requires_an`] says so.
pub fn agree(determiner: &mut Element, following: &str) {
    let Element::Text(text) = determiner else {
        return;
    };
    if text.text != "a" {
        return;
    }
    if text.features.is_plural() {
        "some".clone_into(&mut text.text);
    } else if requires_an(following) {
        "an".clone_into(&mut text.text);
    }
}

/// Rewrites a trailing " a" in canned text to " an" when `next` needs it.
///
/// Used when canned text such as "I saw a" is followed by a noun.
#[must_use]
pub fn ends_with_indefinite_article(text: &str, next: &str) -> String {
    let has_article = text == "a" || text.ends_with(" a");
    if has_article && requires_an(next) {
        format!("{text}n")
    } else {
        text.to_string()
    }
}

pub(crate) fn fix_canned_article(previous: &mut StringElement, next: &str) {
    previous.text = ends_with_indefinite_article(&previous.text, next);
}
