//! String-level punctuation rules.

/// Removes space before commas, doubled commas and doubled spaces.
///
/// Rewrites repeat until nothing changes, so cleaning clean text is a no-op.
#[must_use]
pub fn remove_punct_space(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = current
            .replace(" ,", ",")
            .replace(",,", ",")
            .replace("  ", " ");
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Drops leading spaces and commas.
#[must_use]
pub fn strip_leading_commas(text: &str) -> &str {
    text.trim_start_matches([' ', ','])
}

/// Uppercases an initial ASCII lowercase letter.
#[must_use]
pub fn capitalise_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut capitalised = String::with_capacity(text.len());
            capitalised.push(first.to_ascii_uppercase());
            capitalised.push_str(chars.as_str());
            capitalised
        }
        _ => text.to_string(),
    }
}

/// Ends a sentence with "?" or ".", unless it already ends with either.
#[must_use]
pub fn terminate_sentence(text: &str, interrogative: bool) -> String {
    let trimmed = text.trim_end_matches(' ');
    if trimmed.ends_with(['.', '?']) {
        return trimmed.to_string();
    }
    let terminator = if interrogative { '?' } else { '.' };
    format!("{trimmed}{terminator}")
}
