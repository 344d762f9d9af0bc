//! Lexicon entries: a builder for single words and the line format the
//! built-in word list is written in.
//!
//! One word per line:
//!
//! ```text
//! # base     category  listed forms and features
//! give       verb      irreg past=gave past_participle=given
//! mouse      noun      plural=mice
//! Mary       noun      proper
//! fortunately adverb   sentence_modifier
//! ```
//!
//! `key=value` pairs name a listed form (`plural`, `past`, `past_participle`,
//! `present_participle`, `present3s`, `comparative`, `superlative`), the
//! word's `id`, its preferred `spelling`, an inflection code (`infl=regd`) or
//! any other feature. A bare word is an inflection code when it is one, and a
//! boolean feature set to true otherwise. `#` starts a comment.

use phrasal_foundation::{
    Error, ErrorContext, FeatureSet, Inflection, LexicalCategory, Result, WordElement, WordForms,
};

const STAGE: &str = "lexicon";

/// Builder for a lexicon word.
#[derive(Clone, Debug)]
pub struct WordEntry {
    base: String,
    category: LexicalCategory,
    id: Option<String>,
    spelling: Option<String>,
    forms: WordForms,
    inflection_codes: Vec<String>,
    features: Vec<(String, String)>,
}

impl WordEntry {
    /// Starts an entry for a base form and category.
    #[must_use]
    pub fn new(base: impl Into<String>, category: LexicalCategory) -> Self {
        Self {
            base: base.into(),
            category,
            id: None,
            spelling: None,
            forms: WordForms::default(),
            inflection_codes: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Sets the lexicon id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the preferred spelling.
    #[must_use]
    pub fn spelling(mut self, spelling: impl Into<String>) -> Self {
        self.spelling = Some(spelling.into());
        self
    }

    /// Lists the noun plural.
    #[must_use]
    pub fn plural(mut self, form: impl Into<String>) -> Self {
        self.forms.plural = Some(form.into());
        self
    }

    /// Lists the verb past tense.
    #[must_use]
    pub fn past(mut self, form: impl Into<String>) -> Self {
        self.forms.past = Some(form.into());
        self
    }

    /// Lists the verb past participle.
    #[must_use]
    pub fn past_participle(mut self, form: impl Into<String>) -> Self {
        self.forms.past_participle = Some(form.into());
        self
    }

    /// Lists the verb present participle.
    #[must_use]
    pub fn present_participle(mut self, form: impl Into<String>) -> Self {
        self.forms.present_participle = Some(form.into());
        self
    }

    /// Lists the third person singular present.
    #[must_use]
    pub fn present3s(mut self, form: impl Into<String>) -> Self {
        self.forms.present3s = Some(form.into());
        self
    }

    /// Lists the comparative.
    #[must_use]
    pub fn comparative(mut self, form: impl Into<String>) -> Self {
        self.forms.comparative = Some(form.into());
        self
    }

    /// Lists the superlative.
    #[must_use]
    pub fn superlative(mut self, form: impl Into<String>) -> Self {
        self.forms.superlative = Some(form.into());
        self
    }

    /// Adds an inflection code (`reg`, `irreg`, `regd`, ...).
    #[must_use]
    pub fn infl(mut self, code: impl Into<String>) -> Self {
        self.inflection_codes.push(code.into());
        self
    }

    /// Sets a feature by name.
    #[must_use]
    pub fn feature(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.features.push((name.into(), value.into()));
        self
    }

    /// Sets a boolean feature to true.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.feature(name, "true")
    }

    /// Builds the word.
    ///
    /// With no inflection codes the word is regular. The default inflection
    /// is regular when listed, else the first code given.
    ///
    /// # Errors
    ///
    /// Returns [`phrasal_foundation::ErrorKind::UnknownInflectionCode`] for a
    /// bad code and [`phrasal_foundation::ErrorKind::InvalidEnumValue`] for a
    /// feature value outside its vocabulary.
    pub fn build(self) -> Result<WordElement> {
        let context = || ErrorContext::new().with_stage(STAGE).with_element(self.base.clone());

        let mut inflections = Vec::with_capacity(self.inflection_codes.len().max(1));
        for code in &self.inflection_codes {
            let inflection = Inflection::from_code(code).map_err(|e| e.with_context(context()))?;
            if !inflections.contains(&inflection) {
                inflections.push(inflection);
            }
        }
        if inflections.is_empty() {
            inflections.push(Inflection::Regular);
        }
        let default_inflection = if inflections.contains(&Inflection::Regular) {
            Inflection::Regular
        } else {
            inflections[0]
        };

        let mut features = FeatureSet::new();
        for (name, value) in &self.features {
            features
                .set_named(name, value)
                .map_err(|e| e.with_context(context()))?;
        }

        Ok(WordElement {
            base_form: self.base,
            category: self.category,
            id: self.id,
            default_spelling: self.spelling,
            default_inflection: Some(default_inflection),
            inflections,
            forms: self.forms,
            features,
        })
    }
}

/// Parses one line of the word-list format.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Fails on an unknown category, a bad inflection code or a bad feature
/// value.
pub fn parse_line(line: &str) -> Result<Option<WordEntry>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut tokens = line.split_whitespace();
    let Some(base) = tokens.next() else {
        return Ok(None);
    };
    let category: LexicalCategory = tokens.next().unwrap_or_default().parse()?;

    let mut entry = WordEntry::new(base, category);
    for token in tokens {
        entry = match token.split_once('=') {
            Some((key, value)) => apply_pair(entry, key, value),
            None if Inflection::from_code(token).is_ok() => entry.infl(token),
            None => entry.flag(token),
        };
    }
    Ok(Some(entry))
}

fn apply_pair(entry: WordEntry, key: &str, value: &str) -> WordEntry {
    match key.to_ascii_lowercase().as_str() {
        "id" => entry.id(value),
        "spelling" => entry.spelling(value),
        "plural" => entry.plural(value),
        "past" => entry.past(value),
        "past_participle" => entry.past_participle(value),
        "present_participle" => entry.present_participle(value),
        "present3s" => entry.present3s(value),
        "comparative" => entry.comparative(value),
        "superlative" => entry.superlative(value),
        "infl" => entry.infl(value),
        _ => entry.feature(key, value),
    }
}

/// Parses a whole word list, one result per word line.
///
/// Errors carry the line number and base form.
pub fn parse_source(source: &str) -> impl Iterator<Item = Result<WordElement>> + '_ {
    source.lines().enumerate().filter_map(|(index, line)| {
        let number = index + 1;
        let base = line.split_whitespace().next().unwrap_or_default().to_string();
        let context = move |e: Error| {
            e.with_context(
                ErrorContext::new()
                    .with_stage(STAGE)
                    .with_element(format!("line {number}: {base}")),
            )
        };
        match parse_line(line) {
            Ok(None) => None,
            Ok(Some(entry)) => Some(entry.build().map_err(context)),
            Err(e) => Some(Err(context(e))),
        }
    })
}
