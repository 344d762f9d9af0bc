//! Typed feature storage carried by every element.
//!
//! Known features live in named optional fields; an unset field reads as
//! the feature's default at the point of use. Boolean features share a
//! small ordered map keyed by [`Flag`]. Anything else a caller attaches by
//! name is kept in a case-insensitive residual map.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::features::{
    ClauseStatus, DiscourseFunction, Flag, Form, Gender, InterrogativeType, NumberAgreement,
    Person, Tense,
};

/// A single feature assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Verb tense.
    Tense(Tense),
    /// Verb form.
    Form(Form),
    /// Grammatical number.
    Number(NumberAgreement),
    /// Grammatical person.
    Person(Person),
    /// Grammatical gender.
    Gender(Gender),
    /// Discourse function.
    DiscourseFunction(DiscourseFunction),
    /// Question kind.
    InterrogativeType(InterrogativeType),
    /// Matrix or subordinate clause.
    ClauseStatus(ClauseStatus),
    /// Modal verb ("can", "should").
    Modal(String),
    /// Verb particle ("up" in "pick up").
    Particle(String),
    /// Conjunction word of a coordination.
    Conjunction(String),
    /// Free-form conjunction type.
    ConjunctionType(String),
    /// Boolean feature.
    Flag(Flag, bool),
}

impl Feature {
    /// True for features a clause shares with its verb phrase.
    #[must_use]
    pub fn forwards_to_verb_phrase(&self) -> bool {
        match self {
            Self::Tense(_)
            | Self::Form(_)
            | Self::Number(_)
            | Self::Person(_)
            | Self::InterrogativeType(_)
            | Self::Modal(_)
            | Self::Particle(_) => true,
            Self::Flag(flag, _) => matches!(
                flag,
                Flag::Negated
                    | Flag::Passive
                    | Flag::Perfect
                    | Flag::Progressive
                    | Flag::RealiseAuxiliary
            ),
            _ => false,
        }
    }
}

impl From<Tense> for Feature {
    fn from(value: Tense) -> Self {
        Self::Tense(value)
    }
}

impl From<Form> for Feature {
    fn from(value: Form) -> Self {
        Self::Form(value)
    }
}

impl From<NumberAgreement> for Feature {
    fn from(value: NumberAgreement) -> Self {
        Self::Number(value)
    }
}

impl From<Person> for Feature {
    fn from(value: Person) -> Self {
        Self::Person(value)
    }
}

impl From<Gender> for Feature {
    fn from(value: Gender) -> Self {
        Self::Gender(value)
    }
}

impl From<DiscourseFunction> for Feature {
    fn from(value: DiscourseFunction) -> Self {
        Self::DiscourseFunction(value)
    }
}

impl From<InterrogativeType> for Feature {
    fn from(value: InterrogativeType) -> Self {
        Self::InterrogativeType(value)
    }
}

impl From<ClauseStatus> for Feature {
    fn from(value: ClauseStatus) -> Self {
        Self::ClauseStatus(value)
    }
}

/// A bare flag means "set to true".
impl From<Flag> for Feature {
    fn from(flag: Flag) -> Self {
        Self::Flag(flag, true)
    }
}

/// Features attached to an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet {
    /// Verb tense (default PRESENT).
    pub tense: Option<Tense>,
    /// Verb form (default NORMAL).
    pub form: Option<Form>,
    /// Number (default SINGULAR).
    pub number: Option<NumberAgreement>,
    /// Person (default THIRD).
    pub person: Option<Person>,
    /// Gender (default NEUTER).
    pub gender: Option<Gender>,
    /// Discourse function.
    pub discourse_function: Option<DiscourseFunction>,
    /// Question kind.
    pub interrogative_type: Option<InterrogativeType>,
    /// Clause status.
    pub clause_status: Option<ClauseStatus>,
    /// Modal verb.
    pub modal: Option<String>,
    /// Verb particle.
    pub particle: Option<String>,
    /// Conjunction of a coordination.
    pub conjunction: Option<String>,
    /// Conjunction type.
    pub conjunction_type: Option<String>,
    flags: BTreeMap<Flag, bool>,
    extras: BTreeMap<String, String>,
}

impl FeatureSet {
    /// Creates an empty feature set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FeatureSet::set`].
    #[must_use]
    pub fn with(mut self, feature: impl Into<Feature>) -> Self {
        self.set(feature);
        self
    }

    /// Applies a feature assignment.
    pub fn set(&mut self, feature: impl Into<Feature>) {
        match feature.into() {
            Feature::Tense(v) => self.tense = Some(v),
            Feature::Form(v) => self.form = Some(v),
            Feature::Number(v) => self.number = Some(v),
            Feature::Person(v) => self.person = Some(v),
            Feature::Gender(v) => self.gender = Some(v),
            Feature::DiscourseFunction(v) => self.discourse_function = Some(v),
            Feature::InterrogativeType(v) => self.interrogative_type = Some(v),
            Feature::ClauseStatus(v) => self.clause_status = Some(v),
            Feature::Modal(v) => self.modal = Some(v),
            Feature::Particle(v) => self.particle = Some(v),
            Feature::Conjunction(v) => self.conjunction = Some(v),
            Feature::ConjunctionType(v) => self.conjunction_type = Some(v),
            Feature::Flag(flag, v) => {
                self.flags.insert(flag, v);
            }
        }
    }

    /// Reads a flag; unset flags are `false`.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    /// Reads a flag without applying the default.
    #[must_use]
    pub fn flag_value(&self, flag: Flag) -> Option<bool> {
        self.flags.get(&flag).copied()
    }

    /// True if the flag has been set, to either value.
    #[must_use]
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains_key(&flag)
    }

    /// Sets a flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.flags.insert(flag, value);
    }

    /// Sets or clears a flag, mirroring another element's possibly unset value.
    pub fn set_flag_value(&mut self, flag: Flag, value: Option<bool>) {
        match value {
            Some(v) => {
                self.flags.insert(flag, v);
            }
            None => {
                self.flags.remove(&flag);
            }
        }
    }

    /// Removes a flag.
    pub fn clear_flag(&mut self, flag: Flag) {
        self.flags.remove(&flag);
    }

    /// True if the number is PLURAL.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.number == Some(NumberAgreement::Plural)
    }

    /// Reads a residual feature.
    #[must_use]
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extras.get(&normalize(name)).map(String::as_str)
    }

    /// Sets a feature from loosely typed input.
    ///
    /// Names and enumerated values are case-insensitive. Boolean features
    /// accept `true`/`false`. Names outside the known vocabulary are kept in
    /// the residual map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::InvalidEnumValue`] when a known feature
    /// receives a value outside its vocabulary.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<()> {
        let key = normalize(name);
        let feature = match key.as_str() {
            "TENSE" => Feature::Tense(value.parse()?),
            "FORM" => Feature::Form(value.parse()?),
            "NUMBER" => Feature::Number(value.parse()?),
            "PERSON" => Feature::Person(value.parse()?),
            "GENDER" => Feature::Gender(value.parse()?),
            "DISCOURSE_FUNCTION" => Feature::DiscourseFunction(value.parse()?),
            "INTERROGATIVE_TYPE" => Feature::InterrogativeType(value.parse()?),
            "CLAUSE_STATUS" => Feature::ClauseStatus(value.parse()?),
            "MODAL" => Feature::Modal(value.to_string()),
            "PARTICLE" => Feature::Particle(value.to_string()),
            "CONJUNCTION" => Feature::Conjunction(value.to_string()),
            "CONJUNCTION_TYPE" => Feature::ConjunctionType(value.to_string()),
            _ => match key.parse::<Flag>() {
                Ok(flag) => Feature::Flag(flag, parse_bool(&key, value)?),
                Err(_) => {
                    self.extras.insert(key, value.to_string());
                    return Ok(());
                }
            },
        };
        self.set(feature);
        Ok(())
    }

    /// Reads a feature by name, rendered as text.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<String> {
        let key = normalize(name);
        match key.as_str() {
            "TENSE" => self.tense.map(|v| v.to_string()),
            "FORM" => self.form.map(|v| v.to_string()),
            "NUMBER" => self.number.map(|v| v.to_string()),
            "PERSON" => self.person.map(|v| v.to_string()),
            "GENDER" => self.gender.map(|v| v.to_string()),
            "DISCOURSE_FUNCTION" => self.discourse_function.map(|v| v.to_string()),
            "INTERROGATIVE_TYPE" => self.interrogative_type.map(|v| v.to_string()),
            "CLAUSE_STATUS" => self.clause_status.map(|v| v.to_string()),
            "MODAL" => self.modal.clone(),
            "PARTICLE" => self.particle.clone(),
            "CONJUNCTION" => self.conjunction.clone(),
            "CONJUNCTION_TYPE" => self.conjunction_type.clone(),
            _ => match key.parse::<Flag>() {
                Ok(flag) => self.flag_value(flag).map(|v| v.to_string()),
                Err(_) => self.extras.get(&key).cloned(),
            },
        }
    }

    /// True if nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

fn parse_bool(feature: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_enum_value(feature, value)),
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                parts.push(format!("{name}={value}"));
            }
        };
        push("TENSE", self.tense.map(|v| v.to_string()));
        push("FORM", self.form.map(|v| v.to_string()));
        push("NUMBER", self.number.map(|v| v.to_string()));
        push("PERSON", self.person.map(|v| v.to_string()));
        push("GENDER", self.gender.map(|v| v.to_string()));
        push("DISCOURSE_FUNCTION", self.discourse_function.map(|v| v.to_string()));
        push("INTERROGATIVE_TYPE", self.interrogative_type.map(|v| v.to_string()));
        push("CLAUSE_STATUS", self.clause_status.map(|v| v.to_string()));
        push("MODAL", self.modal.clone());
        push("PARTICLE", self.particle.clone());
        push("CONJUNCTION", self.conjunction.clone());
        push("CONJUNCTION_TYPE", self.conjunction_type.clone());
        for (flag, value) in &self.flags {
            parts.push(format!("{flag}={value}"));
        }
        for (name, value) in &self.extras {
            parts.push(format!("{name}={value}"));
        }
        write!(f, "{}", parts.join(" "))
    }
}
