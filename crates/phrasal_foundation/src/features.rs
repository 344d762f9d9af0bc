//! The closed grammatical feature vocabulary.
//!
//! Every enumerated feature value has a canonical upper-case name
//! (`PAST`, `WHO_OBJECT`, ...) used for display and for parsing loosely
//! typed input. Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $feature:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical upper-case name.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::invalid_enum_value($feature, s))
            }
        }
    };
}

vocabulary! {
    /// Verb tense.
    Tense as "TENSE" {
        /// Past tense.
        Past => "PAST",
        /// Present tense (the default).
        Present => "PRESENT",
        /// Future tense, realised with "will".
        Future => "FUTURE",
    }
}

vocabulary! {
    /// Verb form.
    Form as "FORM" {
        /// Finite verb (the default).
        Normal => "NORMAL",
        /// Infinitive without "to".
        BareInfinitive => "BARE_INFINITIVE",
        /// Infinitive with "to".
        Infinitive => "INFINITIVE",
        /// -ing form used as a noun.
        Gerund => "GERUND",
        /// Command form.
        Imperative => "IMPERATIVE",
        /// -ing participle.
        PresentParticiple => "PRESENT_PARTICIPLE",
        /// -ed/-en participle.
        PastParticiple => "PAST_PARTICIPLE",
    }
}

vocabulary! {
    /// Grammatical number.
    NumberAgreement as "NUMBER" {
        /// Singular (the default).
        Singular => "SINGULAR",
        /// Plural.
        Plural => "PLURAL",
        /// Either number ("you").
        Both => "BOTH",
    }
}

vocabulary! {
    /// Grammatical person.
    Person as "PERSON" {
        /// First person.
        First => "FIRST",
        /// Second person.
        Second => "SECOND",
        /// Third person (the default).
        Third => "THIRD",
    }
}

vocabulary! {
    /// Grammatical gender.
    Gender as "GENDER" {
        /// Masculine.
        Masculine => "MASCULINE",
        /// Feminine.
        Feminine => "FEMININE",
        /// Neuter (the default).
        Neuter => "NEUTER",
    }
}

vocabulary! {
    /// Whether a clause stands alone or is embedded.
    ClauseStatus as "CLAUSE_STATUS" {
        /// Main clause.
        Matrix => "MATRIX",
        /// Embedded clause, introduced by a complementiser.
        Subordinate => "SUBORDINATE",
    }
}

vocabulary! {
    /// Role a realised constituent plays in its parent.
    DiscourseFunction as "DISCOURSE_FUNCTION" {
        /// Clause subject.
        Subject => "SUBJECT",
        /// Direct object.
        Object => "OBJECT",
        /// Indirect object.
        IndirectObject => "INDIRECT_OBJECT",
        /// Determiner or possessor.
        Specifier => "SPECIFIER",
        /// Modifier before the head.
        PreModifier => "PRE_MODIFIER",
        /// Modifier after the head.
        PostModifier => "POST_MODIFIER",
        /// Complement of the head.
        Complement => "COMPLEMENT",
        /// The verb group of a clause.
        VerbPhrase => "VERB_PHRASE",
        /// Cue phrase ("however").
        CuePhrase => "CUE_PHRASE",
        /// Modifier fronted before the subject.
        FrontModifier => "FRONT_MODIFIER",
        /// Auxiliary verb.
        Auxiliary => "AUXILIARY",
        /// Coordinating conjunction.
        Conjunction => "CONJUNCTION",
        /// Phrase head.
        Head => "HEAD",
    }
}

vocabulary! {
    /// The kind of question a clause asks.
    InterrogativeType as "INTERROGATIVE_TYPE" {
        /// Yes/no question.
        YesNo => "YES_NO",
        /// Question about the subject: "who kissed Mary".
        WhoSubject => "WHO_SUBJECT",
        /// Question about the subject: "what fell".
        WhatSubject => "WHAT_SUBJECT",
        /// Question about the object: "who did Mary kiss".
        WhoObject => "WHO_OBJECT",
        /// Question about the object: "what did Mary eat".
        WhatObject => "WHAT_OBJECT",
        /// Question about the indirect object: "who did Mary give it to".
        WhoIndirectObject => "WHO_INDIRECT_OBJECT",
        /// Manner question.
        How => "HOW",
        /// Predicate question: "how are you".
        HowPredicate => "HOW_PREDICATE",
        /// Quantity question.
        HowMany => "HOW_MANY",
        /// Reason question.
        Why => "WHY",
        /// Place question.
        Where => "WHERE",
    }
}

impl InterrogativeType {
    /// The question word that opens the clause.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::How | Self::HowPredicate => "how",
            Self::WhatObject | Self::WhatSubject => "what",
            Self::Where => "where",
            Self::WhoIndirectObject | Self::WhoObject | Self::WhoSubject => "who",
            Self::Why => "why",
            Self::HowMany => "how many",
            Self::YesNo => "yes/no",
        }
    }

    /// True for questions whose answer is the direct object.
    #[must_use]
    pub fn is_object(self) -> bool {
        matches!(self, Self::WhoObject | Self::WhatObject)
    }

    /// True for questions whose answer is the indirect object.
    #[must_use]
    pub fn is_indirect_object(self) -> bool {
        self == Self::WhoIndirectObject
    }

    /// True for questions whose answer is the subject.
    #[must_use]
    pub fn is_subject(self) -> bool {
        matches!(self, Self::WhoSubject | Self::WhatSubject)
    }
}

vocabulary! {
    /// Inflectional class of a lexicon word.
    Inflection as "DEFAULT_INFL" {
        /// Regular suffix rules.
        Regular => "REGULAR",
        /// Irregular, forms listed in the lexicon.
        Irregular => "IRREGULAR",
        /// Regular with a doubled final consonant ("stop" → "stopped").
        RegularDouble => "REGULAR_DOUBLE",
        /// Greco-Latin plurals ("cactus" → "cacti").
        GrecoLatinRegular => "GRECO_LATIN_REGULAR",
        /// Uncountable noun, never pluralised.
        Uncount => "UNCOUNT",
        /// Invariant form.
        Invariant => "INVARIANT",
    }
}

impl Inflection {
    /// Parses a lexicon inflection code (`reg`, `irreg`, `regd`, `glreg`,
    /// `uncount`, `noncount`, `groupuncount`, `inv`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::UnknownInflectionCode`] for anything else.
    pub fn from_code(code: &str) -> crate::Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "reg" => Ok(Self::Regular),
            "irreg" => Ok(Self::Irregular),
            "regd" => Ok(Self::RegularDouble),
            "glreg" => Ok(Self::GrecoLatinRegular),
            "uncount" | "noncount" | "groupuncount" => Ok(Self::Uncount),
            "inv" => Ok(Self::Invariant),
            _ => Err(Error::unknown_inflection_code(code)),
        }
    }
}

vocabulary! {
    /// Boolean features. An absent flag reads as `false`, except where the
    /// reader documents another default.
    Flag as "FLAG" {
        /// Passive voice.
        Passive => "PASSIVE",
        /// Perfect aspect.
        Perfect => "PERFECT",
        /// Progressive aspect.
        Progressive => "PROGRESSIVE",
        /// Negated.
        Negated => "NEGATED",
        /// Possessive.
        Possessive => "POSSESSIVE",
        /// Not realised at all.
        Elided => "ELIDED",
        /// Realised as a pronoun.
        Pronominal => "PRONOMINAL",
        /// Appositive modifier, set off by commas.
        Appositive => "APPOSITIVE",
        /// Reflexive pronoun.
        Reflexive => "REFLEXIVE",
        /// Expletive subject ("there").
        ExpletiveSubject => "EXPLETIVE_SUBJECT",
        /// Proper noun.
        Proper => "PROPER",
        /// Acronym.
        Acronym => "ACRONYM",
        /// Skip morphology and emit the base form.
        NonMorph => "NON_MORPH",
        /// Specifier raised out of a coordinate.
        Raised => "RAISED",
        /// Modal already realised elsewhere.
        IgnoreModal => "IGNORE_MODAL",
        /// Realise auxiliaries of the verb group (default true).
        RealiseAuxiliary => "REALISE_AUXILIARY",
        /// Share the auxiliaries of coordinated verb phrases.
        AggregateAuxiliary => "AGGREGATE_AUXILIARY",
        /// Raise a shared specifier out of coordinates.
        RaiseSpecifier => "RAISE_SPECIFIER",
        /// Suppress the complementiser of a subordinate clause.
        SuppressedComplementiser => "SUPPRESSED_COMPLEMENTISER",
        /// Keep gerund subjects non-possessive.
        SuppressGenitiveInGerund => "SUPPRESS_GENITIVE_IN_GERUND",
        /// Comparative adjective or adverb.
        IsComparative => "IS_COMPARATIVE",
        /// Superlative adjective or adverb.
        IsSuperlative => "IS_SUPERLATIVE",
        /// Adverb that modifies a whole sentence ("fortunately").
        SentenceModifier => "SENTENCE_MODIFIER",
        /// Realised output of a question.
        Interrogative => "INTERROGATIVE",
    }
}
