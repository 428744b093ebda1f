//! Grammatical features shared by the lexicon, the morphology adapter and both
//! translation pipelines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verb tense as expressed by a Gorgus tense suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tense {
    /// Plain/present form, carries no suffix
    #[default]
    Norm,
    Past,
    /// Continuous aspect ("-ing" in English)
    Cont,
    /// Future ("will X" in English)
    Futr,
}

impl Tense {
    /// Name of the lexicon morpheme slot holding this tense's suffix
    pub fn slot(&self) -> Option<&'static str> {
        match self {
            Tense::Norm => None,
            Tense::Past => Some("<PAST_TENSE>"),
            Tense::Cont => Some("<CONT_TENSE>"),
            Tense::Futr => Some("<FUTR_TENSE>"),
        }
    }

    /// Short name used in inspection output
    pub fn name(&self) -> &'static str {
        match self {
            Tense::Norm => "norm",
            Tense::Past => "past",
            Tense::Cont => "cont",
            Tense::Futr => "futr",
        }
    }
}

/// Intensity carried by a diacritic morpheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Exaggerated,
    Gentle,
    More,
    Less,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Exaggerated,
        Intensity::Gentle,
        Intensity::More,
        Intensity::Less,
    ];

    /// Numeric code: `+1` exaggerated, `-1` gentle, `+2` more, `-2` less
    pub fn code(&self) -> i8 {
        match self {
            Intensity::Exaggerated => 1,
            Intensity::Gentle => -1,
            Intensity::More => 2,
            Intensity::Less => -2,
        }
    }

    pub fn slot(&self) -> &'static str {
        match self {
            Intensity::Exaggerated => "<EXAGGERATED_VERB>",
            Intensity::Gentle => "<GENTLE_VERB>",
            Intensity::More => "<MORE_VERB>",
            Intensity::Less => "<LESS_VERB>",
        }
    }

    /// Placeholder word the phrase dictionary substitutes for intensity idioms
    pub fn placeholder(&self) -> &'static str {
        match self {
            Intensity::Exaggerated => "EXAGGERATE",
            Intensity::Gentle => "GENTLE",
            Intensity::More => "MORE",
            Intensity::Less => "LESS",
        }
    }

    pub fn from_placeholder(word: &str) -> Option<Intensity> {
        Intensity::ALL
            .into_iter()
            .find(|intensity| intensity.placeholder() == word)
    }

    /// English adverb emitted in front of a decoded word
    pub fn adverb(&self) -> &'static str {
        match self {
            Intensity::Exaggerated => "really",
            Intensity::Gentle => "slightly",
            Intensity::More => "more",
            Intensity::Less => "less",
        }
    }

    /// English adverbs that are folded into a diacritic when encoding
    pub fn legacy_adverbs(&self) -> &'static [&'static str] {
        match self {
            Intensity::Exaggerated => &["really", "extremely", "very", "absolutely"],
            Intensity::Gentle => &["kinda", "slightly", "somewhat"],
            Intensity::More => &["more"],
            Intensity::Less => &["less"],
        }
    }

    /// Value of the `intensity` inspection feature
    pub fn feature_value(&self) -> &'static str {
        match self {
            Intensity::Exaggerated => "high",
            Intensity::Gentle => "low",
            Intensity::More => "more",
            Intensity::Less => "less",
        }
    }

    pub fn is_comparative(&self) -> bool {
        matches!(self, Intensity::More | Intensity::Less)
    }

    pub fn is_raising(&self) -> bool {
        matches!(self, Intensity::Exaggerated | Intensity::More)
    }

    /// Explanation used in the morphology breakdown
    pub fn description(&self) -> &'static str {
        match self {
            Intensity::Exaggerated => "diacritic for intensified form",
            Intensity::Gentle => "diacritic for reduced intensity form",
            Intensity::More => "diacritic for intensified comparative form",
            Intensity::Less => "diacritic for reduced intensity comparative form",
        }
    }
}

/// Value of an open-ended inspection feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Flag(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl FeatureValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Flag(flag) => write!(f, "{}", flag),
            FeatureValue::Number(number) => write!(f, "{}", number),
            FeatureValue::Text(text) => write!(f, "{}", text),
        }
    }
}
