//! Structured analysis of a decoded sentence
//!
//! The decoder fills an [`Inspection`] while it translates: one
//! [`WordInspection`] per source word, de-duplicated grammar notes and one
//! morphology breakdown line per analyzed word. Notes come from
//! [`GRAMMAR_NOTE_RULES`], an ordered table of predicate/note pairs evaluated
//! against each finished word record.

use crate::features::FeatureValue;
use crate::lexicon::Morphemes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Analysis of one source word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInspection {
    /// The word as written (accented display form when known)
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub features: BTreeMap<String, FeatureValue>,
}

impl WordInspection {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: String::new(),
            pos: "unknown".to_string(),
            features: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<FeatureValue>) {
        self.features.insert(key.to_string(), value.into());
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureValue> {
        self.features.get(key)
    }

    /// Whether a boolean feature is set to `true`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.features.get(key), Some(FeatureValue::Flag(true)))
    }

    /// Text value of a feature
    pub fn text(&self, key: &str) -> Option<&str> {
        self.features.get(key).and_then(FeatureValue::as_text)
    }
}

/// Sentence-level analysis returned by `inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub input: String,
    pub translation: String,
    pub words: Vec<WordInspection>,
    /// Grammar explanations in first-occurrence order, without duplicates
    pub notes: Vec<String>,
    pub morphology: Vec<String>,
}

impl Inspection {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            translation: String::new(),
            words: Vec::new(),
            notes: vec!["Sentence structure: SVO".to_string()],
            morphology: Vec::new(),
        }
    }

    /// Add a note unless an identical one is already present
    pub fn add_note(&mut self, note: impl Into<String>) {
        let note = note.into();
        if !self.notes.contains(&note) {
            self.notes.push(note);
        }
    }

    /// Evaluate every grammar-note rule against `word`, then record it
    ///
    /// Notes that quote an affix take it from `morphemes`.
    pub fn push_word(&mut self, word: WordInspection, morphemes: &Morphemes) {
        for rule in GRAMMAR_NOTE_RULES {
            if (rule.applies)(&word) {
                let note = match &rule.note {
                    NoteText::Fixed(text) => text.to_string(),
                    NoteText::Generated(generate) => generate(&word, morphemes),
                };
                self.add_note(note);
            }
        }
        self.words.push(word);
    }
}

/// Note contributed by a matching rule
pub enum NoteText {
    Fixed(&'static str),
    Generated(fn(&WordInspection, &Morphemes) -> String),
}

/// A declarative grammar-note rule
pub struct GrammarNoteRule {
    pub name: &'static str,
    pub applies: fn(&WordInspection) -> bool,
    pub note: NoteText,
}

fn is_plural(word: &WordInspection) -> bool {
    word.text("number") == Some("plural")
}

fn plural_note(word: &WordInspection, morphemes: &Morphemes) -> String {
    format!(
        "\"{}\" is plural, marked by the prefix \"{}\"",
        word.word, morphemes.plural
    )
}

fn is_agentive(word: &WordInspection) -> bool {
    word.flag("agentive")
}

fn agentive_note(word: &WordInspection, morphemes: &Morphemes) -> String {
    format!(
        "\"{}\" is an agent noun: \"{}\" + \"{}\" names the one who does the action",
        word.word, word.lemma, morphemes.actor
    )
}

fn is_continuous(word: &WordInspection) -> bool {
    word.text("aspect") == Some("continuous")
}

fn continuous_note(_: &WordInspection, morphemes: &Morphemes) -> String {
    format!(
        "The suffix \"{}\" marks an ongoing action (continuous aspect)",
        morphemes.cont
    )
}

fn is_future(word: &WordInspection) -> bool {
    word.text("tense") == Some("futr")
}

fn is_comparative(word: &WordInspection) -> bool {
    word.flag("comparative")
}

fn has_person(word: &WordInspection) -> bool {
    word.pos == "pronoun"
        && matches!(word.feature("person"), Some(FeatureValue::Number(n)) if *n > 0)
}

fn person_note(word: &WordInspection, _: &Morphemes) -> String {
    let person = match word.feature("person") {
        Some(FeatureValue::Number(1)) => "first",
        Some(FeatureValue::Number(2)) => "second",
        _ => "third",
    };
    format!("\"{}\" is a {} person pronoun", word.word, person)
}

fn is_possessive(word: &WordInspection) -> bool {
    word.feature("possessive").is_some()
}

fn possessive_note(word: &WordInspection, _: &Morphemes) -> String {
    format!(
        "\"{}\" is a possessive determiner (\"{}\")",
        word.word,
        word.text("possessive").unwrap_or_default()
    )
}

fn is_informal(word: &WordInspection) -> bool {
    word.text("register") == Some("informal")
}

fn informal_note(word: &WordInspection, _: &Morphemes) -> String {
    format!("\"{}\" is informal or vulgar", word.word)
}

fn has_sense(word: &WordInspection) -> bool {
    word.feature("sense").is_some()
}

fn sense_note(word: &WordInspection, _: &Morphemes) -> String {
    format!(
        "\"{}\" carries a {} sense",
        word.word,
        word.text("sense").unwrap_or_default()
    )
}

fn is_article(word: &WordInspection) -> bool {
    word.text("role") == Some("IndefiniteArticle")
}

fn article_note(_: &WordInspection, morphemes: &Morphemes) -> String {
    format!(
        "\"{}\" is the indefinite article, resolved to \"a\" or \"an\"",
        morphemes.article
    )
}

/// Grammar-note rules, evaluated top to bottom for every word
pub const GRAMMAR_NOTE_RULES: &[GrammarNoteRule] = &[
    GrammarNoteRule {
        name: "plural",
        applies: is_plural,
        note: NoteText::Generated(plural_note),
    },
    GrammarNoteRule {
        name: "agentive",
        applies: is_agentive,
        note: NoteText::Generated(agentive_note),
    },
    GrammarNoteRule {
        name: "continuous",
        applies: is_continuous,
        note: NoteText::Generated(continuous_note),
    },
    GrammarNoteRule {
        name: "future",
        applies: is_future,
        note: NoteText::Fixed("Future tense is a suffix in Gorgus, English uses \"will\""),
    },
    GrammarNoteRule {
        name: "comparative",
        applies: is_comparative,
        note: NoteText::Fixed("Comparison is expressed with a diacritic instead of \"more\"/\"less\""),
    },
    GrammarNoteRule {
        name: "pronoun person",
        applies: has_person,
        note: NoteText::Generated(person_note),
    },
    GrammarNoteRule {
        name: "possessive",
        applies: is_possessive,
        note: NoteText::Generated(possessive_note),
    },
    GrammarNoteRule {
        name: "informal",
        applies: is_informal,
        note: NoteText::Generated(informal_note),
    },
    GrammarNoteRule {
        name: "sense",
        applies: has_sense,
        note: NoteText::Generated(sense_note),
    },
    GrammarNoteRule {
        name: "article",
        applies: is_article,
        note: NoteText::Generated(article_note),
    },
];

/// Person (1-3, or -1 for non-pronouns) and gender of an English pronoun
///
/// # Example
///
/// ```ignore
/// assert_eq!(analyze_pronoun("She"), (3, "feminine"));
/// assert_eq!(analyze_pronoun("we"), (1, "neutral"));
/// assert_eq!(analyze_pronoun("dog"), (-1, "neutral"));
/// ```
pub fn analyze_pronoun(pronoun: &str) -> (i64, &'static str) {
    let pronoun = pronoun.to_lowercase();
    let person = match pronoun.as_str() {
        "i" | "me" | "my" | "mine" | "myself" | "we" | "us" | "our" | "ours" => 1,
        "you" | "your" | "yours" | "yourself" => 2,
        "he" | "him" | "his" | "she" | "her" | "hers" | "it" | "its" | "they" | "them"
        | "their" | "theirs" => 3,
        _ => -1,
    };
    let gender = match pronoun.as_str() {
        "he" | "him" | "his" => "masculine",
        "she" | "her" | "hers" => "feminine",
        "it" | "its" => "neuter",
        _ => "neutral",
    };
    (person, gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn morphemes() -> Morphemes {
        Lexicon::builtin().unwrap().morphemes().clone()
    }

    fn plural_word() -> WordInspection {
        let mut word = WordInspection::new("ikfren");
        word.lemma = "fren".to_string();
        word.set("number", "plural");
        word
    }

    #[test]
    fn test_notes_are_deduplicated_in_order() {
        let mut inspection = Inspection::new("x");
        inspection.add_note("b");
        inspection.add_note("a");
        inspection.add_note("b");
        assert_eq!(inspection.notes, vec!["Sentence structure: SVO", "b", "a"]);
    }

    #[test]
    fn test_rules_fire_on_features() {
        let morphemes = morphemes();
        let mut inspection = Inspection::new("ikfren");
        inspection.push_word(plural_word(), &morphemes);
        inspection.push_word(plural_word(), &morphemes);

        assert_eq!(inspection.words.len(), 2);
        assert_eq!(inspection.notes.len(), 2);
        assert_eq!(
            inspection.notes[1],
            "\"ikfren\" is plural, marked by the prefix \"ik\""
        );
    }

    #[test]
    fn test_notes_quote_configured_morphemes() {
        let mut morphemes = morphemes();
        morphemes.plural = "zz".to_string();
        morphemes.cont = "ung".to_string();
        morphemes.article = "bo".to_string();

        let mut ongoing = WordInspection::new("eepung");
        ongoing.set("aspect", "continuous");
        let mut article = WordInspection::new("bo");
        article.set("role", "IndefiniteArticle");

        let mut inspection = Inspection::new("zzfren eepung bo");
        inspection.push_word(plural_word(), &morphemes);
        inspection.push_word(ongoing, &morphemes);
        inspection.push_word(article, &morphemes);

        assert_eq!(
            inspection.notes[1..],
            [
                "\"ikfren\" is plural, marked by the prefix \"zz\"",
                "The suffix \"ung\" marks an ongoing action (continuous aspect)",
                "\"bo\" is the indefinite article, resolved to \"a\" or \"an\"",
            ]
        );
    }

    #[test]
    fn test_agentive_note_quotes_actor_suffix() {
        let mut morphemes = morphemes();
        morphemes.actor = "-ix".to_string();
        let mut word = WordInspection::new("kooble-ix");
        word.lemma = "kooble".to_string();
        word.set("agentive", true);

        let mut inspection = Inspection::new("kooble-ix");
        inspection.push_word(word, &morphemes);
        assert_eq!(
            inspection.notes[1],
            "\"kooble-ix\" is an agent noun: \"kooble\" + \"-ix\" names the one who does the action"
        );
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = GRAMMAR_NOTE_RULES.iter().map(|rule| rule.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), GRAMMAR_NOTE_RULES.len());
    }

    #[test]
    fn test_analyze_pronoun() {
        assert_eq!(analyze_pronoun("She"), (3, "feminine"));
        assert_eq!(analyze_pronoun("you"), (2, "neutral"));
        assert_eq!(analyze_pronoun("its"), (3, "neuter"));
        assert_eq!(analyze_pronoun("dog"), (-1, "neutral"));
    }

    #[test]
    fn test_feature_values_serialize_untagged() {
        let mut word = WordInspection::new("nåck");
        word.set("person", 3i64);
        word.set("agentive", true);
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["features"]["person"], 3);
        assert_eq!(json["features"]["agentive"], true);
    }
}
