//! Morphology services adapter
//!
//! The translation pipelines never inspect English grammar directly. They ask
//! a [`Morphology`] backend for part-of-speech tags, tenses, lemmas, plurals and
//! agent-noun derivations. Any backend can be plugged in without touching the
//! pipeline logic: the default [`RuleMorphology`] uses curated word lists and
//! suffix rules, [`MockMorphology`] is a fixed table for tests.
//!
//! # Example
//!
//! ```ignore
//! use gorgus::morphology::{Morphology, RuleMorphology, CoarsePos};
//! use gorgus::features::Tense;
//!
//! let morphology = RuleMorphology::new();
//! assert_eq!(morphology.pos_tag("slept", None), CoarsePos::Verb);
//! assert_eq!(morphology.detect_tense("eat", Some("will")), Tense::Futr);
//! assert_eq!(morphology.agent_noun_to_root("teachers").as_deref(), Some("teach"));
//! ```

pub mod english;
pub mod inflect;
pub mod mock;
pub mod wordlists;

pub use english::RuleMorphology;
pub use inflect::{gerund, indefinite_article, past_tense};
pub use mock::MockMorphology;

use crate::features::Tense;
use std::fmt;

/// Coarse part-of-speech buckets used by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarsePos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Adposition,
    Pronoun,
    Particle,
    Determiner,
    Unknown,
}

impl CoarsePos {
    /// Name of the formal word-type morpheme slot for this bucket
    pub fn slot_name(&self) -> &'static str {
        match self {
            CoarsePos::Noun => "NOUN",
            CoarsePos::Verb => "VERB",
            CoarsePos::Adjective => "ADJECTIVE",
            CoarsePos::Adverb => "ADVERB",
            CoarsePos::Adposition => "ADPOSITION",
            CoarsePos::Pronoun => "PRONOUN",
            CoarsePos::Particle => "PARTICLE",
            CoarsePos::Determiner => "DETERMINER",
            CoarsePos::Unknown => "UNKNOWN",
        }
    }

    /// Lower-case name used in inspection output
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarsePos::Noun => "noun",
            CoarsePos::Verb => "verb",
            CoarsePos::Adjective => "adjective",
            CoarsePos::Adverb => "adverb",
            CoarsePos::Adposition => "adposition",
            CoarsePos::Pronoun => "pronoun",
            CoarsePos::Particle => "particle",
            CoarsePos::Determiner => "determiner",
            CoarsePos::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CoarsePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable English morphology
///
/// Implementations must be deterministic and must never fail: a word they
/// cannot classify is reported as [`CoarsePos::Unknown`] or `None`, and the
/// pipeline passes it through untranslated.
pub trait Morphology: Send + Sync {
    /// Tag a lower-case word with one word of left context
    ///
    /// # Arguments
    ///
    /// * `word` - The word to tag
    /// * `previous` - The word before it, if any
    ///
    /// # Returns
    ///
    /// The coarse POS bucket; `Unknown` for empty or symbol-only input
    fn pos_tag(&self, word: &str, previous: Option<&str>) -> CoarsePos;

    /// Detect the tense of a verb
    ///
    /// `previous` lets periphrastic futures ("will eat") be recognized. A
    /// single string holding both words (`"will eat"`) is accepted as well.
    fn detect_tense(&self, word: &str, previous: Option<&str>) -> Tense;

    /// Base form of a verb; unknown words come back unchanged
    fn lemmatize_verb(&self, word: &str) -> String;

    /// Plural of a noun, `None` when the word cannot be pluralized
    fn pluralize(&self, word: &str) -> Option<String>;

    /// Singular of a plural noun, `None` when the word is not recognized as a plural
    fn singularize(&self, word: &str) -> Option<String>;

    /// Root of an agent noun ("teachers" → "teach"), `None` if the word is not one
    fn agent_noun_to_root(&self, word: &str) -> Option<String>;

    /// Agent noun of a root ("teach" → "teacher")
    fn root_to_agent_noun(&self, root: &str) -> String;

    /// Get the name of this backend
    ///
    /// Used for logging to identify which backend analyzed a sentence.
    fn backend_name(&self) -> &str;
}
