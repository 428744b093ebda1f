//! Bilingual Gorgus dictionary
//!
//! A [`Lexicon`] is built once from a [`LexiconSource`] and is read-only
//! afterwards. It exposes two views of the same entries: one keyed by the
//! accented headword and one keyed by the deaccented headword, plus an index
//! from English gloss to definition rank used by the encoder.
//!
//! # Example
//!
//! ```ignore
//! use gorgus::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builtin()?;
//! assert_eq!(lexicon.lookup("chongle").unwrap().canonical(), "eat");
//! assert_eq!(lexicon.best_match(["sleep"]).unwrap().headword, "eep");
//! ```

pub mod accents;
pub mod loader;

pub use accents::{PROTECTED_DIACRITICS, deaccent};
pub use loader::{LexiconSource, load_lexicon_from_file, parse_lexicon};

use crate::error::{GorgusError, GorgusResult};
use crate::features::{FeatureValue, Intensity, Tense};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Lexicon shipped with the crate
pub const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.json");

/// One ordinary dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Gorgus headword with its diacritics (NFC)
    pub headword: String,
    /// Headword with pronunciation marks removed
    pub deaccented: String,
    /// English surface forms; never empty, the first one is canonical
    pub glosses: Vec<String>,
    /// Position in the source dictionary, lower wins ties
    pub rank: usize,
}

impl LexiconEntry {
    /// The preferred English rendering
    pub fn canonical(&self) -> &str {
        &self.glosses[0]
    }
}

/// Affixes and particles stored under bracketed dictionary keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphemes {
    pub plural: String,
    pub actor: String,
    pub exaggerated: String,
    pub gentle: String,
    pub more: String,
    pub less: String,
    pub past: String,
    pub cont: String,
    pub futr: String,
    pub question: String,
    pub article: String,
    pub plural_copula: String,
    /// Formal word-type suffixes keyed by coarse POS name, in definition order
    pub word_types: Vec<(String, String)>,
}

fn take_slot(slots: &mut HashMap<String, String>, slot: &str) -> GorgusResult<String> {
    slots
        .remove(slot)
        .ok_or_else(|| GorgusError::LexiconFormat(format!("missing morpheme slot {}", slot)))
}

/// Suffix of a tense slot; the plain tense has none
fn take_tense(slots: &mut HashMap<String, String>, tense: Tense) -> GorgusResult<String> {
    match tense.slot() {
        Some(slot) => take_slot(slots, slot),
        None => Ok(String::new()),
    }
}

impl Morphemes {
    fn from_slots(mut slots: HashMap<String, String>, order: &[String]) -> GorgusResult<Self> {
        let plural = take_slot(&mut slots, "<PLURAL>")?;
        let actor = take_slot(&mut slots, "<ACTOR>")?;
        let exaggerated = take_slot(&mut slots, Intensity::Exaggerated.slot())?;
        let gentle = take_slot(&mut slots, Intensity::Gentle.slot())?;
        let more = take_slot(&mut slots, Intensity::More.slot())?;
        let less = take_slot(&mut slots, Intensity::Less.slot())?;
        let past = take_tense(&mut slots, Tense::Past)?;
        let cont = take_tense(&mut slots, Tense::Cont)?;
        let futr = take_tense(&mut slots, Tense::Futr)?;
        let question = take_slot(&mut slots, "<QUESTION>")?;
        let article = take_slot(&mut slots, "<ARTICLE>")?;
        let plural_copula = take_slot(&mut slots, "<PLURAL_COPULA>")?;

        // everything left over is a word-type suffix
        let word_types = order
            .iter()
            .filter_map(|slot| {
                slots.get(slot).map(|value| {
                    let name = slot.trim_start_matches('<').trim_end_matches('>');
                    (name.to_string(), value.clone())
                })
            })
            .collect();

        Ok(Self {
            plural,
            actor,
            exaggerated,
            gentle,
            more,
            less,
            past,
            cont,
            futr,
            question,
            article,
            plural_copula,
            word_types,
        })
    }

    pub fn intensity(&self, intensity: Intensity) -> &str {
        match intensity {
            Intensity::Exaggerated => &self.exaggerated,
            Intensity::Gentle => &self.gentle,
            Intensity::More => &self.more,
            Intensity::Less => &self.less,
        }
    }

    /// Tense suffix, empty for the plain form
    pub fn tense(&self, tense: Tense) -> &str {
        match tense {
            Tense::Norm => "",
            Tense::Past => &self.past,
            Tense::Cont => &self.cont,
            Tense::Futr => &self.futr,
        }
    }

    /// Formal suffix for a coarse POS name such as `"VERB"`
    pub fn word_type(&self, name: &str) -> Option<&str> {
        self.word_types
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, suffix)| suffix.as_str())
    }

    /// Characters of the four intensity morphemes
    pub fn protected_chars(&self) -> Vec<char> {
        Intensity::ALL
            .iter()
            .flat_map(|intensity| self.intensity(*intensity).chars())
            .collect()
    }
}

/// A phrase-dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Gorgus phrase, or an intensity placeholder such as `EXAGGERATE`
    pub key: String,
    /// English surface forms; the first one is used when decoding
    pub surfaces: Vec<String>,
}

impl PhraseEntry {
    /// Placeholder keys stand for intensity idioms and are not real Gorgus text
    pub fn is_placeholder(&self) -> bool {
        Intensity::from_placeholder(&self.key).is_some()
    }
}

/// Immutable bilingual dictionary with its derived views
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_headword: HashMap<String, usize>,
    by_deaccented: HashMap<String, usize>,
    gloss_index: HashMap<String, Vec<usize>>,
    morphemes: Morphemes,
    phrases: Vec<PhraseEntry>,
    ignored_plurals: HashSet<String>,
    ignored_agent_nouns: HashSet<String>,
    word_features: HashMap<String, BTreeMap<String, FeatureValue>>,
    modifier_info: HashMap<String, String>,
    informal_words: HashSet<String>,
    usage_notes: HashMap<String, String>,
    protected: Vec<char>,
}

fn is_slot(key: &str) -> bool {
    key.len() > 2 && key.starts_with('<') && key.ends_with('>')
}

impl Lexicon {
    /// Parse the lexicon embedded in the crate
    pub fn builtin() -> GorgusResult<Self> {
        parse_lexicon(BUILTIN_LEXICON)
    }

    /// Normalize a raw source into a lexicon
    ///
    /// Bracketed keys become [`Morphemes`]; every other key becomes an entry
    /// whose rank is its position in the source. When two headwords deaccent
    /// to the same key, the earlier one owns the deaccented view.
    ///
    /// # Errors
    /// - A gloss value is not a string or a non-empty list of strings
    /// - A required morpheme slot is missing
    pub fn from_source(source: LexiconSource) -> GorgusResult<Self> {
        let mut slots = HashMap::new();
        let mut slot_order = Vec::new();
        let mut entries: Vec<LexiconEntry> = Vec::new();

        for (key, value) in &source.dictionary {
            let glosses = loader::normalize_glosses(key, value)?;
            if is_slot(key) {
                slot_order.push(key.clone());
                slots.insert(key.clone(), accents::compose(&glosses[0]));
                continue;
            }

            let headword = accents::compose(&key.to_lowercase());
            entries.push(LexiconEntry {
                deaccented: deaccent(&headword),
                headword,
                glosses: glosses.iter().map(|g| g.to_lowercase()).collect(),
                rank: entries.len(),
            });
        }

        let morphemes = Morphemes::from_slots(slots, &slot_order)?;
        let protected = morphemes.protected_chars();

        let mut by_headword = HashMap::new();
        let mut by_deaccented = HashMap::new();
        let mut gloss_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_headword.entry(entry.headword.clone()).or_insert(index);
            by_deaccented
                .entry(accents::deaccent_with(&entry.headword, &protected))
                .or_insert(index);
            for gloss in &entry.glosses {
                let ranks = gloss_index.entry(gloss.clone()).or_default();
                if !ranks.contains(&index) {
                    ranks.push(index);
                }
            }
        }

        let phrases = source
            .phrases
            .iter()
            .map(|(key, value)| {
                Ok(PhraseEntry {
                    key: accents::compose(key),
                    surfaces: loader::normalize_glosses(key, value)?
                        .into_iter()
                        .map(|surface| surface.to_lowercase())
                        .collect(),
                })
            })
            .collect::<GorgusResult<Vec<_>>>()?;

        let lower_set = |words: Vec<String>| -> HashSet<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };

        Ok(Self {
            entries,
            by_headword,
            by_deaccented,
            gloss_index,
            morphemes,
            phrases,
            ignored_plurals: lower_set(source.ignored_plurals),
            ignored_agent_nouns: lower_set(source.ignored_agent_nouns),
            word_features: source
                .word_features
                .into_iter()
                .map(|(word, features)| (word.to_lowercase(), features))
                .collect(),
            modifier_info: source
                .modifier_info
                .into_iter()
                .map(|(affix, info)| (accents::compose(&affix), info))
                .collect(),
            informal_words: source
                .informal_words
                .iter()
                .map(|w| accents::compose(w))
                .collect(),
            usage_notes: source
                .usage_notes
                .into_iter()
                .map(|(key, note)| (accents::compose(&key), note))
                .collect(),
            protected,
        })
    }

    /// Number of ordinary entries (morpheme slots excluded)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in definition order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Exact lookup by accented headword
    pub fn get(&self, headword: &str) -> Option<&LexiconEntry> {
        self.by_headword
            .get(&accents::compose(headword))
            .map(|&index| &self.entries[index])
    }

    /// Accent-insensitive lookup, used when decoding
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.by_deaccented
            .get(&self.deaccent(&word.to_lowercase()))
            .map(|&index| &self.entries[index])
    }

    /// Recover the display (accented) form of a deaccented headword
    pub fn accented<'a>(&'a self, deaccented: &str) -> Option<&'a str> {
        self.lookup(deaccented).map(|entry| entry.headword.as_str())
    }

    /// Whether any entry lists `word` as an English gloss
    pub fn has_gloss(&self, word: &str) -> bool {
        self.gloss_index.contains_key(word)
    }

    /// Entry with the lowest definition rank whose glosses contain any candidate
    ///
    /// # Example
    ///
    /// ```ignore
    /// // "love" is listed under both "agger" and "forp"; "agger" comes first
    /// assert_eq!(lexicon.best_match(["love"]).unwrap().headword, "agger");
    /// ```
    pub fn best_match<'a, I>(&self, candidates: I) -> Option<&LexiconEntry>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter_map(|candidate| self.gloss_index.get(candidate))
            .filter_map(|ranks| ranks.first().copied())
            .min()
            .map(|index| &self.entries[index])
    }

    pub fn morphemes(&self) -> &Morphemes {
        &self.morphemes
    }

    pub fn phrases(&self) -> &[PhraseEntry] {
        &self.phrases
    }

    /// Words that must never be plural-marked
    pub fn is_ignored_plural(&self, word: &str) -> bool {
        self.ignored_plurals.contains(word)
    }

    /// Words that look agentive but must never be agent-marked
    pub fn is_ignored_agent_noun(&self, word: &str) -> bool {
        self.ignored_agent_nouns.contains(word)
    }

    /// Curated features for a resolved English word
    pub fn word_features(&self, english: &str) -> Option<&BTreeMap<String, FeatureValue>> {
        self.word_features.get(&english.to_lowercase())
    }

    /// Human-readable meaning of an affix
    pub fn modifier_info(&self, affix: &str) -> Option<&str> {
        self.modifier_info.get(affix).map(String::as_str)
    }

    pub fn is_informal(&self, headword: &str) -> bool {
        self.informal_words.contains(headword)
    }

    pub fn usage_note(&self, headword: &str) -> Option<&str> {
        self.usage_notes.get(headword).map(String::as_str)
    }

    /// Diacritics that carry grammar in this lexicon
    pub fn protected(&self) -> &[char] {
        &self.protected
    }

    /// Deaccent with this lexicon's protected set
    pub fn deaccent(&self, text: &str) -> String {
        accents::deaccent_with(text, &self.protected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn test_builtin_loads() {
        let lexicon = builtin();
        assert!(lexicon.len() > 150);
        assert_eq!(lexicon.morphemes().plural, "ik");
        assert_eq!(lexicon.morphemes().exaggerated, "\u{0302}");
        assert_eq!(lexicon.morphemes().word_type("VERB"), Some("'ek"));
        assert_eq!(lexicon.protected().len(), 4);
    }

    #[test]
    fn test_slots_are_not_entries() {
        let lexicon = builtin();
        assert!(lexicon.get("<PLURAL>").is_none());
        assert!(lexicon.entries().iter().all(|e| !e.headword.starts_with('<')));
        // the plural prefix is not a gloss either
        assert!(lexicon.best_match(["ik"]).is_none());
    }

    #[test]
    fn test_two_views() {
        let lexicon = builtin();
        let entry = lexicon.get("chonġle̱").unwrap();
        assert_eq!(entry.deaccented, "chongle");
        assert_eq!(lexicon.lookup("chongle").unwrap().headword, "chonġle̱");
        assert_eq!(lexicon.lookup("CHONĠLE̱").unwrap().canonical(), "eat");
        assert_eq!(lexicon.accented("nack"), Some("nåck"));
        assert_eq!(lexicon.accented("zzz"), None);
    }

    #[test]
    fn test_best_match_prefers_definition_order() {
        let lexicon = builtin();
        assert_eq!(lexicon.best_match(["love"]).unwrap().headword, "agger");
        assert_eq!(lexicon.best_match(["will"]).unwrap().headword, "mebis");
        // candidate order does not matter, only entry rank
        assert_eq!(lexicon.best_match(["hi", "he"]).unwrap().headword, "nåck");
        assert!(lexicon.best_match(["qwerty"]).is_none());
    }

    #[test]
    fn test_ranks_follow_source_order() {
        let lexicon = builtin();
        for (index, entry) in lexicon.entries().iter().enumerate() {
            assert_eq!(entry.rank, index);
        }
    }

    #[test]
    fn test_missing_slot_is_an_error() {
        let err = parse_lexicon(r#"{"dictionary": {"<PLURAL>": "ik", "dink": "hi"}}"#).unwrap_err();
        assert!(err.to_string().contains("<ACTOR>"));
    }

    #[test]
    fn test_tense_and_intensity_slots_are_required() {
        let json = BUILTIN_LEXICON.replacen("\"<PAST_TENSE>\": \"ra\",", "", 1);
        let err = parse_lexicon(&json).unwrap_err();
        assert_eq!(
            err,
            GorgusError::LexiconFormat("missing morpheme slot <PAST_TENSE>".to_string())
        );

        let json = BUILTIN_LEXICON.replacen("\"<LESS_VERB>\": \"\\u0306\",", "", 1);
        assert!(parse_lexicon(&json).unwrap_err().to_string().contains("<LESS_VERB>"));
    }

    #[test]
    fn test_deaccent_collision_first_wins() {
        let json = BUILTIN_LEXICON.replacen(
            "\"plomby\": \"many\",",
            "\"plomby\": \"many\", \"dínk\": \"first\", \"dìnk\": \"second\",",
            1,
        );
        let lexicon = parse_lexicon(&json).unwrap();
        assert_eq!(lexicon.lookup("dink").unwrap().canonical(), "first");
        assert_eq!(lexicon.get("dìnk").unwrap().canonical(), "second");
    }

    #[test]
    fn test_side_tables() {
        let lexicon = builtin();
        assert!(lexicon.is_ignored_plural("you"));
        assert!(lexicon.is_ignored_agent_noun("water"));
        assert!(lexicon.is_informal("zorper"));
        assert_eq!(lexicon.usage_note("forp"), Some("romantic"));
        assert_eq!(lexicon.modifier_info("ra"), Some("past tense"));
        assert_eq!(
            lexicon.word_features("My").unwrap().get("possessive"),
            Some(&FeatureValue::from("my"))
        );
    }

    #[test]
    fn test_phrases_keep_placeholders() {
        let lexicon = builtin();
        let exaggerate = lexicon
            .phrases()
            .iter()
            .find(|p| p.key == "EXAGGERATE")
            .unwrap();
        assert!(exaggerate.is_placeholder());
        assert!(exaggerate.surfaces.contains(&"a lot".to_string()));
    }
}
