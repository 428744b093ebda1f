//! Rule-based English morphology backend

use crate::features::Tense;
use crate::morphology::inflect;
use crate::morphology::wordlists::{
    ADJECTIVES, ADPOSITIONS, ADVERBS, AUXILIARIES, BASE_VERBS, DETERMINERS, IRREGULAR_FORMS,
    NOT_ADVERB_LY, NOUN_ING, PARTICLES, POSSESSIVES, PRONOUNS,
};
use crate::morphology::{CoarsePos, Morphology};

const AGENT_SUFFIXES: [&str; 3] = ["er", "or", "ist"];
const ADJECTIVE_SUFFIXES: [&str; 5] = ["ful", "ous", "able", "ible", "ish"];
const FUTURE_AUXILIARIES: [&str; 2] = ["will", "shall"];

/// Deterministic English morphology built from word lists and suffix rules
#[derive(Debug, Clone, Default)]
pub struct RuleMorphology;

impl RuleMorphology {
    pub fn new() -> Self {
        Self
    }

    /// Resolve an inflected word to a known base verb, if any rule applies
    fn verb_base(&self, word: &str) -> Option<String> {
        if BASE_VERBS.contains(word) {
            return Some(word.to_string());
        }
        if let Some(base) = IRREGULAR_FORMS.get(word) {
            return Some(base.to_string());
        }

        let mut candidates: Vec<String> = Vec::new();
        if let Some(stem) = word.strip_suffix("ies") {
            candidates.push(format!("{}y", stem));
        }
        if let Some(stem) = word.strip_suffix("es") {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix('s') {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix("ying") {
            candidates.push(format!("{}ie", stem));
        }
        if let Some(stem) = word.strip_suffix("ing") {
            push_stem_candidates(&mut candidates, stem);
        }
        if let Some(stem) = word.strip_suffix("ied") {
            candidates.push(format!("{}y", stem));
        }
        // "seed", "speed": not inflected verbs
        if !word.ends_with("eed") {
            if let Some(stem) = word.strip_suffix("ed") {
                push_stem_candidates(&mut candidates, stem);
            }
        }

        candidates
            .into_iter()
            .find(|candidate| BASE_VERBS.contains(candidate.as_str()))
    }

    fn is_verb_form(&self, word: &str) -> bool {
        if word.ends_with("ing") && NOUN_ING.contains(word) {
            return false;
        }
        self.verb_base(word).is_some()
    }
}

/// Candidates for a stem left after removing "-ing" or "-ed":
/// the stem itself, the stem with a restored "e", and the undoubled stem
fn push_stem_candidates(candidates: &mut Vec<String>, stem: &str) {
    if stem.chars().count() < 2 {
        return;
    }
    candidates.push(stem.to_string());
    candidates.push(format!("{}e", stem));

    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 2 && chars[n - 1] == chars[n - 2] {
        candidates.push(chars[..n - 1].iter().collect());
    }
}

fn has_letters(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

impl Morphology for RuleMorphology {
    fn pos_tag(&self, word: &str, previous: Option<&str>) -> CoarsePos {
        let word = word.trim();
        if word.is_empty() || !has_letters(word) {
            return CoarsePos::Unknown;
        }

        if POSSESSIVES.contains(word) {
            return CoarsePos::Determiner;
        }
        if PRONOUNS.contains(word) {
            return CoarsePos::Pronoun;
        }
        if DETERMINERS.contains(word) {
            return CoarsePos::Determiner;
        }
        if AUXILIARIES.contains(word) {
            return CoarsePos::Verb;
        }
        if PARTICLES.contains(word) {
            return CoarsePos::Particle;
        }
        if ADPOSITIONS.contains(word) {
            return CoarsePos::Adposition;
        }
        if ADVERBS.contains(word) {
            return CoarsePos::Adverb;
        }
        if ADJECTIVES.contains(word) {
            return CoarsePos::Adjective;
        }

        // "the smell", "a drink": a determiner forces a noun reading
        let after_determiner = previous
            .map(|p| DETERMINERS.contains(p) || POSSESSIVES.contains(p))
            .unwrap_or(false);
        if after_determiner && !IRREGULAR_FORMS.contains_key(word) {
            return CoarsePos::Noun;
        }

        if self.is_verb_form(word) {
            return CoarsePos::Verb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|end| word.ends_with(end)) && word.len() > 5 {
            return CoarsePos::Adjective;
        }
        if word.ends_with("ly") && word.len() > 4 && !NOT_ADVERB_LY.contains(word) {
            return CoarsePos::Adverb;
        }
        CoarsePos::Noun
    }

    fn detect_tense(&self, word: &str, previous: Option<&str>) -> Tense {
        let mut parts: Vec<&str> = word.split_whitespace().collect();
        let Some(word) = parts.pop() else {
            return Tense::Norm;
        };
        let previous = parts.last().copied().or(previous);

        if let Some(previous) = previous {
            if FUTURE_AUXILIARIES.contains(&previous)
                && (BASE_VERBS.contains(word) || AUXILIARIES.contains(word))
            {
                return Tense::Futr;
            }
        }

        if BASE_VERBS.contains(word) {
            return Tense::Norm;
        }
        if IRREGULAR_FORMS.contains_key(word) {
            return match word {
                "been" | "being" => Tense::Norm,
                _ => Tense::Past,
            };
        }
        if word.ends_with("ed") && self.is_verb_form(word) {
            return Tense::Past;
        }
        if word.ends_with("ing") && self.is_verb_form(word) {
            return Tense::Cont;
        }
        Tense::Norm
    }

    fn lemmatize_verb(&self, word: &str) -> String {
        if matches!(word, "is" | "are" | "am" | "was" | "were" | "been" | "being") {
            return "be".to_string();
        }
        match word {
            "has" => return "have".to_string(),
            "does" => return "do".to_string(),
            _ => {}
        }
        self.verb_base(word).unwrap_or_else(|| word.to_string())
    }

    fn pluralize(&self, word: &str) -> Option<String> {
        inflect::plural_noun(word)
    }

    fn singularize(&self, word: &str) -> Option<String> {
        inflect::singular_noun(word)
    }

    fn agent_noun_to_root(&self, word: &str) -> Option<String> {
        let singular = inflect::singular_noun(word).unwrap_or_else(|| word.to_string());

        for suffix in AGENT_SUFFIXES {
            let Some(stem) = singular.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < 2 {
                continue;
            }
            let mut candidates = Vec::new();
            push_stem_candidates(&mut candidates, stem);
            if let Some(root) = candidates
                .into_iter()
                .find(|candidate| BASE_VERBS.contains(candidate.as_str()))
            {
                return Some(root);
            }
        }
        None
    }

    fn root_to_agent_noun(&self, root: &str) -> String {
        inflect::agent_noun(root)
    }

    fn backend_name(&self) -> &str {
        "Rule Morphology"
    }
}
