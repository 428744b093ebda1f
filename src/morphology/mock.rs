//! Mock morphology backend for testing
//!
//! A fixed tag table with trivial inflection rules. It shows that the
//! pipelines only depend on the [`Morphology`] contract, and it lets tests pin
//! down POS decisions that the rule backend would make differently.
//!
//! # Example
//!
//! ```ignore
//! use gorgus::morphology::{CoarsePos, MockMorphology, Morphology};
//!
//! let mock = MockMorphology::new(&[("eat", CoarsePos::Noun)]);
//! assert_eq!(mock.pos_tag("eat", None), CoarsePos::Noun);
//! assert_eq!(mock.pos_tag("anything", None), CoarsePos::Noun);
//! ```

use crate::features::Tense;
use crate::morphology::{CoarsePos, Morphology};
use std::collections::HashMap;

/// Morphology backend driven by a fixed word → POS table
#[derive(Debug, Clone)]
pub struct MockMorphology {
    tags: HashMap<String, CoarsePos>,
    /// POS returned for words missing from the table
    fallback: CoarsePos,
    /// Agent noun → verb root
    agent_roots: HashMap<String, String>,
}

impl MockMorphology {
    /// Create a mock with the given tag table; untagged words are nouns
    pub fn new(tags: &[(&str, CoarsePos)]) -> Self {
        Self {
            tags: tags
                .iter()
                .map(|(word, pos)| (word.to_string(), *pos))
                .collect(),
            fallback: CoarsePos::Noun,
            agent_roots: HashMap::new(),
        }
    }

    /// Change the POS reported for untagged words
    pub fn with_fallback(mut self, fallback: CoarsePos) -> Self {
        self.fallback = fallback;
        self
    }

    /// Report `noun` as the agent noun of `root`
    pub fn with_agent_root(mut self, noun: &str, root: &str) -> Self {
        self.agent_roots.insert(noun.to_string(), root.to_string());
        self
    }
}

impl Morphology for MockMorphology {
    fn pos_tag(&self, word: &str, _previous: Option<&str>) -> CoarsePos {
        if word.trim().is_empty() {
            return CoarsePos::Unknown;
        }
        self.tags.get(word).copied().unwrap_or(self.fallback)
    }

    fn detect_tense(&self, word: &str, previous: Option<&str>) -> Tense {
        let mut parts: Vec<&str> = word.split_whitespace().collect();
        let word = parts.pop().unwrap_or_default();
        let previous = parts.last().copied().or(previous);

        if previous == Some("will") && self.pos_tag(word, None) == CoarsePos::Verb {
            Tense::Futr
        } else if word.ends_with("ed") {
            Tense::Past
        } else if word.ends_with("ing") {
            Tense::Cont
        } else {
            Tense::Norm
        }
    }

    fn lemmatize_verb(&self, word: &str) -> String {
        word.to_string()
    }

    fn pluralize(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            None
        } else {
            Some(format!("{}s", word))
        }
    }

    fn singularize(&self, word: &str) -> Option<String> {
        word.strip_suffix('s')
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }

    fn agent_noun_to_root(&self, word: &str) -> Option<String> {
        self.agent_roots.get(word).cloned()
    }

    fn root_to_agent_noun(&self, root: &str) -> String {
        format!("{}er", root)
    }

    fn backend_name(&self) -> &str {
        "Mock Morphology"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_table_and_fallback() {
        let mock = MockMorphology::new(&[("eat", CoarsePos::Verb)]);
        assert_eq!(mock.pos_tag("eat", None), CoarsePos::Verb);
        assert_eq!(mock.pos_tag("dog", None), CoarsePos::Noun);
        assert_eq!(mock.pos_tag("", None), CoarsePos::Unknown);

        let mock = mock.with_fallback(CoarsePos::Unknown);
        assert_eq!(mock.pos_tag("dog", None), CoarsePos::Unknown);
    }

    #[test]
    fn test_trivial_inflection() {
        let mock = MockMorphology::new(&[("eat", CoarsePos::Verb)]);
        assert_eq!(mock.detect_tense("will eat", None), Tense::Futr);
        assert_eq!(mock.detect_tense("jumped", None), Tense::Past);
        assert_eq!(mock.singularize("dogs").as_deref(), Some("dog"));
        assert_eq!(mock.singularize("s"), None);
        assert_eq!(mock.agent_noun_to_root("teacher"), None);
        let mock = mock.with_agent_root("teacher", "teach");
        assert_eq!(mock.agent_noun_to_root("teacher").as_deref(), Some("teach"));
        assert_eq!(mock.backend_name(), "Mock Morphology");
    }
}
