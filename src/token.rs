//! Whitespace tokens and punctuation handling shared by both pipelines

use crate::error::{GorgusError, GorgusResult};
use crate::features::Tense;
use crate::morphology::CoarsePos;
use regex::Regex;

/// Symbols removed from the inside of a word
pub const SYMBOLS: [char; 14] = [
    '?', '.', '!', ',', '"', ':', '(', ')', '=', '/', '\\', '$', '[', ']',
];

/// Splits a raw whitespace token into its core word and trailing punctuation
///
/// Protected characters (the lexicon's intensity diacritics) are excluded from
/// the punctuation class, so they stay on the word.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    trailing: Regex,
}

impl Tokenizer {
    /// # Arguments
    ///
    /// * `protected` - Characters never treated as trailing punctuation
    pub fn new(protected: &[char]) -> GorgusResult<Self> {
        let protected: String = protected
            .iter()
            .map(|c| format!("\\x{{{:X}}}", *c as u32))
            .collect();
        let trailing = Regex::new(&format!(r"[^\w\s{}]+$", protected))
            .map_err(|e| GorgusError::Pattern(format!("trailing punctuation: {}", e)))?;
        Ok(Self { trailing })
    }

    /// Trailing run of punctuation, empty when the token ends in a word character
    pub fn trailing_punctuation<'a>(&self, raw: &'a str) -> &'a str {
        self.trailing.find(raw).map(|m| m.as_str()).unwrap_or("")
    }

    /// Token without its trailing punctuation
    pub fn strip_trailing<'a>(&self, raw: &'a str) -> &'a str {
        &raw[..raw.len() - self.trailing_punctuation(raw).len()]
    }

    /// Split a token into (lower-case core word, trailing punctuation)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let tokenizer = Tokenizer::new(lexicon.protected())?;
    /// assert_eq!(tokenizer.split("you?"), ("you".to_string(), "?".to_string()));
    /// assert_eq!(tokenizer.split(":)"), (String::new(), ":)".to_string()));
    /// ```
    pub fn split(&self, raw: &str) -> (String, String) {
        let punctuation = self.trailing_punctuation(raw);
        let core: String = self
            .strip_trailing(raw)
            .chars()
            .filter(|c| !SYMBOLS.contains(c))
            .collect();
        (core.to_lowercase(), punctuation.to_string())
    }
}

/// Features computed for one source word by the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw text as it appeared after phrase substitution
    pub text: String,
    pub core: String,
    pub punctuation: String,
    pub word_type: CoarsePos,
    pub tense: Tense,
    pub base_form: String,
    pub singular: Option<String>,
    pub plural: Option<String>,
    pub is_plural: bool,
    /// Verb root when the word is an agent noun
    pub agent_root: Option<String>,
}

impl Token {
    pub fn is_actor(&self) -> bool {
        self.agent_root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PROTECTED_DIACRITICS;

    #[test]
    fn test_split_punctuation() {
        let tokenizer = Tokenizer::new(&PROTECTED_DIACRITICS).unwrap();
        assert_eq!(tokenizer.split("Hi!"), ("hi".to_string(), "!".to_string()));
        assert_eq!(tokenizer.split("you?!"), ("you".to_string(), "?!".to_string()));
        assert_eq!(tokenizer.split("word"), ("word".to_string(), String::new()));
        assert_eq!(tokenizer.split(":)"), (String::new(), ":)".to_string()));
    }

    #[test]
    fn test_interior_symbols_removed() {
        let tokenizer = Tokenizer::new(&PROTECTED_DIACRITICS).unwrap();
        assert_eq!(tokenizer.split("(wow)"), ("wow".to_string(), ")".to_string()));
        // apostrophes are part of Gorgus words
        assert_eq!(
            tokenizer.split("eep'ekra."),
            ("eep'ekra".to_string(), ".".to_string())
        );
    }

    #[test]
    fn test_protected_set_is_configurable() {
        let raw = "klu~.";
        assert_eq!(Tokenizer::new(&[]).unwrap().trailing_punctuation(raw), "~.");

        let tokenizer = Tokenizer::new(&['~']).unwrap();
        assert_eq!(tokenizer.trailing_punctuation(raw), ".");
        assert_eq!(tokenizer.split(raw), ("klu~".to_string(), ".".to_string()));
    }

    #[test]
    fn test_diacritics_are_not_punctuation() {
        let tokenizer = Tokenizer::new(&PROTECTED_DIACRITICS).unwrap();
        let raw = "kithrark\u{0302}.";
        assert_eq!(tokenizer.trailing_punctuation(raw), ".");
        assert_eq!(tokenizer.strip_trailing(raw), "kithrark\u{0302}");
        assert_eq!(tokenizer.trailing_punctuation("klu\u{0303}"), "");
    }
}
