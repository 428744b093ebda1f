//! Phrase preprocessor
//!
//! Whole idioms are substituted before tokenization. Encoding replaces English
//! phrases with their Gorgus key (or an intensity placeholder such as
//! `EXAGGERATE`); decoding replaces Gorgus phrase keys with their first English
//! expansion. Both passes are purely textual.

use crate::error::{GorgusError, GorgusResult};
use crate::lexicon::Lexicon;
use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

#[derive(Debug, Clone)]
struct CompiledPhrase {
    pattern: Regex,
    replacement: String,
}

impl CompiledPhrase {
    /// Case-insensitive matcher for `phrase` as a whole word sequence
    ///
    /// Word boundaries are only asserted at edges that are word characters,
    /// so a phrase ending in punctuation still matches.
    fn new(phrase: &str, replacement: &str) -> GorgusResult<Self> {
        let starts_with_word = phrase.chars().next().is_some_and(is_word_char);
        let ends_with_word = phrase.chars().last().is_some_and(is_word_char);

        let pattern = format!(
            "{}{}{}",
            if starts_with_word { r"\b" } else { "" },
            regex::escape(phrase),
            if ends_with_word { r"\b" } else { "" },
        );
        let pattern = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| GorgusError::Pattern(format!("phrase '{}': {}", phrase, e)))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, text: &str) -> String {
        if !self.pattern.is_match(text) {
            return text.to_string();
        }
        debug!(pattern = %self.pattern, replacement = %self.replacement, "phrase substitution");
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Precompiled phrase substitutions for both directions
#[derive(Debug, Clone)]
pub struct PhraseBook {
    encode: Vec<CompiledPhrase>,
    decode: Vec<CompiledPhrase>,
}

impl PhraseBook {
    /// Compile the phrase dictionary of a lexicon
    ///
    /// Encode order: entries sorted by the length of their longest English
    /// surface form, longest first, so "how are you going" is replaced before
    /// "how are you". Entries of equal length keep definition order.
    ///
    /// Decode order: non-placeholder keys, deaccented, longest first.
    ///
    /// # Errors
    /// - A phrase cannot be compiled into a regex
    pub fn new(lexicon: &Lexicon) -> GorgusResult<Self> {
        let mut by_length: Vec<_> = lexicon.phrases().iter().collect();
        by_length.sort_by_key(|entry| {
            std::cmp::Reverse(
                entry
                    .surfaces
                    .iter()
                    .map(|surface| surface.chars().count())
                    .max()
                    .unwrap_or(0),
            )
        });

        let mut encode = Vec::new();
        for entry in &by_length {
            for surface in &entry.surfaces {
                encode.push(CompiledPhrase::new(surface, &entry.key)?);
            }
        }

        let mut keys: Vec<_> = lexicon
            .phrases()
            .iter()
            .filter(|entry| !entry.is_placeholder())
            .map(|entry| (lexicon.deaccent(&entry.key.to_lowercase()), &entry.surfaces[0]))
            .collect();
        keys.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));

        let decode = keys
            .into_iter()
            .map(|(key, expansion)| CompiledPhrase::new(&key, expansion))
            .collect::<GorgusResult<Vec<_>>>()?;

        Ok(Self { encode, decode })
    }

    /// Replace English phrases with Gorgus keys or intensity placeholders
    pub fn encode(&self, text: &str) -> String {
        self.encode
            .iter()
            .fold(text.to_string(), |text, phrase| phrase.apply(&text))
    }

    /// Replace deaccented Gorgus phrase keys with their English expansion
    pub fn decode(&self, text: &str) -> String {
        self.decode
            .iter()
            .fold(text.to_string(), |text, phrase| phrase.apply(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PhraseBook {
        PhraseBook::new(&Lexicon::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_longest_phrase_wins() {
        let book = book();
        assert_eq!(book.encode("hi! how are you?"), "hi! dup pritterok?");
        assert_eq!(book.encode("how are you going?"), "dup pritterok?");
        assert_eq!(book.encode("i eat a lot more"), "i eat MORE");
    }

    #[test]
    fn test_whole_words_only() {
        let book = book();
        // "i love" must not match inside "hi lovely"
        assert_eq!(book.encode("hi lovely"), "hi lovely");
        assert_eq!(book.encode("I love you."), "h'orpó you.");
    }

    #[test]
    fn test_intensity_placeholders() {
        let book = book();
        assert_eq!(book.encode("i eat a lot."), "i eat EXAGGERATE.");
        assert_eq!(book.encode("a little bit sad"), "GENTLE sad");
    }

    #[test]
    fn test_decode_expansion() {
        let book = book();
        assert_eq!(
            book.decode("dink, dup pritterok lunk"),
            "dink, how are you going lunk"
        );
        assert_eq!(book.decode("minger goob'rung ji"), "i hope you have ji");
        // placeholders are never decoded
        assert_eq!(book.decode("exaggerate"), "exaggerate");
    }
}
