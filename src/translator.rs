//! Translation entry point
//!
//! A [`Translator`] owns the lexicon, the morphology backend and the compiled
//! phrase and punctuation patterns. It is built once and is read-only
//! afterwards, so a single instance can be shared between threads (it is
//! `Send + Sync`) and called concurrently without locking.
//!
//! # Example
//!
//! ```ignore
//! use gorgus::{Direction, Translator};
//!
//! let translator = Translator::builtin()?;
//! let gorgus = translator.translate("I love you.", Direction::ToConlang, false, true);
//! assert_eq!(gorgus, "H'orpó googrung.");
//!
//! let english = translator.translate_str("Toopyat!", "english", false, true)?;
//! assert_eq!(english, "Shit!");
//! ```

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{GorgusError, GorgusResult};
use crate::inspection::Inspection;
use crate::lexicon::Lexicon;
use crate::morphology::{Morphology, RuleMorphology};
use crate::phrases::PhraseBook;
use crate::postprocess::PostProcessor;
use crate::token::Tokenizer;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Conversion direction of a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// English → Gorgus
    ToConlang,
    /// Gorgus → English
    ToNatural,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToConlang => "gorgus",
            Direction::ToNatural => "english",
        }
    }
}

impl FromStr for Direction {
    type Err = GorgusError;

    /// Accepts "gorgus"/"to_conlang"/"conlang" and "english"/"to_natural"/"natural"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gorgus" | "to_conlang" | "conlang" => Ok(Direction::ToConlang),
            "english" | "to_natural" | "natural" => Ok(Direction::ToNatural),
            _ => Err(GorgusError::UnsupportedDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bidirectional English ↔ Gorgus translator
pub struct Translator {
    lexicon: Lexicon,
    morphology: Box<dyn Morphology>,
    phrases: PhraseBook,
    tokenizer: Tokenizer,
    post: PostProcessor,
}

impl Translator {
    /// Build a translator over a lexicon and a morphology backend
    ///
    /// # Errors
    /// - A phrase or punctuation pattern cannot be compiled
    pub fn new(lexicon: Lexicon, morphology: Box<dyn Morphology>) -> GorgusResult<Self> {
        let phrases = PhraseBook::new(&lexicon)?;
        let tokenizer = Tokenizer::new(lexicon.protected())?;
        let post = PostProcessor::new(&lexicon.morphemes().question, lexicon.protected())?;
        debug!(
            entries = lexicon.len(),
            backend = morphology.backend_name(),
            "translator ready"
        );

        Ok(Self {
            lexicon,
            morphology,
            phrases,
            tokenizer,
            post,
        })
    }

    /// Translator over the built-in lexicon and the rule-based morphology
    pub fn builtin() -> GorgusResult<Self> {
        Self::new(Lexicon::builtin()?, Box::new(RuleMorphology::new()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn morphology(&self) -> &dyn Morphology {
        self.morphology.as_ref()
    }

    /// Translate `text` in the given direction
    ///
    /// # Arguments
    ///
    /// * `text` - Input sentence(s); newlines are treated as spaces
    /// * `direction` - Which way to translate
    /// * `formal` - Add word-type suffixes (English → Gorgus only)
    /// * `add_accents` - Keep pronunciation diacritics in the output
    ///
    /// # Returns
    ///
    /// The capitalized translation, or an empty string for blank input.
    /// Trailing whitespace and most punctuation are not preserved exactly.
    pub fn translate(
        &self,
        text: &str,
        direction: Direction,
        formal: bool,
        add_accents: bool,
    ) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let text = text.to_lowercase().trim().replace('\n', " ");

        let translated = match direction {
            Direction::ToConlang => self.encoder().encode(&text, formal),
            Direction::ToNatural => self.decoder().decode(&text).0,
        };
        self.post.fix_up(&translated, add_accents)
    }

    /// Translate with the direction given as a string
    ///
    /// # Errors
    /// - `UnsupportedDirection` before any processing when `direction` is
    ///   not a known direction name
    pub fn translate_str(
        &self,
        text: &str,
        direction: &str,
        formal: bool,
        add_accents: bool,
    ) -> GorgusResult<String> {
        let direction = direction.parse::<Direction>()?;
        Ok(self.translate(text, direction, formal, add_accents))
    }

    /// Decode a Gorgus sentence and explain it word by word
    ///
    /// The returned translation is capitalized like [`translate`](Self::translate)
    /// output and is also stored in `inspection.translation`.
    pub fn inspect(&self, sentence: &str) -> (String, Inspection) {
        let (translated, mut inspection) = self.decoder().decode(sentence.trim());
        let translation = self.post.fix_up(&translated, true);
        inspection.translation = translation.clone();
        (translation, inspection)
    }

    fn encoder(&self) -> Encoder<'_> {
        Encoder::new(
            &self.lexicon,
            self.morphology.as_ref(),
            &self.phrases,
            &self.tokenizer,
        )
    }

    fn decoder(&self) -> Decoder<'_> {
        Decoder::new(
            &self.lexicon,
            self.morphology.as_ref(),
            &self.phrases,
            &self.tokenizer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parsing() {
        assert_eq!("gorgus".parse::<Direction>().unwrap(), Direction::ToConlang);
        assert_eq!("To_Natural".parse::<Direction>().unwrap(), Direction::ToNatural);
        assert_eq!("english".parse::<Direction>().unwrap(), Direction::ToNatural);

        let err = "klingon".parse::<Direction>().unwrap_err();
        assert_eq!(err, GorgusError::UnsupportedDirection("klingon".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let translator = Translator::builtin().unwrap();
        assert_eq!(translator.translate("", Direction::ToConlang, false, true), "");
        assert_eq!(translator.translate("  \n ", Direction::ToNatural, false, true), "");
    }

    #[test]
    fn test_invalid_direction_is_the_only_error() {
        let translator = Translator::builtin().unwrap();
        assert!(translator.translate_str("hi", "klingon", false, true).is_err());
        assert_eq!(
            translator.translate_str("hi", "gorgus", false, true).unwrap(),
            "Dink"
        );
    }

    #[test]
    fn test_newlines_become_spaces() {
        let translator = Translator::builtin().unwrap();
        assert_eq!(
            translator.translate("he\nslept.", Direction::ToConlang, false, true),
            "Nåck eepra."
        );
    }

    #[test]
    fn test_inspect_translation_is_post_processed() {
        let translator = Translator::builtin().unwrap();
        let (translation, inspection) = translator.inspect("Toopyat!");
        assert_eq!(translation, "Shit!");
        assert_eq!(inspection.translation, "Shit!");
        assert_eq!(inspection.input, "Toopyat!");
    }

    #[test]
    fn test_translator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
