//! Sentence-level clean-up applied after either pipeline

use crate::error::{GorgusError, GorgusResult};
use crate::lexicon::accents;
use crate::morphology::indefinite_article;
use regex::{Captures, Regex};

/// Capitalization and accent handling for finished translations
#[derive(Debug, Clone)]
pub struct PostProcessor {
    pronoun_i: Regex,
    sentence_start: Regex,
    protected: Vec<char>,
}

impl PostProcessor {
    /// # Arguments
    ///
    /// * `question` - The question particle, treated as a sentence boundary
    /// * `protected` - Diacritics kept when accents are switched off
    pub fn new(question: &str, protected: &[char]) -> GorgusResult<Self> {
        let pronoun_i = Regex::new(r"\bi\b")
            .map_err(|e| GorgusError::Pattern(format!("pronoun i: {}", e)))?;
        let sentence_start = Regex::new(&format!(
            r"(?i)([.?!]|\b{}\b)\s*(\w)",
            regex::escape(question)
        ))
        .map_err(|e| GorgusError::Pattern(format!("sentence start: {}", e)))?;

        Ok(Self {
            pronoun_i,
            sentence_start,
            protected: protected.to_vec(),
        })
    }

    /// Capitalize, optionally deaccent, and normalize to NFC
    ///
    /// Only the first letter of the text keeps its case after the initial
    /// capitalization; letters following `.`, `?`, `!` or the question
    /// particle are upper-cased again.
    pub fn fix_up(&self, text: &str, add_accents: bool) -> String {
        let mut text = capitalize(text.trim());
        if !add_accents {
            text = accents::deaccent_with(&text, &self.protected);
        }

        let text = self.pronoun_i.replace_all(&text, "I");
        let text = self.sentence_start.replace_all(&text, |caps: &Captures| {
            format!("{} {}", &caps[1], caps[2].to_uppercase())
        });
        accents::compose(&text)
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Replace every `article` placeholder with "a"/"an" chosen for the next word
///
/// A placeholder with nothing after it is kept as is.
pub fn fix_articles(text: &str, article: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut result = Vec::with_capacity(words.len());

    let mut i = 0;
    while i < words.len() {
        if words[i].to_lowercase() == article && i + 1 < words.len() {
            let next = words[i + 1];
            result.push(format!("{} {}", indefinite_article(next), next));
            i += 2;
        } else {
            result.push(words[i].to_string());
            i += 1;
        }
    }
    result.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> PostProcessor {
        PostProcessor::new("lunk", &['\u{0302}', '\u{0303}', '\u{0310}', '\u{0306}']).unwrap()
    }

    #[test]
    fn test_capitalization() {
        let post = post();
        assert_eq!(post.fix_up("dink! dup pritterok lunk", true), "Dink! Dup pritterok lunk");
        assert_eq!(post.fix_up("  hello, i am here.  ", true), "Hello, I am here.");
        assert_eq!(post.fix_up("NÅCK EEPRA.", true), "Nåck eepra.");
        assert_eq!(post.fix_up("zup meat lunk googrung", true), "Zup meat lunk Googrung");
    }

    #[test]
    fn test_accents_off_keeps_intensity_marks() {
        let post = post();
        assert_eq!(post.fix_up("nåck eepra.", false), "Nack eepra.");
        assert_eq!(
            post.fix_up("klu\u{0302}!", false),
            accents::compose("Klu\u{0302}!")
        );
        assert_eq!(post.fix_up("chonġle̱", false), "Chongle");
    }

    #[test]
    fn test_fix_articles() {
        assert_eq!(fix_articles("i have ji dog", "ji"), "i have a dog");
        assert_eq!(fix_articles("ji apple and ji hour", "ji"), "an apple and an hour");
        assert_eq!(fix_articles("ji really nice day", "ji"), "a really nice day");
        assert_eq!(fix_articles("trailing ji", "ji"), "trailing ji");
    }
}
