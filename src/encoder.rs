//! English → Gorgus pipeline
//!
//! The encoder runs in three passes over a sentence that has already been
//! lower-cased:
//!
//! 1. Phrase substitution ([`PhraseBook::encode`]), which may leave intensity
//!    placeholders such as `EXAGGERATE` in the text.
//! 2. A side table assigning every placeholder to the word it modifies,
//!    followed by a single left-to-right pass that analyzes each token,
//!    matches it against the lexicon and emits the Gorgus word with its
//!    affixes.
//! 3. Relocation of free-standing intensity adverbs ("very", "slightly", ...)
//!    onto the word that follows them.
//!
//! # Example
//!
//! ```ignore
//! let encoder = Encoder::new(&lexicon, &morphology, &phrases, &tokenizer);
//! assert_eq!(encoder.encode("he slept.", false), "nåck eepra.");
//! assert_eq!(encoder.encode("he slept.", true), "nåck eep'ekra.");
//! ```

use crate::features::{Intensity, Tense};
use crate::lexicon::Lexicon;
use crate::morphology::{CoarsePos, Morphology};
use crate::phrases::PhraseBook;
use crate::token::{Token, Tokenizer};
use std::collections::HashMap;
use tracing::{debug, trace};

const DEFINITE_ARTICLE: &str = "the";

/// One emitted Gorgus word and the source token it came from
#[derive(Debug, Clone)]
struct Emission {
    text: String,
    source: usize,
    intensity: Option<Intensity>,
}

/// English → Gorgus translator over borrowed, immutable resources
pub struct Encoder<'a> {
    lexicon: &'a Lexicon,
    morphology: &'a dyn Morphology,
    phrases: &'a PhraseBook,
    tokenizer: &'a Tokenizer,
}

impl<'a> Encoder<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        morphology: &'a dyn Morphology,
        phrases: &'a PhraseBook,
        tokenizer: &'a Tokenizer,
    ) -> Self {
        Self {
            lexicon,
            morphology,
            phrases,
            tokenizer,
        }
    }

    /// Encode a lower-cased English sentence
    ///
    /// # Arguments
    ///
    /// * `text` - Lower-cased, trimmed input
    /// * `formal` - Append word-type suffixes to every matched word
    ///
    /// # Returns
    ///
    /// Gorgus text before capitalization; words missing from the lexicon are
    /// passed through with their affixes and punctuation.
    pub fn encode(&self, text: &str, formal: bool) -> String {
        let text = self.phrases.encode(text);
        let words: Vec<&str> = text.split_whitespace().collect();
        let intensities = self.attach_intensities(&words);

        let mut emitted: Vec<Emission> = Vec::new();
        let mut previous: Option<String> = None;

        for (index, raw) in words.iter().enumerate() {
            if placeholder(self.tokenizer, raw).is_some() {
                self.reattach_punctuation(&mut emitted, raw);
                continue;
            }

            let (core, punctuation) = self.tokenizer.split(raw);
            if core == DEFINITE_ARTICLE {
                self.reattach_punctuation(&mut emitted, raw);
                previous = Some(core);
                continue;
            }
            if core.is_empty() {
                emitted.push(Emission {
                    text: raw.to_string(),
                    source: index,
                    intensity: None,
                });
                continue;
            }

            let mut intensity = intensities.get(&index).copied();
            let punctuation = self.render_punctuation(&core, &punctuation);
            let token = self.analyze(raw, core, previous.as_deref());

            if token.tense == Tense::Futr {
                // "will eat": the auxiliary becomes a suffix on the verb
                if emitted.last().is_some_and(|last| last.source + 1 == index) {
                    if let Some(auxiliary) = emitted.pop() {
                        intensity = intensity.or(auxiliary.intensity);
                    }
                }
            }

            let text = self.render(&token, intensity, &punctuation, formal);
            previous = Some(token.core);
            emitted.push(Emission {
                text,
                source: index,
                intensity,
            });
        }

        let sentence: Vec<String> = emitted.into_iter().map(|emission| emission.text).collect();
        self.relocate_modifiers(sentence).join(" ")
    }

    /// Compute every feature of a non-empty token
    fn analyze(&self, raw: &str, core: String, previous: Option<&str>) -> Token {
        let morphology = self.morphology;
        let word_type = morphology.pos_tag(&core, previous);
        let plural = morphology.pluralize(&core);
        let singular = if self.lexicon.is_ignored_plural(&core) {
            None
        } else {
            morphology.singularize(&core)
        };
        let mut is_plural = singular.is_some() && word_type == CoarsePos::Noun;

        let agent_root = if self.is_agent_candidate(&core, singular.as_deref(), word_type) {
            morphology.agent_noun_to_root(&core)
        } else {
            None
        };
        if let Some(root) = &agent_root {
            // "fishers": the root's plural is the root itself
            if morphology.pluralize(root).as_deref() == Some(root.as_str()) {
                is_plural = true;
            }
        }
        if plural.as_deref().is_some_and(|p| self.lexicon.is_ignored_plural(p)) {
            is_plural = false;
        }

        let tense = morphology.detect_tense(&core, previous);
        let base_form = if matches!(core.as_str(), "is" | "are" | "am") {
            core.clone()
        } else {
            morphology.lemmatize_verb(&core)
        };

        Token {
            text: raw.to_string(),
            punctuation: self.tokenizer.trailing_punctuation(raw).to_string(),
            core,
            word_type,
            tense,
            base_form,
            singular,
            plural,
            is_plural,
            agent_root,
        }
    }

    fn is_agent_candidate(&self, word: &str, singular: Option<&str>, pos: CoarsePos) -> bool {
        if pos == CoarsePos::Verb || self.lexicon.is_ignored_agent_noun(word) {
            return false;
        }
        if singular.is_some_and(|s| self.lexicon.is_ignored_agent_noun(s)) {
            return false;
        }
        // a word with its own entry is never decomposed
        !(self.lexicon.has_gloss(word) || singular.is_some_and(|s| self.lexicon.has_gloss(s)))
    }

    /// Look the token up and build its Gorgus form
    fn render(
        &self,
        token: &Token,
        intensity: Option<Intensity>,
        punctuation: &str,
        formal: bool,
    ) -> String {
        let mark = intensity
            .map(|i| self.lexicon.morphemes().intensity(i))
            .unwrap_or("");

        if token.plural.is_none() {
            debug!(word = %token.core, "cannot inflect, passing through");
            return format!("{}{}{}", token.core, mark, punctuation);
        }

        let entry = match &token.agent_root {
            Some(root) => {
                let plural_root = self.morphology.pluralize(root);
                self.lexicon
                    .best_match([Some(root.as_str()), plural_root.as_deref()].into_iter().flatten())
            }
            None if token.word_type == CoarsePos::Verb => {
                self.lexicon.best_match([token.base_form.as_str()])
            }
            None => {
                let mut candidates = Vec::with_capacity(3);
                if let Some(singular) = &token.singular {
                    candidates.push(singular.as_str());
                }
                candidates.push(token.core.as_str());
                if token.is_plural {
                    if let Some(plural) = &token.plural {
                        candidates.push(plural.as_str());
                    }
                }
                self.lexicon.best_match(candidates)
            }
        };

        let Some(entry) = entry else {
            debug!(word = %token.core, pos = %token.word_type, "no lexicon entry, passing through");
            return format!("{}{}{}", token.core, mark, punctuation);
        };

        let morphemes = self.lexicon.morphemes();
        let word_type = if formal {
            morphemes.word_type(token.word_type.slot_name()).unwrap_or("")
        } else {
            ""
        };

        let mut out = String::new();
        if token.is_plural {
            out.push_str(&morphemes.plural);
        }
        out.push_str(&entry.headword);
        out.push_str(word_type);
        if token.is_actor() {
            out.push_str(&morphemes.actor);
        }
        out.push_str(mark);
        out.push_str(morphemes.tense(token.tense));
        out.push_str(punctuation);

        trace!(word = %token.core, headword = %entry.headword, output = %out, "matched");
        out
    }

    /// A trailing "?" becomes the question particle, other punctuation is kept
    fn render_punctuation(&self, core: &str, punctuation: &str) -> String {
        let question = &self.lexicon.morphemes().question;
        if punctuation.ends_with('?') {
            if core == question {
                String::new()
            } else {
                format!(" {}", question)
            }
        } else {
            punctuation.to_string()
        }
    }

    /// Move the punctuation of a dropped word onto the previous emission
    fn reattach_punctuation(&self, emitted: &mut [Emission], raw: &str) {
        let punctuation = self.tokenizer.trailing_punctuation(raw);
        if punctuation.is_empty() {
            return;
        }
        let punctuation = self.render_punctuation("", punctuation);
        if let Some(last) = emitted.last_mut() {
            last.text.push_str(&punctuation);
        }
    }

    /// Assign each intensity placeholder to the word it modifies
    ///
    /// The nearest preceding verb or adjective wins, then the nearest
    /// preceding word, then the next word.
    fn attach_intensities(&self, words: &[&str]) -> HashMap<usize, Intensity> {
        let cores: Vec<String> = words
            .iter()
            .map(|raw| self.tokenizer.split(raw).0)
            .collect();
        let is_content = |i: usize| {
            placeholder(self.tokenizer, words[i]).is_none()
                && !cores[i].is_empty()
                && cores[i] != DEFINITE_ARTICLE
        };

        let mut table = HashMap::new();
        for (index, raw) in words.iter().enumerate() {
            let Some(intensity) = placeholder(self.tokenizer, raw) else {
                continue;
            };

            let modifiable = (0..index).rev().filter(|&i| is_content(i)).find(|&i| {
                let previous = i.checked_sub(1).map(|p| cores[p].as_str());
                matches!(
                    self.morphology.pos_tag(&cores[i], previous),
                    CoarsePos::Verb | CoarsePos::Adjective
                )
            });
            let target = modifiable
                .or_else(|| (0..index).rev().find(|&i| is_content(i)))
                .or_else(|| (index + 1..words.len()).find(|&i| is_content(i)));

            if let Some(target) = target {
                table.insert(target, intensity);
            }
        }
        table
    }

    /// Fold free-standing intensity adverbs into the following word
    ///
    /// The mark lands on the word after the adverb, or one further when that
    /// word is the plural copula ("very horge angry").
    fn relocate_modifiers(&self, mut words: Vec<String>) -> Vec<String> {
        let morphemes = self.lexicon.morphemes();
        for intensity in Intensity::ALL {
            let mark = morphemes.intensity(intensity);
            for adverb in intensity.legacy_adverbs() {
                let mut i = 0;
                while i < words.len() {
                    if words[i] != *adverb || i + 1 >= words.len() {
                        i += 1;
                        continue;
                    }

                    let mut target = i + 1;
                    if words[target].to_lowercase() == morphemes.plural_copula
                        && target + 1 < words.len()
                    {
                        target += 1;
                    }

                    let word = &words[target];
                    let punctuation = self.tokenizer.trailing_punctuation(word);
                    let marked = format!(
                        "{}{}{}",
                        &word[..word.len() - punctuation.len()],
                        mark,
                        punctuation
                    );
                    words[target] = marked;
                    words.remove(i);
                }
            }
        }
        words
    }
}

/// Intensity placeholder written by the phrase pass, if `raw` is one
fn placeholder(tokenizer: &Tokenizer, raw: &str) -> Option<Intensity> {
    Intensity::from_placeholder(tokenizer.strip_trailing(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::accents::compose;
    use crate::lexicon::{BUILTIN_LEXICON, parse_lexicon};
    use crate::morphology::{MockMorphology, RuleMorphology};
    use serde_json::{Value, json};

    struct Fixture {
        lexicon: Lexicon,
        phrases: PhraseBook,
        tokenizer: Tokenizer,
    }

    /// Built-in lexicon with one top-level field replaced
    fn lexicon_with(field: &str, value: Value) -> Lexicon {
        let mut source: Value = serde_json::from_str(BUILTIN_LEXICON).unwrap();
        source[field] = value;
        parse_lexicon(&source.to_string()).unwrap()
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_lexicon(Lexicon::builtin().unwrap())
        }

        fn with_lexicon(lexicon: Lexicon) -> Self {
            let phrases = PhraseBook::new(&lexicon).unwrap();
            let tokenizer = Tokenizer::new(lexicon.protected()).unwrap();
            Self {
                lexicon,
                phrases,
                tokenizer,
            }
        }

        fn encode_with(&self, morphology: &dyn Morphology, text: &str, formal: bool) -> String {
            Encoder::new(&self.lexicon, morphology, &self.phrases, &self.tokenizer)
                .encode(text, formal)
        }

        fn encode(&self, text: &str) -> String {
            compose(&self.encode_with(&RuleMorphology::new(), text, false))
        }
    }

    #[test]
    fn test_plain_words() {
        let fixture = Fixture::new();
        assert_eq!(fixture.encode("he slept."), "nåck eepra.");
        assert_eq!(fixture.encode("how is the weather?"), "dup gorse̱ clidó lunk");
    }

    #[test]
    fn test_formal_suffixes() {
        let fixture = Fixture::new();
        let formal = fixture.encode_with(&RuleMorphology::new(), "he slept.", true);
        assert_eq!(formal, "nåck eep'ekra.");
    }

    #[test]
    fn test_plural_and_agent() {
        let fixture = Fixture::new();
        assert_eq!(fixture.encode("dogs"), "ikfren");
        assert_eq!(fixture.encode("teachers"), "ikkooble-ak");
        assert_eq!(fixture.encode("teacher"), "kooble-ak");
    }

    #[test]
    fn test_ignored_plurals_decide_marking() {
        // the mock singularizes "its" to "it" and tags it as a noun
        let mock = MockMorphology::new(&[]);
        assert_eq!(Fixture::new().encode_with(&mock, "its", false), "kracken");

        let fixture = Fixture::with_lexicon(lexicon_with("ignored_plurals", json!([])));
        let marked = fixture.encode_with(&mock, "its", false);
        assert!(marked.starts_with("ik"), "got {:?}", marked);
    }

    #[test]
    fn test_ignored_agent_nouns_decide_marking() {
        let mock = MockMorphology::new(&[]).with_agent_root("letter", "let");
        assert_eq!(Fixture::new().encode_with(&mock, "letter", false), "letter");

        let fixture = Fixture::with_lexicon(lexicon_with("ignored_agent_nouns", json!([])));
        assert_eq!(fixture.encode_with(&mock, "letter", false), "wibble-ak");
    }

    #[test]
    fn test_ignored_plural_form_drops_marking() {
        // the mock pluralizes "dogs" to "dogss"
        let mock = MockMorphology::new(&[]);
        assert_eq!(Fixture::new().encode_with(&mock, "dogs", false), "ikfren");

        let fixture = Fixture::with_lexicon(lexicon_with("ignored_plurals", json!(["dogss"])));
        assert_eq!(fixture.encode_with(&mock, "dogs", false), "fren");
    }

    #[test]
    fn test_future_merge() {
        let fixture = Fixture::new();
        assert_eq!(fixture.encode("i will eat."), compose("henġer chonġle̱'gup."));
        // auxiliary at the start of the sentence
        assert_eq!(fixture.encode("will eat"), compose("chonġle̱'gup"));
        assert_eq!(fixture.encode("i will"), "henġer mebis");
    }

    #[test]
    fn test_intensity_placeholder() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.encode("i eat a lot."),
            compose("henġer chonġle̱\u{0302}.")
        );
        assert_eq!(
            fixture.encode("a little bit sad"),
            compose("squumth\u{0303}")
        );
    }

    #[test]
    fn test_legacy_adverb_relocation() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.encode("very cool! very good. :)"),
            compose("klu\u{0302}! dagunġa\u{0302}. :)")
        );
        // the plural copula is skipped over
        assert_eq!(
            fixture.encode("cats really are angry."),
            compose("ikshmack horge kithrark\u{0302}.")
        );
    }

    #[test]
    fn test_pass_through() {
        let fixture = Fixture::new();
        assert_eq!(fixture.encode("zorbulate the flibber?"), "zorbulate flibber lunk");
        assert_eq!(fixture.encode("123"), "123");
    }

    #[test]
    fn test_mock_backend() {
        let fixture = Fixture::new();
        // the mock tags "smell" as a verb; the rule backend would say noun after "the"
        let mock = MockMorphology::new(&[("smell", CoarsePos::Verb)]);
        assert_eq!(fixture.encode_with(&mock, "the smell", true), "kiff'ek");
        assert_eq!(fixture.encode_with(&mock, "dogs", true), "ikfren'ub");
    }
}
