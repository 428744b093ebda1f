//! Gorgus → English pipeline with inspection
//!
//! Each word is first looked up whole. When that fails its affixes are peeled
//! off into an [`Affixes`] value (tense suffix, plural prefix, intensity
//! diacritics, agent suffix, formal word-type suffix) and the remaining stem is
//! looked up instead. Only a successful lookup applies the recorded affixes;
//! an unknown word passes through exactly as written.

use crate::features::{Intensity, Tense};
use crate::inspection::{Inspection, WordInspection, analyze_pronoun};
use crate::lexicon::{Lexicon, LexiconEntry, accents};
use crate::morphology::{CoarsePos, Morphology, gerund, past_tense};
use crate::phrases::PhraseBook;
use crate::postprocess::fix_articles;
use crate::token::Tokenizer;
use tracing::{debug, trace};

/// Affixes found on a word, outermost last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affixes {
    pub stem: String,
    pub tense: Option<(Tense, String)>,
    pub plural: bool,
    pub actor: bool,
    /// (intensity, word before removal, word after removal)
    pub intensities: Vec<(Intensity, String, String)>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Affixes {
    fn bare(word: &str) -> Self {
        Self {
            stem: word.to_string(),
            ..Self::default()
        }
    }

    fn is_root(&self) -> bool {
        !(self.actor || self.plural || self.tense.is_some())
    }
}

/// Gorgus → English translator over borrowed, immutable resources
pub struct Decoder<'a> {
    lexicon: &'a Lexicon,
    morphology: &'a dyn Morphology,
    phrases: &'a PhraseBook,
    tokenizer: &'a Tokenizer,
}

impl<'a> Decoder<'a> {
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

    /// Decode a Gorgus sentence
    ///
    /// # Returns
    ///
    /// The English text before capitalization and the inspection of every
    /// word. `inspection.translation` holds the same uncapitalized text.
    pub fn decode(&self, text: &str) -> (String, Inspection) {
        let mut inspection = Inspection::new(text);
        let morphemes = self.lexicon.morphemes();

        let normalized = self.lexicon.deaccent(&text.to_lowercase());
        let expanded = self.phrases.decode(&normalized);

        let mut pieces: Vec<String> = Vec::new();
        for raw in expanded.split_whitespace() {
            let (core, punctuation) = self.tokenizer.split(raw);

            if core == morphemes.question {
                self.question_particle(&mut pieces, &mut inspection);
                continue;
            }
            if core.is_empty() {
                pieces.push(raw.to_string());
                continue;
            }

            let record = self.decode_word(&core, &punctuation, &mut pieces, &mut inspection);
            inspection.push_word(record, self.lexicon.morphemes());
        }

        let translation = fix_articles(&pieces.join(" "), &morphemes.article);
        inspection.translation = translation.clone();
        (translation, inspection)
    }

    fn question_particle(&self, pieces: &mut Vec<String>, inspection: &mut Inspection) {
        let question = &self.lexicon.morphemes().question;
        match pieces.last_mut() {
            Some(last) => last.push('?'),
            None => pieces.push("?".to_string()),
        }

        let mut record = WordInspection::new(question.as_str());
        record.lemma = question.clone();
        record.pos = CoarsePos::Particle.as_str().to_string();
        record.set("role", "QuestionMarker");
        inspection.add_note(format!(
            "\"{}\" at the end confirms this is a direct question.",
            question
        ));
        inspection
            .morphology
            .push(format!("{} = sentence-final question marker", question));
        inspection.push_word(record, self.lexicon.morphemes());
    }

    /// Translate one word, pushing its English pieces and explanations
    fn decode_word(
        &self,
        core: &str,
        punctuation: &str,
        pieces: &mut Vec<String>,
        inspection: &mut Inspection,
    ) -> WordInspection {
        let article = &self.lexicon.morphemes().article;
        let mut record = WordInspection::new(self.lexicon.accented(core).unwrap_or(core));

        let bare = if core == article.as_str() {
            None
        } else {
            self.lexicon.lookup(core)
        };
        let (entry, affixes) = match bare {
            Some(entry) => (Some(entry), Affixes::bare(core)),
            None => {
                let affixes = self.strip_affixes(core);
                if affixes.stem == *article {
                    pieces.push(format!("{}{}", article, punctuation));
                    record.lemma = article.clone();
                    record.pos = CoarsePos::Determiner.as_str().to_string();
                    record.set("role", "IndefiniteArticle");
                    return record;
                }
                (self.lexicon.lookup(&affixes.stem), affixes)
            }
        };

        let Some(entry) = entry else {
            debug!(word = %core, "not in lexicon, passing through");
            pieces.push(format!("{}{}", core, punctuation));
            record.lemma = core.to_string();
            record.pos = self.morphology.pos_tag(core, None).as_str().to_string();
            record.set("untranslated", true);
            return record;
        };

        record.lemma = entry.headword.clone();
        self.apply_affixes(core, &affixes, &mut record, pieces, inspection);

        let english = self.inflect(entry, &affixes);
        trace!(word = %core, headword = %entry.headword, english = %english, "decoded");

        let first = english.split_whitespace().next().unwrap_or_default();
        let pos = self.morphology.pos_tag(first, None);
        record.pos = pos.as_str().to_string();

        let features = self.lexicon.word_features(&english);
        if let Some(features) = features {
            record.features.extend(features.clone());
        }
        if pos == CoarsePos::Pronoun {
            let (person, gender) = analyze_pronoun(&english);
            record.set("person", person);
            record.set("gender", capitalize(gender));
        }
        if self.lexicon.is_informal(&entry.headword) {
            record.set("register", "informal");
        }
        if let Some(sense) = self.lexicon.usage_note(&entry.headword) {
            record.set("sense", sense);
        }

        if affixes.intensities.is_empty() {
            let line = self.morphology_line(&record, entry, &affixes, &english, pos);
            inspection.morphology.push(line);
        }

        pieces.push(format!("{}{}", english, punctuation));
        record
    }

    /// Peel affixes off a word that is not in the lexicon as written
    ///
    /// Order: tense suffix (longest first), plural prefix, intensity
    /// diacritics (anywhere in the word), agent suffix, word-type suffix.
    pub fn strip_affixes(&self, word: &str) -> Affixes {
        let morphemes = self.lexicon.morphemes();
        let mut affixes = Affixes::bare(word);
        let mut stem = word.to_string();

        let mut tenses = [
            (Tense::Cont, morphemes.cont.as_str()),
            (Tense::Past, morphemes.past.as_str()),
            (Tense::Futr, morphemes.futr.as_str()),
        ];
        tenses.sort_by_key(|(_, suffix)| std::cmp::Reverse(suffix.chars().count()));
        for (tense, suffix) in tenses {
            if let Some(rest) = strip_suffix(&stem, suffix) {
                stem = rest;
                affixes.tense = Some((tense, suffix.to_string()));
                affixes.suffixes.push(suffix.to_string());
                break;
            }
        }

        let unprefixed = stem
            .strip_prefix(morphemes.plural.as_str())
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);
        if let Some(rest) = unprefixed {
            stem = rest;
            affixes.plural = true;
            affixes.prefixes.push(morphemes.plural.clone());
        }

        for intensity in Intensity::ALL {
            let mark = accents::decompose(morphemes.intensity(intensity));
            let decomposed = accents::decompose(&stem);
            if mark.is_empty() || !decomposed.contains(&mark) {
                continue;
            }
            stem = accents::compose(&decomposed.replace(&mark, ""));
            affixes
                .intensities
                .push((intensity, word.to_string(), stem.clone()));
        }

        if let Some(rest) = strip_suffix(&stem, &morphemes.actor) {
            stem = rest;
            affixes.actor = true;
            affixes.suffixes.push(morphemes.actor.clone());
        }

        let mut word_types: Vec<&str> = morphemes
            .word_types
            .iter()
            .map(|(_, suffix)| suffix.as_str())
            .collect();
        word_types.sort_by_key(|suffix| std::cmp::Reverse(suffix.chars().count()));
        for suffix in word_types {
            let plain = self.lexicon.deaccent(suffix);
            let Some(rest) = strip_suffix(&stem, suffix).or_else(|| strip_suffix(&stem, &plain))
            else {
                continue;
            };
            stem = rest;
            // the word-type suffix sits inside the tense and agent suffixes
            match affixes.suffixes.pop() {
                Some(outer) => {
                    affixes.suffixes.push(suffix.to_string());
                    affixes.suffixes.push(outer);
                }
                None => affixes.suffixes.push(suffix.to_string()),
            }
            break;
        }

        affixes.stem = stem;
        affixes
    }

    /// Record features, adverbs and notes for the affixes of a found word
    fn apply_affixes(
        &self,
        core: &str,
        affixes: &Affixes,
        record: &mut WordInspection,
        pieces: &mut Vec<String>,
        inspection: &mut Inspection,
    ) {
        if let Some((tense, suffix)) = &affixes.tense {
            if *tense == Tense::Cont {
                record.set("aspect", "continuous");
            } else {
                record.set("tense", tense.name());
                inspection.add_note(format!(
                    "The verb uses the {}-tense suffix \"{}\"",
                    tense.name(),
                    suffix
                ));
            }
        }
        if affixes.plural {
            record.set("number", "plural");
        }
        if affixes.actor {
            record.set("agentive", true);
        }

        let morphemes = self.lexicon.morphemes();
        for (intensity, before, after) in &affixes.intensities {
            pieces.push(intensity.adverb().to_string());
            record.set("intensity", intensity.feature_value());
            record.set("intensity_code", i64::from(intensity.code()));
            if intensity.is_comparative() {
                record.set("comparative", true);
            }
            inspection.morphology.push(format!(
                "{} = {} + {}  ({})",
                before,
                after,
                morphemes.intensity(*intensity),
                intensity.description()
            ));
        }
        if let Some((last, _, _)) = affixes.intensities.last() {
            let kind = if last.is_raising() {
                "intensification"
            } else {
                "reduced intensification"
            };
            inspection.add_note(format!("\"{}\" shows {} via diacritic", core, kind));
        }
    }

    /// Canonical gloss re-inflected for agent, number and tense
    fn inflect(&self, entry: &LexiconEntry, affixes: &Affixes) -> String {
        let mut english = entry.canonical().to_string();
        if affixes.actor {
            english = self.morphology.root_to_agent_noun(&english);
        }
        if affixes.plural {
            if let Some(plural) = self.morphology.pluralize(&english) {
                english = plural;
            }
        }

        let Some((tense, _)) = &affixes.tense else {
            return english;
        };
        let base = self.morphology.lemmatize_verb(&english);
        // the plural copula keeps its number in the past
        let plural_be = base == "be" && (affixes.plural || english == "are");
        match tense {
            Tense::Norm => english,
            Tense::Past if plural_be => "were".to_string(),
            Tense::Past => past_tense(&base),
            Tense::Cont => gerund(&base),
            Tense::Futr => format!("will {}", base),
        }
    }

    /// Morphology breakdown for a word without intensity marks
    fn morphology_line(
        &self,
        record: &WordInspection,
        entry: &LexiconEntry,
        affixes: &Affixes,
        english: &str,
        pos: CoarsePos,
    ) -> String {
        let mut line = format!("{} = ", record.word);

        if let Some(features) = self.lexicon.word_features(english) {
            if pos != CoarsePos::Determiner && affixes.is_root() {
                line.push_str("[Root] ");
            }
            match features.get("possessive").and_then(|p| p.as_text()) {
                Some(possessive) => line.push_str(&format!(
                    "possessive {} (\"{}\")",
                    pos,
                    possessive.to_lowercase()
                )),
                None => line.push_str(&format!("({})", pos)),
            }
            return line;
        }

        if affixes.is_root() {
            let person = match analyze_pronoun(english) {
                (1, gender) => Some(("first", gender)),
                (2, gender) => Some(("second", gender)),
                (3, gender) => Some(("third", gender)),
                _ => None,
            };
            match person {
                Some((person, gender)) if pos == CoarsePos::Pronoun => {
                    line.push_str(&format!("[Root] ({} person {} pronoun)", person, gender))
                }
                _ => line.push_str(&format!("[Root] (\"{}\")", english)),
            }
            return line;
        }

        let parts: Vec<&str> = affixes
            .prefixes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(record.lemma.as_str()))
            .chain(affixes.suffixes.iter().map(String::as_str))
            .collect();
        line.push_str(&parts.join(" + "));

        for prefix in &affixes.prefixes {
            line.push_str(&format!(
                "\n    → Prefix: {}- (\"{}\")",
                prefix,
                self.lexicon.modifier_info(prefix).unwrap_or("?")
            ));
        }
        line.push_str(&format!(
            "\n    → Root: {} (\"{}\")",
            record.lemma,
            entry.canonical()
        ));
        for suffix in &affixes.suffixes {
            line.push_str(&format!(
                "\n    → Suffix: -{} (\"{}\")",
                suffix.trim_start_matches('-'),
                self.lexicon.modifier_info(suffix).unwrap_or("?")
            ));
        }
        line
    }
}

/// `word` without `suffix`, only when something is left
fn strip_suffix(word: &str, suffix: &str) -> Option<String> {
    if suffix.is_empty() {
        return None;
    }
    word.strip_suffix(suffix)
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureValue;
    use crate::morphology::RuleMorphology;

    struct Fixture {
        lexicon: Lexicon,
        phrases: PhraseBook,
        tokenizer: Tokenizer,
        morphology: RuleMorphology,
    }

    impl Fixture {
        fn new() -> Self {
            let lexicon = Lexicon::builtin().unwrap();
            let phrases = PhraseBook::new(&lexicon).unwrap();
            let tokenizer = Tokenizer::new(lexicon.protected()).unwrap();
            Self {
                lexicon,
                phrases,
                tokenizer,
                morphology: RuleMorphology::new(),
            }
        }

        fn decoder(&self) -> Decoder<'_> {
            Decoder::new(&self.lexicon, &self.morphology, &self.phrases, &self.tokenizer)
        }
    }

    #[test]
    fn test_strip_affixes() {
        let fixture = Fixture::new();
        let decoder = fixture.decoder();

        let affixes = decoder.strip_affixes("ikkooble-ak");
        assert_eq!(affixes.stem, "kooble");
        assert!(affixes.plural && affixes.actor);
        assert_eq!(affixes.prefixes, vec!["ik"]);
        assert_eq!(affixes.suffixes, vec!["-ak"]);

        let affixes = decoder.strip_affixes("eep'ekra");
        assert_eq!(affixes.stem, "eep");
        assert_eq!(affixes.tense, Some((Tense::Past, "ra".to_string())));
        assert_eq!(affixes.suffixes, vec!["'ek", "ra"]);

        let affixes = decoder.strip_affixes("kithrark\u{0302}");
        assert_eq!(affixes.stem, "kithrark");
        assert_eq!(affixes.intensities.len(), 1);
        assert_eq!(affixes.intensities[0].0, Intensity::Exaggerated);
    }

    #[test]
    fn test_deaccented_word_type_suffix() {
        let fixture = Fixture::new();
        // "'íj" loses its accent during normalization
        let affixes = fixture.decoder().strip_affixes("klu'ij");
        assert_eq!(affixes.stem, "klu");
        assert_eq!(affixes.suffixes, vec!["'íj"]);
    }

    #[test]
    fn test_decode_inflection() {
        let fixture = Fixture::new();
        let decoder = fixture.decoder();
        assert_eq!(decoder.decode("ikfren").0, "dogs");
        assert_eq!(decoder.decode("chonġle̱ok").0, "eating");
        assert_eq!(decoder.decode("eepra").0, "slept");
        assert_eq!(decoder.decode("chonġle̱'gup").0, "will eat");
        assert_eq!(decoder.decode("gorse̱ra").0, "was");
        assert_eq!(decoder.decode("horgera").0, "were");
        assert_eq!(decoder.decode("ikshmack horgera").0, "cats were");
    }

    #[test]
    fn test_question_particle() {
        let fixture = Fixture::new();
        let (text, inspection) = fixture.decoder().decode("dink, dup pritterok lunk");
        assert_eq!(text, "hello, how are you going?");
        let last = inspection.words.last().unwrap();
        assert_eq!(last.word, "lunk");
        assert_eq!(last.text("role"), Some("QuestionMarker"));
        assert!(
            inspection
                .notes
                .contains(&"\"lunk\" at the end confirms this is a direct question.".to_string())
        );
    }

    #[test]
    fn test_unknown_word_passes_through() {
        let fixture = Fixture::new();
        let (text, inspection) = fixture.decoder().decode("zorbulok fren");
        assert_eq!(text, "zorbulok dog");
        assert!(inspection.words[0].flag("untranslated"));
        assert_eq!(inspection.words[0].lemma, "zorbulok");
    }

    #[test]
    fn test_article_resolution() {
        let fixture = Fixture::new();
        let (text, inspection) = fixture.decoder().decode("ji omnom");
        assert_eq!(text, "a food");
        assert_eq!(inspection.words[0].text("role"), Some("IndefiniteArticle"));
    }

    #[test]
    fn test_intensity_inspection() {
        let fixture = Fixture::new();
        let (text, inspection) = fixture.decoder().decode("ikshmack horge kithrark\u{0302}.");
        assert_eq!(text, "cats are really angry.");

        let angry = &inspection.words[2];
        assert_eq!(angry.text("intensity"), Some("high"));
        assert_eq!(angry.feature("intensity_code"), Some(&FeatureValue::Number(1)));
        assert!(inspection.morphology.iter().any(|line| line.contains("diacritic for intensified form")));
        assert!(inspection.notes.iter().any(|note| note.ends_with("shows intensification via diacritic")));
    }

    #[test]
    fn test_word_features_and_pronouns() {
        let fixture = Fixture::new();
        let (text, inspection) = fixture.decoder().decode("nåck hengorp");
        assert_eq!(text, "he my");

        let he = &inspection.words[0];
        assert_eq!(he.word, "nåck");
        assert_eq!(he.pos, "pronoun");
        assert_eq!(he.feature("person"), Some(&FeatureValue::Number(3)));
        assert_eq!(he.text("gender"), Some("Masculine"));
        assert_eq!(inspection.morphology[0], "nåck = [Root] (third person masculine pronoun)");

        let my = &inspection.words[1];
        assert_eq!(my.text("possessive"), Some("my"));
        assert_eq!(inspection.morphology[1], "hengorp = possessive determiner (\"my\")");
    }

    #[test]
    fn test_affixed_morphology_breakdown() {
        let fixture = Fixture::new();
        let (_, inspection) = fixture.decoder().decode("ikkooble-ak");
        let line = &inspection.morphology[0];
        assert!(line.starts_with("ikkooble-ak = ik + kooble + -ak"));
        assert!(line.contains("→ Prefix: ik- (\"plural\")"));
        assert!(line.contains("→ Root: kooble (\"teach\")"));
        assert!(line.contains("→ Suffix: -ak (\"agent noun, one who does the action\")"));
    }

    #[test]
    fn test_informal_and_sense() {
        let fixture = Fixture::new();
        let (_, inspection) = fixture.decoder().decode("toopyat forp");
        assert_eq!(inspection.words[0].text("register"), Some("informal"));
        assert_eq!(inspection.words[1].text("sense"), Some("romantic"));
    }
}
