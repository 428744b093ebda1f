//! Accent normalization
//!
//! Gorgus spelling uses combining marks for two unrelated purposes: some are
//! pronunciation aids (`å`, `ġ`, the silent-letter underline) and four of them
//! are grammatical morphemes marking intensity. Decoding has to ignore the first
//! kind while keeping the second.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Combining marks that carry grammatical meaning and survive deaccenting:
/// circumflex (exaggerated), tilde (gentle), candrabindu (more), breve (less)
pub const PROTECTED_DIACRITICS: [char; 4] = ['\u{0302}', '\u{0303}', '\u{0310}', '\u{0306}'];

/// Strip every combining mark except the protected intensity diacritics
///
/// The text is decomposed (NFD), marks outside [`PROTECTED_DIACRITICS`] are
/// dropped and the result is recomposed (NFC). The function is total and
/// idempotent.
///
/// # Example
///
/// ```ignore
/// assert_eq!(deaccent("chonġle̱"), "chongle");
/// assert_eq!(deaccent("klû"), "klû");
/// ```
pub fn deaccent(text: &str) -> String {
    deaccent_with(text, &PROTECTED_DIACRITICS)
}

/// Same as [`deaccent`] with an explicit protected set
pub fn deaccent_with(text: &str, protected: &[char]) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c) || protected.contains(c))
        .nfc()
        .collect()
}

/// Canonical composed form used for stored headwords and final output
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Decomposed form, so diacritic morphemes can be found as separate chars
pub fn decompose(text: &str) -> String {
    text.nfd().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deaccent_drops_pronunciation_marks() {
        assert_eq!(deaccent("chonġle̱"), "chongle");
        assert_eq!(deaccent("nåck"), "nack");
        assert_eq!(deaccent("clidó"), "clido");
        assert_eq!(deaccent("gè'googrung"), "ge'googrung");
    }

    #[test]
    fn test_deaccent_keeps_intensity_marks() {
        assert_eq!(deaccent("klu\u{0302}"), compose("klu\u{0302}"));
        assert_eq!(decompose(&deaccent("dagsa\u{0303}")), "dagsa\u{0303}");
        assert!(decompose(&deaccent("kithrark\u{0310}")).ends_with('\u{0310}'));
        assert!(decompose(&deaccent("zorp\u{0306}")).ends_with('\u{0306}'));
    }

    #[test]
    fn test_deaccent_mixed_marks_on_one_letter() {
        // underline is dropped, circumflex stays
        let word = "chon\u{0121}le\u{0331}\u{0302}";
        assert_eq!(decompose(&deaccent(word)), "chongle\u{0302}");
    }

    #[test]
    fn test_deaccent_is_idempotent() {
        let samples = [
            "",
            "plain ascii",
            "Henġer agger ikfren!",
            "Minġer goob'rung ji dagsâ dublub. :)",
            "e\u{0331}\u{0302}\u{0303}",
            "ŕ̈ and ç and ǘ",
            "\u{0302}\u{0302}",
        ];
        for sample in samples {
            let once = deaccent(sample);
            assert_eq!(deaccent(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_deaccent_with_custom_set() {
        assert_eq!(deaccent_with("klû", &[]), "klu");
        assert_eq!(deaccent_with("nåck", &['\u{030A}']), "nåck");
    }
}
