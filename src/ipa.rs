//! IPA pronunciation guide for Gorgus text

use crate::lexicon::accents;
use std::collections::HashMap;
use std::sync::LazyLock;

/// IPA value and the romanizations that produce it
const ROMANIZATION: &[(&str, &[&str])] = &[
    ("lʊː", &["lu"]),
    ("ʃ", &["sh", "ćh"]),
    ("o", &["oe", "ó"]),
    ("l", &["l", "ll"]),
    ("iː", &["ee", "é", "ea"]),
    ("h", &["h"]),
    ("ɜː", &["er", "ur"]),
    ("ɔɹ", &["or"]),
    ("tʃ", &["ch"]),
    ("ʌ", &["u"]),
    ("ʊː", &["oo", "ú"]),
    ("ɔ", &["o"]),
    ("iːko", &["eeko"]),
    ("ʤ", &["j"]),
    ("ɔɹʤ", &["orge"]),
    ("ɹ", &["r"]),
    ("f", &["f", "ff"]),
    ("kw", &["q", "qu"]),
    ("ɔɹs", &["ors", "orse"]),
    ("ŋg", &["nġ"]),
    ("iŋg", &["ing"]),
    ("ŋ", &["ng"]),
    ("oŋk", &["onk"]),
    ("t", &["t", "tt"]),
    ("ɑːɹ", &["ar", "å"]),
    ("k", &["k", "c", "ck"]),
    ("g", &["g", "gg"]),
    ("ɛ", &["è"]),
    // trilled r
    ("r", &["ŕ̈"]),
    ("e͡ɪ", &["ae", "ä", "â", "ai", "ay"]),
    ("ɪ", &["i"]),
    ("ɪŋk", &["ink"]),
    ("eŋk", &["enk"]),
    ("θ", &["th"]),
    ("e͡ɪv", &["ave"]),
    ("j", &["y"]),
    ("ks", &["x"]),
    // rising tone on the question particle
    ("lʌ̌ŋk", &["lunk"]),
    ("iːno", &["ino"]),
    ("vɪŋ", &["ving"]),
    ("oʊʤ", &["oge"]),
    ("ɹs", &["rse"]),
    ("aɪk", &["ike"]),
    ("aɪd", &["ide", "ied"]),
    ("kχ", &["ç"]),
    ("m", &["m", "mm", "mmm"]),
    // exaggerated: lengthened vowel
    ("ː", &["\u{0302}"]),
    // gentle: breathy, low falling
    ("\u{0324}˨˩", &["\u{0303}"]),
    // underlined letters are silent
    (
        "",
        &[
            "a̱", "ḇ", "c̱", "ḏ", "e̱", "f̱", "g̱", "ẖ", "i̱", "j̱", "ḵ", "ḻ", "m̱", "ṉ", "o̱", "p̱", "q̱",
            "ṟ", "s̱", "ṯ", "u̱", "v̱", "w̱", "x̱", "y̱", "ẕ",
        ],
    ),
];

/// Decomposed romanization → IPA
static IPA_TABLE: LazyLock<HashMap<Vec<char>, &'static str>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (ipa, romanizations) in ROMANIZATION {
        for roman in *romanizations {
            table.insert(accents::decompose(roman).chars().collect(), *ipa);
        }
    }
    table
});

static LONGEST_KEY: LazyLock<usize> =
    LazyLock::new(|| IPA_TABLE.keys().map(Vec::len).max().unwrap_or(1));

/// Transcribe Gorgus text into IPA, wrapped in slashes
///
/// Commas become a minor break `|`, full stops and exclamation marks a major
/// break `‖`, apostrophes a syllable break.
///
/// # Example
///
/// ```ignore
/// assert_eq!(ipa("Dink"), "/dɪŋk/");
/// assert_eq!(ipa("Dup pritterok lunk"), "/dʌp pɹɪtɜːɔk lʌ̌ŋk/");
/// ```
pub fn ipa(text: &str) -> String {
    let text = text
        .replace(',', " |")
        .replace(['.', '!'], " ‖")
        .replace(['?', '"', ':', '(', ')', '=', '/', '\\', '$', '[', ']'], "")
        .to_lowercase()
        .replace('-', "")
        .replace('\'', ".");

    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| transcribe_word(&accents::decompose(word)))
        .collect();
    format!("/{}/", accents::compose(&words.join(" ")))
}

/// Left-to-right longest match over the romanization table
fn transcribe_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let longest = (*LONGEST_KEY).min(chars.len() - i);
        let matched = (1..=longest)
            .rev()
            .find_map(|len| IPA_TABLE.get(&chars[i..i + len]).map(|ipa| (len, *ipa)));

        match matched {
            Some((len, ipa)) => {
                out.push_str(ipa);
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_words() {
        assert_eq!(ipa("dink"), "/dɪŋk/");
        assert_eq!(ipa("Lunk"), accents::compose("/lʌ̌ŋk/"));
    }

    #[test]
    fn test_longest_match_wins() {
        // "ck" is one sound, "orge" beats "or"
        assert_eq!(ipa("nåck"), "/nɑːɹk/");
        assert_eq!(ipa("horge"), "/hɔɹʤ/");
    }

    #[test]
    fn test_breaks_and_silent_letters() {
        assert_eq!(ipa("dink, pont!"), "/dɪŋk | pɔnt ‖/");
        assert_eq!(ipa("chonġle̱"), "/tʃɔŋgl/");
        assert_eq!(ipa("eep'ek"), "/iːp.ek/");
    }

    #[test]
    fn test_intensity_marks() {
        assert_eq!(ipa("klu\u{0302}"), "/klʊːː/");
        assert_eq!(ipa("klu\u{0303}"), accents::compose("/klʊː\u{0324}˨˩/"));
    }
}
