//! English inflection rules
//!
//! Pure string functions used both by [`RuleMorphology`](super::RuleMorphology)
//! and directly by the decoder when re-inflecting a canonical gloss.

use crate::morphology::wordlists::{IRREGULAR_PAST, IRREGULAR_PLURALS, NOT_PLURAL};

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Number of vowel groups, a rough syllable count
fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c) || c == 'y';
        if vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = vowel;
    }
    groups
}

/// Whether a word is a one-syllable consonant-vowel-consonant form whose final
/// consonant doubles before a vowel suffix ("run" → "runner", "stop" → "stopped")
pub fn doubles_final_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 || vowel_groups(word) != 1 {
        return false;
    }
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    is_consonant(a) && is_vowel(b) && is_consonant(c) && !matches!(c, 'w' | 'x' | 'y')
}

/// Simple past of a base verb
///
/// # Example
///
/// ```ignore
/// assert_eq!(past_tense("sleep"), "slept");
/// assert_eq!(past_tense("try"), "tried");
/// assert_eq!(past_tense("stop"), "stopped");
/// ```
pub fn past_tense(verb: &str) -> String {
    if let Some((_, past)) = IRREGULAR_PAST.iter().find(|(base, _)| *base == verb) {
        return past.to_string();
    }

    let chars: Vec<char> = verb.chars().collect();
    let n = chars.len();
    if verb.ends_with('e') {
        format!("{}d", verb)
    } else if n >= 2 && chars[n - 1] == 'y' && is_consonant(chars[n - 2]) {
        format!("{}ied", &verb[..verb.len() - 1])
    } else if doubles_final_consonant(verb) {
        format!("{}{}ed", verb, chars[n - 1])
    } else {
        format!("{}ed", verb)
    }
}

/// Present participle ("-ing" form) of a base verb
///
/// # Example
///
/// ```ignore
/// assert_eq!(gerund("make"), "making");
/// assert_eq!(gerund("die"), "dying");
/// assert_eq!(gerund("run"), "running");
/// ```
pub fn gerund(verb: &str) -> String {
    if verb == "be" {
        return "being".to_string();
    }
    if verb.ends_with("ee") || verb.ends_with("ye") || verb.ends_with("oe") {
        return format!("{}ing", verb);
    }
    if let Some(stem) = verb.strip_suffix("ie") {
        return format!("{}ying", stem);
    }
    if let Some(stem) = verb.strip_suffix('e') {
        if !stem.is_empty() {
            return format!("{}ing", stem);
        }
    }
    if doubles_final_consonant(verb) {
        if let Some(last) = verb.chars().last() {
            return format!("{}{}ing", verb, last);
        }
    }
    format!("{}ing", verb)
}

/// Indefinite article for the word that follows it
///
/// Uses the usual vowel-sound heuristic with the common exceptions
/// ("an hour", "a unicorn", "a one-off").
pub fn indefinite_article(word: &str) -> &'static str {
    let lower = word.to_lowercase();
    let lower = lower.trim_start_matches(|c: char| !c.is_alphanumeric());

    const SILENT_H: [&str; 4] = ["hour", "honest", "honor", "heir"];
    const CONSONANT_SOUND: [&str; 8] = ["uni", "use", "usu", "uti", "eu", "one", "once", "ure"];

    if SILENT_H.iter().any(|prefix| lower.starts_with(prefix)) {
        return "an";
    }
    if CONSONANT_SOUND.iter().any(|prefix| lower.starts_with(prefix)) {
        return "a";
    }
    match lower.chars().next() {
        Some(c) if is_vowel(c) => "an",
        Some('8') => "an",
        _ => "a",
    }
}

/// Rule-based noun plural, `None` for words that cannot carry one
pub fn plural_noun(word: &str) -> Option<String> {
    if word.is_empty() || !word.chars().any(char::is_alphabetic) {
        return None;
    }
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(singular, _)| *singular == word) {
        return Some(plural.to_string());
    }

    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let plural = if ["s", "x", "z", "ch", "sh"].iter().any(|end| word.ends_with(end)) {
        format!("{}es", word)
    } else if n >= 2 && chars[n - 1] == 'y' && is_consonant(chars[n - 2]) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    };
    Some(plural)
}

/// Rule-based singular, `None` when the word does not look like a plural
pub fn singular_noun(word: &str) -> Option<String> {
    if word.chars().count() < 3 || word.contains('\'') || NOT_PLURAL.contains(word) {
        return None;
    }
    if let Some((singular, _)) = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, plural)| *plural == word && singular != plural)
    {
        return Some(singular.to_string());
    }
    if ["ss", "us", "is", "ous"].iter().any(|end| word.ends_with(end)) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return Some(format!("{}y", stem));
        }
    }
    for end in ["ches", "shes", "xes", "zzes", "sses"] {
        if word.ends_with(end) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    word.strip_suffix('s').map(str::to_string)
}

/// Agent noun of a root ("bake" → "baker", "run" → "runner")
pub fn agent_noun(root: &str) -> String {
    if root.ends_with('e') {
        format!("{}r", root)
    } else if doubles_final_consonant(root) {
        match root.chars().last() {
            Some(last) => format!("{}{}er", root, last),
            None => format!("{}er", root),
        }
    } else {
        format!("{}er", root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_tense() {
        assert_eq!(past_tense("sleep"), "slept");
        assert_eq!(past_tense("eat"), "ate");
        assert_eq!(past_tense("bake"), "baked");
        assert_eq!(past_tense("try"), "tried");
        assert_eq!(past_tense("play"), "played");
        assert_eq!(past_tense("stop"), "stopped");
        assert_eq!(past_tense("want"), "wanted");
    }

    #[test]
    fn test_gerund() {
        assert_eq!(gerund("eat"), "eating");
        assert_eq!(gerund("make"), "making");
        assert_eq!(gerund("die"), "dying");
        assert_eq!(gerund("see"), "seeing");
        assert_eq!(gerund("run"), "running");
        assert_eq!(gerund("go"), "going");
        assert_eq!(gerund("be"), "being");
        assert_eq!(gerund("fix"), "fixing");
    }

    #[test]
    fn test_indefinite_article() {
        assert_eq!(indefinite_article("really"), "a");
        assert_eq!(indefinite_article("apple"), "an");
        assert_eq!(indefinite_article("hour"), "an");
        assert_eq!(indefinite_article("unicorn"), "a");
        assert_eq!(indefinite_article("umbrella"), "an");
        assert_eq!(indefinite_article("European"), "a");
    }

    #[test]
    fn test_plural_noun() {
        assert_eq!(plural_noun("dog").as_deref(), Some("dogs"));
        assert_eq!(plural_noun("box").as_deref(), Some("boxes"));
        assert_eq!(plural_noun("city").as_deref(), Some("cities"));
        assert_eq!(plural_noun("day").as_deref(), Some("days"));
        assert_eq!(plural_noun("child").as_deref(), Some("children"));
        assert_eq!(plural_noun("teacher").as_deref(), Some("teachers"));
        assert_eq!(plural_noun(""), None);
        assert_eq!(plural_noun(":)"), None);
    }

    #[test]
    fn test_singular_noun() {
        assert_eq!(singular_noun("dogs").as_deref(), Some("dog"));
        assert_eq!(singular_noun("cities").as_deref(), Some("city"));
        assert_eq!(singular_noun("boxes").as_deref(), Some("box"));
        assert_eq!(singular_noun("people").as_deref(), Some("person"));
        assert_eq!(singular_noun("dog"), None);
        assert_eq!(singular_noun("glass"), None);
        assert_eq!(singular_noun("his"), None);
        assert_eq!(singular_noun("what's"), None);
        assert_eq!(singular_noun("sheep"), None);
    }

    #[test]
    fn test_agent_noun() {
        assert_eq!(agent_noun("bake"), "baker");
        assert_eq!(agent_noun("run"), "runner");
        assert_eq!(agent_noun("teach"), "teacher");
        assert_eq!(agent_noun("eat"), "eater");
    }

    #[test]
    fn test_doubling_rule() {
        assert!(doubles_final_consonant("run"));
        assert!(doubles_final_consonant("stop"));
        assert!(!doubles_final_consonant("fix"));
        assert!(!doubles_final_consonant("eat"));
        assert!(!doubles_final_consonant("visit"));
    }
}
