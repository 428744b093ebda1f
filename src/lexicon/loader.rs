use crate::error::{GorgusError, GorgusResult};
use crate::features::FeatureValue;
use crate::lexicon::Lexicon;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::info;

/// Raw lexicon source as stored on disk
///
/// The file has the following structure:
/// ```json
/// {
///     "dictionary": { "<PLURAL>": "ik", "dink": ["hello", "hi"], "fren": "dog" },
///     "phrases": { "h'orpó": "i love" },
///     "ignored_plurals": ["you", "it"],
///     "ignored_agent_nouns": ["water"],
///     "word_features": { "my": { "possessive": "my", "person": 1 } },
///     "modifier_info": { "ik": "plural" },
///     "informal_words": ["zorper"],
///     "usage_notes": { "forp": "romantic" }
/// }
/// ```
///
/// Dictionary and phrase values may be a single string or a list of strings.
/// Only `dictionary` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconSource {
    pub dictionary: Map<String, Value>,
    #[serde(default)]
    pub phrases: Map<String, Value>,
    #[serde(default)]
    pub ignored_plurals: Vec<String>,
    #[serde(default)]
    pub ignored_agent_nouns: Vec<String>,
    #[serde(default)]
    pub word_features: HashMap<String, BTreeMap<String, FeatureValue>>,
    #[serde(default)]
    pub modifier_info: HashMap<String, String>,
    #[serde(default)]
    pub informal_words: Vec<String>,
    #[serde(default)]
    pub usage_notes: HashMap<String, String>,
}

/// Resolve a "string or list of strings" value into a non-empty list
///
/// # Arguments
/// * `key` - The entry the value belongs to (used in error messages)
/// * `value` - The raw JSON value
///
/// # Errors
/// - The value is neither a string nor a list
/// - The list is empty or holds a non-string item
pub fn normalize_glosses(key: &str, value: &Value) -> GorgusResult<Vec<String>> {
    let glosses = match value {
        Value::String(gloss) => vec![gloss.clone()],
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    GorgusError::LexiconFormat(format!(
                        "gloss list for '{}' contains a non-string value",
                        key
                    ))
                })
            })
            .collect::<GorgusResult<Vec<_>>>()?,
        _ => {
            return Err(GorgusError::LexiconFormat(format!(
                "value for '{}' must be a string or a list of strings",
                key
            )));
        }
    };

    if glosses.is_empty() {
        return Err(GorgusError::LexiconFormat(format!(
            "gloss list for '{}' is empty",
            key
        )));
    }

    Ok(glosses)
}

/// Parse a lexicon from JSON text
///
/// # Errors
/// - Invalid JSON or a missing `dictionary` object
/// - Malformed gloss values or missing morpheme slots
pub fn parse_lexicon(json: &str) -> GorgusResult<Lexicon> {
    let source: LexiconSource = serde_json::from_str(json)
        .map_err(|e| GorgusError::LexiconFormat(format!("invalid lexicon JSON: {}", e)))?;
    Lexicon::from_source(source)
}

/// Load a lexicon from a JSON file
///
/// # Arguments
/// * `path` - Path to the lexicon JSON file
///
/// # Errors
/// - File read errors
/// - Everything [`parse_lexicon`] rejects
pub fn load_lexicon_from_file(path: &Path) -> GorgusResult<Lexicon> {
    let content = fs::read_to_string(path)
        .map_err(|e| GorgusError::Io(format!("Failed to read '{}': {}", path.display(), e)))?;

    let lexicon = parse_lexicon(&content)?;
    info!(
        path = %path.display(),
        entries = lexicon.len(),
        "loaded lexicon"
    );
    Ok(lexicon)
}
