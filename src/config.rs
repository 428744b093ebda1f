//! Translator settings (JSON)

use crate::error::{GorgusError, GorgusResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Environment variable pointing at a settings file
pub const SETTINGS_ENV: &str = "GORGUS_SETTINGS";
/// Environment variable pointing at a lexicon file that replaces the built-in one
pub const LEXICON_ENV: &str = "GORGUS_LEXICON";

/// User-facing translation settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Append formal word-type suffixes when encoding
    #[serde(default = "default_formal_gorgus")]
    pub formal_gorgus: bool,
    /// Keep pronunciation diacritics in the output
    #[serde(default = "default_add_pronounciation_accents")]
    pub add_pronounciation_accents: bool,
    /// Show an IPA transcription next to Gorgus output
    #[serde(default = "default_show_ipa")]
    pub show_ipa: bool,
}

fn default_formal_gorgus() -> bool {
    false
}

fn default_add_pronounciation_accents() -> bool {
    true
}

fn default_show_ipa() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            formal_gorgus: default_formal_gorgus(),
            add_pronounciation_accents: default_add_pronounciation_accents(),
            show_ipa: default_show_ipa(),
        }
    }
}

/// Load settings (defaults when the file is missing or unparsable)
pub fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings not readable, using defaults");
            return Settings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings not parsable, using defaults");
            Settings::default()
        }
    }
}

/// Save settings as pretty JSON, creating parent directories
pub fn save_settings(path: &Path, settings: &Settings) -> GorgusResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GorgusError::Io(format!("Failed to create '{}': {}", parent.display(), e))
        })?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| GorgusError::Settings(format!("serialization failed: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| GorgusError::Io(format!("Failed to write '{}': {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.formal_gorgus);
        assert!(settings.add_pronounciation_accents);
        assert!(settings.show_ipa);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"formal_gorgus": true}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.formal_gorgus);
        assert!(settings.add_pronounciation_accents);
        assert!(settings.show_ipa);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = load_settings(Path::new("/nonexistent/gorgus/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("gorgus-settings-{}", std::process::id()));
        let path = dir.join("nested").join("settings.json");
        let settings = Settings {
            formal_gorgus: true,
            add_pronounciation_accents: false,
            show_ipa: false,
        };

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path), settings);

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_settings(&path), Settings::default());

        fs::remove_dir_all(&dir).ok();
    }
}
