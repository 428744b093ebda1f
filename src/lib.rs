//! Rule-based translation between English and Gorgus
//!
//! Gorgus is a constructed language with a dictionary of roots and a small set
//! of affixes for plurality, agent nouns, tense and intensity. Translation is
//! word by word: English words are reduced to their base form, looked up in the
//! lexicon and re-inflected with Gorgus morphemes; Gorgus words are stripped of
//! their affixes, looked up, and the English gloss is inflected back.
//!
//! # Example
//!
//! ```ignore
//! use gorgus::{Direction, Translator};
//!
//! let translator = Translator::builtin()?;
//! assert_eq!(
//!     translator.translate("Hi! How are you?", Direction::ToConlang, false, true),
//!     "Dink! Dup pritterok lunk"
//! );
//!
//! let (english, inspection) = translator.inspect("Henġer agger ikfren!");
//! assert_eq!(english, "Me love dogs!");
//! for line in &inspection.morphology {
//!     println!("{}", line);
//! }
//! ```

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod features;
pub mod inspection;
pub mod ipa;
pub mod lexicon;
pub mod morphology;
pub mod phrases;
pub mod postprocess;
pub mod token;
pub mod translator;


pub use config::{LEXICON_ENV, SETTINGS_ENV, Settings, load_settings, save_settings};
pub use error::{GorgusError, GorgusResult};
pub use features::{FeatureValue, Intensity, Tense};
pub use inspection::{Inspection, WordInspection};
pub use ipa::ipa;
pub use lexicon::{Lexicon, LexiconEntry, LexiconSource, load_lexicon_from_file};
pub use morphology::{CoarsePos, MockMorphology, Morphology, RuleMorphology};
pub use translator::{Direction, Translator};
