//! Text rendering and setup shared by the `gorgus` binary

use gorgus::{
    GorgusResult, Inspection, Lexicon, RuleMorphology, Translator, WordInspection, ipa,
    load_lexicon_from_file,
};
use std::path::Path;

/// Sections of the text report printed by `gorgus inspect`
///
/// The word table is always shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub morphology: bool,
    pub translation: bool,
    pub notes: bool,
    pub phonetics: bool,
}

impl ReportOptions {
    /// Every section switched on
    pub fn verbose() -> Self {
        Self {
            morphology: true,
            translation: true,
            notes: true,
            phonetics: true,
        }
    }
}

/// Build a translator over the rule backend
///
/// # Arguments
///
/// * `lexicon` - Lexicon JSON file replacing the built-in dictionary
///
/// # Errors
/// - The lexicon file cannot be read or is malformed
pub fn load_translator(lexicon: Option<&Path>) -> GorgusResult<Translator> {
    let lexicon = match lexicon {
        Some(path) => load_lexicon_from_file(path)?,
        None => Lexicon::builtin()?,
    };
    Translator::new(lexicon, Box::new(RuleMorphology::new()))
}

fn format_features(word: &WordInspection) -> String {
    if word.features.is_empty() {
        return "-".to_string();
    }
    word.features
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per word: surface form, lemma, part of speech and features
pub fn render_word_table(inspection: &Inspection) -> String {
    let header = ["Word", "Lemma", "POS", "Features"];
    let rows: Vec<[String; 4]> = inspection
        .words
        .iter()
        .map(|word| {
            [
                word.word.clone(),
                word.lemma.clone(),
                word.pos.clone(),
                format_features(word),
            ]
        })
        .collect();

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| -> String {
        format!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )
        .trim_end()
        .to_string()
    };

    let mut out = vec![line(header)];
    out.push(
        widths
            .iter()
            .map(|width| "─".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        out.push(line([&row[0], &row[1], &row[2], &row[3]]));
    }
    out.join("\n")
}

/// Full text report for `gorgus inspect`
pub fn render_report(inspection: &Inspection, options: &ReportOptions) -> String {
    let mut out = vec![
        format!("🔍 Inspecting: \"{}\"", inspection.input),
        String::new(),
        render_word_table(inspection),
    ];

    if options.morphology && !inspection.morphology.is_empty() {
        out.push(String::new());
        out.push("🧩 Morphology:".to_string());
        for line in &inspection.morphology {
            out.push(format!("   {}", line));
        }
    }
    if options.translation {
        out.push(String::new());
        out.push(format!("🌍 Translation: {}", inspection.translation));
    }
    if options.notes {
        out.push(String::new());
        out.push("📝 Notes:".to_string());
        for note in &inspection.notes {
            out.push(format!("   • {}", note));
        }
    }
    if options.phonetics {
        out.push(String::new());
        out.push(format!("🔊 Pronunciation: {}", ipa(&inspection.input)));
    }
    out.join("\n")
}
