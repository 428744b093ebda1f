use clap::{Arg, ArgAction, ArgMatches, Command};
use gorgus::{Direction, SETTINGS_ENV, Settings, ipa, load_settings};
use gorgus_cli::{ReportOptions, load_translator, render_report};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let lexicon = Arg::new("lexicon")
        .long("lexicon")
        .short('l')
        .value_name("PATH")
        .help("Lexicon JSON file to use instead of the built-in dictionary");

    Command::new("gorgus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate between English and Gorgus")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("translate")
                .about("Translate a sentence")
                .arg(
                    Arg::new("input")
                        .help("Text to translate")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('o')
                        .help("Output language: gorgus or english")
                        .default_value("gorgus"),
                )
                .arg(
                    Arg::new("formal")
                        .long("formal")
                        .short('f')
                        .help("Add word-type suffixes to Gorgus output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-accents")
                        .long("no-accents")
                        .help("Strip pronunciation accents from the output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ipa")
                        .long("ipa")
                        .help("Show an IPA transcription of the Gorgus side")
                        .action(ArgAction::SetTrue),
                )
                .arg(lexicon.clone())
                .arg(
                    Arg::new("settings")
                        .long("settings")
                        .short('s')
                        .value_name("PATH")
                        .help("Settings JSON file (default: $GORGUS_SETTINGS)"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Explain a Gorgus sentence word by word")
                .arg(
                    Arg::new("sentence")
                        .help("Gorgus sentence to inspect")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the inspection as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("morph")
                        .long("morph")
                        .help("Show the morphology breakdown")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("translate")
                        .long("translate")
                        .help("Show the English translation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("notes")
                        .long("notes")
                        .help("Show grammar notes")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("phonetics")
                        .long("phonetics")
                        .help("Show an IPA transcription")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Show every section")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Write the inspection as pretty JSON to FILE"),
                )
                .arg(lexicon),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let result = match matches.subcommand() {
        Some(("translate", sub)) => run_translate(sub),
        Some(("inspect", sub)) => run_inspect(sub),
        _ => Err("no subcommand given".into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Settings from `--settings` or `$GORGUS_SETTINGS`, if either is given
fn settings_file(matches: &ArgMatches) -> Option<Settings> {
    let path = matches
        .get_one::<String>("settings")
        .map(PathBuf::from)
        .or_else(|| env::var_os(SETTINGS_ENV).map(PathBuf::from))?;
    Some(load_settings(&path))
}

fn lexicon_path(matches: &ArgMatches) -> Option<&Path> {
    matches.get_one::<String>("lexicon").map(Path::new)
}

fn run_translate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = matches.get_one::<String>("input") else {
        return Err("missing input".into());
    };
    let direction: Direction = matches
        .get_one::<String>("to")
        .map(String::as_str)
        .unwrap_or("gorgus")
        .parse()?;

    let settings = settings_file(matches);
    let defaults = settings.clone().unwrap_or_default();
    let formal = matches.get_flag("formal") || defaults.formal_gorgus;
    let accents = !matches.get_flag("no-accents") && defaults.add_pronounciation_accents;
    // show_ipa only counts when a settings file is in effect
    let show_ipa =
        matches.get_flag("ipa") || settings.as_ref().is_some_and(|settings| settings.show_ipa);

    let translator = load_translator(lexicon_path(matches))?;
    let translation = translator.translate(input, direction, formal, accents);
    println!("{}", translation);

    if show_ipa {
        let gorgus = match direction {
            Direction::ToConlang => translation.as_str(),
            Direction::ToNatural => input.as_str(),
        };
        println!("🔊 {}", ipa(gorgus));
    }
    Ok(())
}

fn run_inspect(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let Some(sentence) = matches.get_one::<String>("sentence") else {
        return Err("missing sentence".into());
    };

    let translator = load_translator(lexicon_path(matches))?;
    let (_, inspection) = translator.inspect(sentence);

    if let Some(output) = matches.get_one::<String>("output") {
        let json = serde_json::to_string_pretty(&inspection)?;
        fs::write(output, json)
            .map_err(|e| format!("Failed to write '{}': {}", output, e))?;
        println!("💾 Saved inspection to {}", output);
        return Ok(());
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    let options = if matches.get_flag("verbose") {
        ReportOptions::verbose()
    } else {
        ReportOptions {
            morphology: matches.get_flag("morph"),
            translation: matches.get_flag("translate"),
            notes: matches.get_flag("notes"),
            phonetics: matches.get_flag("phonetics"),
        }
    };
    println!("{}", render_report(&inspection, &options));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_translate_flags() {
        let matches = cli()
            .try_get_matches_from(["gorgus", "translate", "He slept.", "-f", "--ipa"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "translate");
        assert!(sub.get_flag("formal"));
        assert!(sub.get_flag("ipa"));
        assert_eq!(sub.get_one::<String>("to").unwrap(), "gorgus");
    }

    #[test]
    fn test_inspect_output_flag() {
        let matches = cli()
            .try_get_matches_from(["gorgus", "inspect", "Toopyat!", "-o", "out.json"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("output").unwrap(), "out.json");
    }
}
