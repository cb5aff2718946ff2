//! Teenspeak Control - translate teen slang from the command line.

mod history;
mod output;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teenspeak::Translator;
use teenspeak_common::TeenspeakConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::history::{History, HistoryItem};

#[derive(Parser)]
#[command(name = "teenspeakctl")]
#[command(about = "Translate teen slang into parent-friendly English", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a phrase
    Translate {
        /// Phrase to translate
        #[arg(required = true)]
        phrase: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Do not record this translation in history
        #[arg(long)]
        no_history: bool,
    },

    /// Look up one or more terms
    Lookup {
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Search the local dictionary
    Search { query: String },

    /// Show the word of the day
    Word {
        /// Date to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show recent translations
    History {
        /// Forget all recorded translations
        #[arg(long)]
        clear: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TEENSPEAK_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_history(config: &TeenspeakConfig) -> Result<History> {
    let path = History::default_path().context("No data directory available for history")?;
    Ok(History::open(path, config.history.limit))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TeenspeakConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Translate {
            phrase,
            json,
            no_history,
        } => {
            let translator = Translator::from_config(&config)?;
            let phrase = phrase.join(" ");
            let outcome = translator.translate(&phrase).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                output::display_outcome(&phrase, &outcome);
            }

            if !no_history {
                let mut history = open_history(&config)?;
                history.record(HistoryItem::new(&phrase, &outcome));
                if let Err(e) = history.save() {
                    output::display_error(&format!("{:#}", e));
                } else {
                    debug!("History saved to {}", history.path().display());
                }
            }
        }
        Commands::Lookup { terms } => {
            let translator = Translator::from_config(&config)?;
            let results = translator.resolve_many(&terms).await;
            output::display_lookups(&results);
        }
        Commands::Search { query } => {
            let translator = Translator::from_config(&config)?;
            output::display_entries(&translator.search(&query));
        }
        Commands::Word { date } => {
            let translator = Translator::from_config(&config)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            match translator.word_of_the_day(date) {
                Some(entry) => {
                    println!("Word of the day ({}):", date);
                    output::display_entry(&entry);
                }
                None => output::display_error("The dictionary is empty"),
            }
        }
        Commands::History { clear } => {
            let mut history = open_history(&config)?;
            if clear {
                history.clear();
                history.save()?;
                println!("History cleared.");
            } else {
                output::display_history(history.items());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_translate_joins_words() {
        let cli = Cli::try_parse_from(["teenspeakctl", "translate", "no", "cap", "--json"]).unwrap();
        match cli.command {
            Commands::Translate { phrase, json, no_history } => {
                assert_eq!(phrase.join(" "), "no cap");
                assert!(json);
                assert!(!no_history);
            }
            _ => panic!("expected translate"),
        }
    }

    #[test]
    fn test_word_date_parses() {
        let cli = Cli::try_parse_from(["teenspeakctl", "word", "--date", "2026-10-18"]).unwrap();
        match cli.command {
            Commands::Word { date } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 18));
            }
            _ => panic!("expected word"),
        }
    }

    #[test]
    fn test_translate_requires_phrase() {
        assert!(Cli::try_parse_from(["teenspeakctl", "translate"]).is_err());
    }
}
