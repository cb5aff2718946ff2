//! Terminal output for translations and dictionary entries.

use owo_colors::OwoColorize;
use teenspeak::resolver::LookupResult;
use teenspeak_common::{SlangEntry, SourceLabel, TranslationOutcome};

use crate::history::HistoryItem;

const THIN_SEPARATOR: &str = "----------------------------------------";

/// Display a phrase translation
pub fn display_outcome(original: &str, outcome: &TranslationOutcome) {
    println!();
    println!("{} {}", "Teen:".dimmed(), original.trim());

    if outcome.is_error() {
        println!("{}", outcome.translated_text.bright_red());
        println!("{} {}", "[HINT]".yellow(), outcome.tone_label);
        println!();
        return;
    }

    println!("{} {}", "Parent:".dimmed(), outcome.translated_text.bright_green());
    println!();
    println!("  Tone:    {}", outcome.tone_label);
    println!("  Source:  {}", source_colored(outcome.source_label));

    if !outcome.matched_entries.is_empty() && outcome.source_label != SourceLabel::GenerativeAi {
        println!();
        println!("[TERMS]");
        for entry in &outcome.matched_entries {
            println!("  * {} = {}", entry.term.cyan(), entry.translation);
        }
    }

    if !outcome.example_text.is_empty() {
        println!();
        println!("{} {}", "Example:".dimmed(), outcome.example_text);
    }
    println!();
}

fn source_colored(label: SourceLabel) -> String {
    match label {
        SourceLabel::LocalDictionary => label.as_str().green().to_string(),
        SourceLabel::ExternalDictionary => label.as_str().cyan().to_string(),
        SourceLabel::GenerativeAi => label.as_str().magenta().to_string(),
        SourceLabel::Error => label.as_str().red().to_string(),
    }
}

/// Display a single dictionary entry
pub fn display_entry(entry: &SlangEntry) {
    println!("{} ({}, {})", entry.term.bold(), entry.context, entry.source);
    println!("  {}", entry.translation);
    if !entry.example.is_empty() {
        println!("  {} {}", "e.g.".dimmed(), entry.example);
    }
}

/// Display batch lookup results
pub fn display_lookups(results: &[LookupResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("{}", THIN_SEPARATOR.dimmed());
        }
        match &result.entry {
            Some(entry) => display_entry(entry),
            None => println!("{} {}", result.term.bold(), "(no definition found)".dimmed()),
        }
    }
}

/// Display search hits
pub fn display_entries(entries: &[SlangEntry]) {
    if entries.is_empty() {
        println!("{}", "No matching slang.".dimmed());
        return;
    }
    for entry in entries {
        println!("  * {} = {}", entry.term.cyan(), entry.translation);
    }
}

/// Display history, newest first
pub fn display_history(items: &[HistoryItem]) {
    if items.is_empty() {
        println!("{}", "No translations yet.".dimmed());
        return;
    }
    for item in items {
        println!(
            "{}  {}",
            item.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            item.original.bold()
        );
        println!("  -> {}", item.translation);
        println!("  {} | {}", item.tone.dimmed(), item.source.as_str().dimmed());
    }
}

/// Display an error
pub fn display_error(message: &str) {
    eprintln!();
    eprintln!("[ERROR] {}", message.red());
    eprintln!();
}
