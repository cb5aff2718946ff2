//! Best-effort parser for the generative model's labeled answer.
//!
//! Expected shape:
//!
//! ```text
//! Teen phrase: ...
//! Parent translation: ...
//! Context: ...
//! Example in use:
//! Teen: "..."
//! Parent: "..."
//! ```
//!
//! Labeled lines are tried first, then loose line guessing, then a placeholder.

use once_cell::sync::Lazy;
use regex::Regex;

/// Context used when the answer carries none
pub const DEFAULT_AI_CONTEXT: &str = "AI translation provided";

static TRANSLATION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:parent\s+)?translation\s*:\s*(.*)$").unwrap());
static CONTEXT_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^context\s*:\s*(.*)$").unwrap());
static PARENT_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^parent\s*:\s*(.*)$").unwrap());

static LOOSE_TRANSLATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*(?:translation|means)\s*:\s*").unwrap());
static LOOSE_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^.*context\s*:\s*").unwrap());
static LOOSE_USED_TO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^.*?used to\s*").unwrap());

/// Structured result of a generative translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeTranslation {
    pub translation: String,
    pub context: String,
    pub example: String,
}

/// Parse a free-text model answer
pub fn parse_generative_response(text: &str) -> GenerativeTranslation {
    let lines: Vec<String> = text
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect();

    let mut translation = String::new();
    let mut context = String::new();
    let mut example = String::new();

    for line in &lines {
        if let Some(caps) = TRANSLATION_LABEL.captures(line) {
            if translation.is_empty() {
                translation = caps[1].trim().to_string();
            }
        } else if let Some(caps) = CONTEXT_LABEL.captures(line) {
            if context.is_empty() {
                context = caps[1].trim().to_string();
            }
        } else if let Some(caps) = PARENT_LABEL.captures(line) {
            if example.is_empty() {
                example = caps[1].replace('"', "").trim().to_string();
            }
        }
    }

    if translation.is_empty() {
        translation = guess_translation(&lines);
    }
    if context.is_empty() {
        context = guess_context(&lines);
    }

    GenerativeTranslation {
        translation,
        context,
        example,
    }
}

/// Trim whitespace and markdown emphasis/bullets around a line
fn clean_line(line: &str) -> String {
    line.replace("**", "")
        .trim()
        .trim_start_matches(&['-', '*', '•'][..])
        .trim()
        .to_string()
}

fn guess_translation(lines: &[String]) -> String {
    let lower_has = |line: &&String, pat: &str| line.to_lowercase().contains(pat);
    let line = lines
        .iter()
        .find(|line| lower_has(line, "translation:") || lower_has(line, "means:"))
        .or_else(|| lines.first());

    match line {
        Some(line) => LOOSE_TRANSLATION.replace(line, "").trim().to_string(),
        None => String::new(),
    }
}

fn guess_context(lines: &[String]) -> String {
    if let Some(line) = lines.iter().find(|l| l.to_lowercase().contains("context:")) {
        return LOOSE_CONTEXT.replace(line, "").trim().to_string();
    }
    if let Some(line) = lines.iter().find(|l| l.to_lowercase().contains("used to")) {
        return LOOSE_USED_TO.replace(line, "Used to ").trim().to_string();
    }
    DEFAULT_AI_CONTEXT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_answer() {
        let text = "Teen phrase: it's giving main character\n\
                    Parent translation: It feels like they are the star of the show.\n\
                    Context: Used playfully when someone stands out.\n\
                    Example in use:\n\
                    Teen: \"Her outfit? It's giving main character.\"\n\
                    Parent: \"Her outfit makes her look like the star.\"";

        let parsed = parse_generative_response(text);
        assert_eq!(parsed.translation, "It feels like they are the star of the show.");
        assert_eq!(parsed.context, "Used playfully when someone stands out.");
        assert_eq!(parsed.example, "Her outfit makes her look like the star.");
    }

    #[test]
    fn test_markdown_labels() {
        let text = "**Parent translation:** Leave now\n- **Context:** Urgent\n**Parent:** \"We should go\"";
        let parsed = parse_generative_response(text);
        assert_eq!(parsed.translation, "Leave now");
        assert_eq!(parsed.context, "Urgent");
        assert_eq!(parsed.example, "We should go");
    }

    #[test]
    fn test_first_parent_line_wins() {
        let text = "Translation: hi\nParent: \"one\"\nParent: \"two\"";
        assert_eq!(parse_generative_response(text).example, "one");
    }

    #[test]
    fn test_loose_translation_and_used_to() {
        let text = "So basically it means: really good\nIt is used to praise food.";
        let parsed = parse_generative_response(text);
        assert_eq!(parsed.translation, "really good");
        assert_eq!(parsed.context, "Used to praise food.");
        assert_eq!(parsed.example, "");
    }

    #[test]
    fn test_unlabeled_answer_uses_first_line_and_default_context() {
        let parsed = parse_generative_response("\n  That sounds great  \nanother line");
        assert_eq!(parsed.translation, "That sounds great");
        assert_eq!(parsed.context, DEFAULT_AI_CONTEXT);
    }

    #[test]
    fn test_empty_answer() {
        let parsed = parse_generative_response("   ");
        assert_eq!(parsed.translation, "");
        assert_eq!(parsed.context, DEFAULT_AI_CONTEXT);
    }
}
