//! Fixed clean-up rules applied after slang substitution.
//!
//! Literal rewrites, applied in order. Not a grammar checker.

use once_cell::sync::Lazy;
use regex::Regex;

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // address terms read as a third person in parent English
        (r"(?i)\b(?:bro|bruh)\b", "he"),
        // typed article followed by a translation that starts with its own
        (r"(?i)\b(?:a|an)\s+(a|an)\b", "$1"),
        (r"\s+([,.!?;:])", "$1"),
        (r"\s{2,}", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Apply every rule in order, then trim and capitalize the first letter
pub fn clean_up(text: &str) -> String {
    let mut text = text.to_string();
    for (pattern, replacement) in RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    capitalize_first(text.trim())
}

fn capitalize_first(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, c)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&text[i + c.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bro_becomes_he() {
        assert_eq!(clean_up("bro said that's lying"), "He said that's lying");
        assert_eq!(clean_up("ok so Bruh left"), "Ok so he left");
        assert_eq!(clean_up("brother is home"), "Brother is home");
    }

    #[test]
    fn test_doubled_article_collapses_to_translation_article() {
        assert_eq!(
            clean_up("she had a a big improvement in appearance"),
            "She had a big improvement in appearance"
        );
        assert_eq!(clean_up("what a an exclamation"), "What an exclamation");
        assert_eq!(clean_up("A a devoted fan"), "A devoted fan");
    }

    #[test]
    fn test_articles_are_otherwise_untouched() {
        assert_eq!(clean_up("we need a user account"), "We need a user account");
        assert_eq!(clean_up("a honest take"), "A honest take");
        assert_eq!(clean_up("an apple and a banana"), "An apple and a banana");
    }

    #[test]
    fn test_spacing_and_punctuation() {
        assert_eq!(clean_up("  it was   mediocre, not very good .  "), "It was mediocre, not very good.");
        assert_eq!(clean_up("wow , ok !"), "Wow, ok!");
    }

    #[test]
    fn test_ellipsis_is_kept() {
        assert_eq!(clean_up("wait... that's lying bro"), "Wait... that's lying he");
        assert_eq!(clean_up("hmm?! ok"), "Hmm?! ok");
    }

    #[test]
    fn test_capitalize_skips_leading_symbols() {
        assert_eq!(clean_up("\"no lie\" he said"), "\"No lie\" he said");
        assert_eq!(clean_up("123"), "123");
        assert_eq!(clean_up(""), "");
    }
}
