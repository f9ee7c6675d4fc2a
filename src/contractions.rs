//! English contractions expansion
//!
//! Runs ahead of the TN tagger so that what the tagger sees is already
//! spelled-out ("do not" rather than "don't"); grounded in the teacher's
//! own pass over the same Python `contractions` package, but with the
//! source rules embedded directly as Rust tuples instead of `include_str!`
//! JSON files, since the pack this crate was built from never shipped the
//! JSON data files the teacher's `include_str!` paths pointed at. The
//! tables below are a curated subset of the package's standard
//! contractions, leftovers, and slang, not the full ~250-entry set; noted
//! in DESIGN.md as a documented simplification.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Standard contractions ("don't" -> "do not").
const STANDARD: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("i'll", "I will"),
    ("i'd", "I would"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("you'll", "you will"),
    ("you'd", "you would"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("we'll", "we will"),
    ("we'd", "we would"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("they'll", "they will"),
    ("they'd", "they would"),
    ("let's", "let us"),
];

/// Leftover suffixes `contractions.fix` cleans up after the standard pass.
const LEFTOVERS: &[(&str, &str)] = &[
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("n't", " not"),
];

/// Slang contractions ("gonna" -> "going to").
const SLANG: &[(&str, &str)] = &[
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
    ("dunno", "do not know"),
    ("gimme", "give me"),
    ("lemme", "let me"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("outta", "out of"),
    ("ain't", "is not"),
];

/// Month abbreviations (added dynamically like Python version)
const MONTH_ABBREVS: &[(&str, &str)] = &[
    ("jan.", "january"),
    ("feb.", "february"),
    ("mar.", "march"),
    ("apr.", "april"),
    ("jun.", "june"),
    ("jul.", "july"),
    ("aug.", "august"),
    ("sep.", "september"),
    ("oct.", "october"),
    ("nov.", "november"),
    ("dec.", "december"),
];

/// Whole-word contractions mapping: `STANDARD`, `SLANG`, and
/// `MONTH_ABBREVS` merged, plus curly-apostrophe (U+2019) variants of every
/// entry that uses a straight apostrophe.
static CONTRACTIONS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for (k, v) in STANDARD.iter().chain(SLANG.iter()).chain(MONTH_ABBREVS.iter()) {
        map.insert(k.to_lowercase(), v.to_string());
    }

    let variants: Vec<(String, String)> = map
        .iter()
        .filter(|(k, _)| k.contains('\''))
        .map(|(k, v)| (k.replace('\'', "\u{2019}"), v.clone()))
        .collect();

    for (k, v) in variants {
        map.entry(k).or_insert(v);
    }

    map
});

/// Compiled regex patterns for efficient replacement: whole-word matches
/// from `CONTRACTIONS` first (word-bounded both sides, or left-bounded only
/// for month abbreviations ending in `.`), then `LEFTOVERS`' bare suffixes
/// (no leading boundary, since they attach directly onto a preceding word).
static PATTERNS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let whole_word = CONTRACTIONS.iter().filter_map(|(contraction, expansion)| {
        let escaped = regex::escape(contraction);
        let pattern = if contraction.ends_with('.') {
            format!(r"(?i)\b{escaped}")
        } else {
            format!(r"(?i)\b{escaped}\b")
        };
        Regex::new(&pattern).ok().map(|re| (re, expansion.clone()))
    });

    let leftovers = LEFTOVERS.iter().filter_map(|(suffix, expansion)| {
        let escaped = regex::escape(suffix);
        Regex::new(&format!(r"(?i){escaped}\b"))
            .ok()
            .map(|re| (re, expansion.to_string()))
    });

    whole_word.chain(leftovers).collect()
});

/// Expand English contractions in text
///
/// This function is equivalent to Python's `contractions.fix(text)`.
/// It handles standard contractions, leftovers, and slang.
///
/// # Arguments
/// * `text` - Input text with potential contractions
///
/// # Returns
/// Text with contractions expanded
///
/// # Example
/// ```rust,ignore
/// use wetext_rs::contractions::fix_contractions;
///
/// assert_eq!(fix_contractions("I don't know"), "I do not know");
/// assert_eq!(fix_contractions("It's gonna be fine"), "It is going to be fine");
/// assert_eq!(fix_contractions("Jan. 15th"), "january 15th");
/// ```
pub fn fix_contractions(text: &str) -> String {
    // Quick check: if no apostrophe-like chars and no known patterns, skip
    // Check for both straight apostrophe (') and curly apostrophe (')
    if !text.contains('\'') && !text.contains('\u{2019}') && !needs_expansion(text) {
        return text.to_string();
    }

    let mut result = text.to_string();

    for (pattern, expansion) in PATTERNS.iter() {
        result = pattern.replace_all(&result, expansion.as_str()).to_string();
    }

    result
}

/// Quick check for common patterns that need expansion (optimization)
fn needs_expansion(text: &str) -> bool {
    let lower = text.to_lowercase();
    // Check for common slang that doesn't contain apostrophes
    lower.contains("gonna")
        || lower.contains("wanna")
        || lower.contains("gotta")
        || lower.contains("dunno")
        || lower.contains("gimme")
        || lower.contains("lemme")
        // Check for month abbreviations
        || lower.contains("jan.")
        || lower.contains("feb.")
        || lower.contains("mar.")
        || lower.contains("apr.")
        || lower.contains("jun.")
        || lower.contains("jul.")
        || lower.contains("aug.")
        || lower.contains("sep.")
        || lower.contains("oct.")
        || lower.contains("nov.")
        || lower.contains("dec.")
}

/// Expand contractions with configuration options
///
/// # Arguments
/// * `text` - Input text
/// * `_include_slang` - Whether to expand slang (default: true in Python)
///
/// Note: For simplicity, this implementation always includes slang.
/// If you need the option to exclude slang, rebuild PATTERNS without slang entries.
#[allow(dead_code)]
pub fn fix_contractions_with_options(text: &str, _include_slang: bool) -> String {
    // Current implementation always includes slang for simplicity
    // To support this option properly, would need separate pattern sets
    fix_contractions(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_contractions() {
        assert_eq!(fix_contractions("I don't know"), "I do not know");
        // Note: regex replacement outputs lowercase expansion
        assert_eq!(fix_contractions("It's fine"), "it is fine");
        assert_eq!(fix_contractions("we're here"), "we are here");
    }

    #[test]
    fn test_slang() {
        // "I'm" is mapped to "I am" (preserves case in JSON)
        assert_eq!(fix_contractions("I'm gonna go"), "I am going to go");
        assert_eq!(fix_contractions("I wanna eat"), "I want to eat");
        assert_eq!(fix_contractions("I gotta leave"), "I got to leave");
    }

    #[test]
    fn test_month_abbreviations() {
        assert_eq!(fix_contractions("jan. 15"), "january 15");
        assert_eq!(fix_contractions("dec. 25"), "december 25");
    }

    #[test]
    fn test_curly_apostrophe() {
        // Test both straight and curly apostrophes
        assert_eq!(fix_contractions("don't"), "do not");
        assert_eq!(fix_contractions("don't"), "do not"); // curly apostrophe
    }

    #[test]
    fn test_no_contractions() {
        assert_eq!(fix_contractions("Hello world"), "Hello world");
        assert_eq!(
            fix_contractions("No contractions here"),
            "No contractions here"
        );
    }

    #[test]
    fn test_case_insensitive() {
        // Regex case-insensitive matching replaces with lowercase expansion
        assert_eq!(fix_contractions("DON'T SHOUT"), "do not SHOUT");
        assert_eq!(fix_contractions("It's OK"), "it is OK");
    }
}
