use once_cell::sync::Lazy;
use regex::Regex;

/// Names sit at the top of a resume; nothing past this many non-empty lines is inspected.
pub const NAME_SCAN_LINES: usize = 5;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}").expect("digit-run pattern is valid"));

pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(String::from)
}

fn looks_like_name(line: &str) -> bool {
    if line.contains('@') || DIGIT_RUN.is_match(line) || line.to_lowercase().contains("address") {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(1..=3).contains(&words.len()) {
        return false;
    }
    // Single-character tokens (initials, stray glyphs) don't count either way,
    // but at least one real word has to be present.
    let mut significant = words.iter().filter(|w| w.chars().count() > 1).peekable();
    significant.peek().is_some()
        && significant.all(|w| w.chars().next().is_some_and(char::is_uppercase))
}
