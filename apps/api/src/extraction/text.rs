//! Text primitives shared by the field extractors: catalog-term matching,
//! context windows, labeled-section location and bullet handling.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

pub const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Known section names; a line holding only one of these ends the previous section.
const SECTION_NAMES: &[&str] = &[
    "summary",
    "profile",
    "objective",
    "about me",
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "education",
    "skills",
    "technical skills",
    "expertise",
    "competencies",
    "proficiencies",
    "technologies",
    "projects",
    "key projects",
    "professional projects",
    "portfolio",
    "project work",
    "certifications",
    "awards",
    "achievements",
    "publications",
    "languages",
    "interests",
    "volunteer",
    "references",
    "contact",
];

/// A header line: a known section name, an ALL-CAPS line, or a short
/// capitalized line ending in a colon.
static NEXT_HEADER: Lazy<Regex> = Lazy::new(|| {
    let names = SECTION_NAMES
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:(?i:{names})[ \t]*:?|[A-Z][A-Z&/ ]{{2,}}:?|[A-Z][A-Za-z&/ ]{{0,40}}:)[ \t]*$"
    ))
    .expect("section header pattern is valid")
});

/// Compiles a case-insensitive matcher for a catalog term. Word boundaries are
/// only asserted on edges where the term itself starts or ends with a word
/// character, so terms like `c++` or `bachelor of science (bs)` still match.
pub fn term_regex(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let lead = if term.starts_with(is_word_char) { r"\b" } else { "" };
    let trail = if term.ends_with(is_word_char) { r"\b" } else { "" };
    let pattern = format!("(?i){lead}{}{trail}", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping catalog term {term:?}: {e}");
            None
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the trimmed slice of `text` spanning `radius` characters either side
/// of the byte range `start..end`.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let from = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    text[from..to].trim().to_string()
}

/// Finds the first header from `headers` (in priority order) that opens a line,
/// and returns the text after it up to the next header line. Without a next
/// header the section is capped at `cap_chars` characters.
pub fn locate_section<'a>(text: &'a str, headers: &[&str], cap_chars: usize) -> Option<&'a str> {
    for header in headers {
        let pattern = format!(r"(?im)^[ \t]*{}[ \t]*:?", regex::escape(header));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        let Some(found) = re.find(text) else {
            continue;
        };
        let start = found.end();
        let end = match NEXT_HEADER.find_at(text, start) {
            // A header match at `start` is the remainder of the label line itself.
            Some(next) if next.start() > start => next.start(),
            _ => text[start..]
                .char_indices()
                .nth(cap_chars)
                .map(|(i, _)| start + i)
                .unwrap_or(text.len()),
        };
        return Some(&text[start..end]);
    }
    None
}

pub fn is_bulleted(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_GLYPHS)
}

/// Strips leading bullet glyphs and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLET_GLYPHS.contains(&c) || c.is_whitespace())
        .trim_end()
}
