use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::rules::PatternChain;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern is valid")
});

/// Most specific first: optional parentheses around the area code, then
/// separated triplets, then a bare ten-digit run.
static PHONE: Lazy<PatternChain> = Lazy::new(|| {
    PatternChain::new([
        r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        r"(?:\+?\d{1,3}[-.\s]?)?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
        r"(?:\+?\d{1,3}[-.\s]?)?\d{10}",
    ])
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.first_match(text).map(|s| s.trim().to_string()),
    }
}
