use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::catalog::ReferenceCatalog;
use crate::extraction::rules::PatternChain;
use crate::extraction::text::{context_window, term_regex};
use crate::models::resume::EducationEntry;

const EDUCATION_WINDOW: usize = 100;

const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

const CAPITALIZED_WORDS: &str = r"[A-Z][A-Za-z]*(?:[ \t]+[A-Z][A-Za-z]*)*";

/// "<keyword> of <Capitalized Words>" for every keyword, then
/// "<Capitalized Words> <keyword>" for every keyword.
static INSTITUTION: Lazy<PatternChain> = Lazy::new(|| {
    let of_form = INSTITUTION_KEYWORDS
        .iter()
        .map(|kw| format!(r"\b(?i:{kw}[ \t]+of)[ \t]+{CAPITALIZED_WORDS}"));
    let suffix_form = INSTITUTION_KEYWORDS
        .iter()
        .map(|kw| format!(r"\b{CAPITALIZED_WORDS}[ \t]+(?i:{kw})\b"));
    PatternChain::new(of_form.chain(suffix_form))
});

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern is valid"));

/// One entry per catalog degree present in the text, anchored at its first
/// occurrence.
pub fn extract_education(text: &str, catalog: &ReferenceCatalog) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    for degree in catalog.degrees() {
        let Some(re) = term_regex(degree) else {
            continue;
        };
        let Some(found) = re.find(text) else {
            continue;
        };
        let context = context_window(text, found.start(), found.end(), EDUCATION_WINDOW);
        let institution = INSTITUTION.first_match(&context).map(|s| s.trim().to_string());
        let year = YEAR.find(&context).map(|m| m.as_str().to_string());
        debug!("Degree {degree:?} matched (institution: {institution:?}, year: {year:?})");

        entries.push(EducationEntry {
            degree: degree.clone(),
            institution,
            year,
            context,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(degrees: &[&str]) -> ReferenceCatalog {
        ReferenceCatalog::new(Vec::<String>::new(), Vec::<String>::new(), degrees)
    }

    #[test]
    fn test_of_form_institution_and_year() {
        let text = "Education\nMaster of Science (MS), University of California Berkeley, 2016";
        let entries = extract_education(text, &catalog(&["master of science (ms)"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "master of science (ms)");
        assert_eq!(
            entries[0].institution.as_deref(),
            Some("University of California Berkeley")
        );
        assert_eq!(entries[0].year.as_deref(), Some("2016"));
    }

    #[test]
    fn test_suffix_form_institution() {
        let text = "Bachelor of Arts (BA)\nStanford University\nGraduated 2012";
        let entries = extract_education(text, &catalog(&["bachelor of arts (ba)"]));
        assert_eq!(entries[0].institution.as_deref(), Some("Stanford University"));
        assert_eq!(entries[0].year.as_deref(), Some("2012"));
    }

    #[test]
    fn test_of_form_checked_before_suffix_form() {
        let text = "PhD, Carnegie Mellon University; visiting at Institute of Science Tokyo";
        let entries = extract_education(text, &catalog(&["phd"]));
        assert_eq!(entries[0].institution.as_deref(), Some("Institute of Science Tokyo"));
    }

    #[test]
    fn test_missing_institution_and_year() {
        let text = "Completed an MBA remotely.";
        let entries = extract_education(text, &catalog(&["mba"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, None);
        assert_eq!(entries[0].year, None);
    }

    #[test]
    fn test_year_outside_range_is_ignored() {
        let text = "MBA, class of 1875, ref 12345, cohort 2101";
        let entries = extract_education(text, &catalog(&["mba"]));
        assert_eq!(entries[0].year, None);
    }

    #[test]
    fn test_degree_must_be_word_bounded() {
        let text = "Worked with MBAs and BAs.";
        assert!(extract_education(text, &catalog(&["mba", "ba"])).is_empty());
    }

    #[test]
    fn test_context_window_is_bounded() {
        let filler = "x".repeat(300);
        let text = format!("{filler} MBA {filler}");
        let entries = extract_education(&text, &catalog(&["mba"]));
        assert!(entries[0].context.chars().count() <= 100 + 3 + 100);
    }
}
