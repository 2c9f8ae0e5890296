use once_cell::sync::Lazy;
use tracing::debug;

use crate::catalog::ReferenceCatalog;
use crate::extraction::rules::PatternChain;
use crate::extraction::text::{context_window, is_bulleted, strip_bullet, term_regex};
use crate::models::resume::JobEntry;

const JOB_WINDOW: usize = 150;
const MAX_RESPONSIBILITIES: usize = 3;
const MIN_RESPONSIBILITY_CHARS: usize = 10;

const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

static DATE_RANGE: Lazy<PatternChain> = Lazy::new(|| {
    PatternChain::new([
        format!(r"(?i)\b{MONTH}[ \t]+\d{{4}}\s*[-–—]+\s*(?:{MONTH}[ \t]+\d{{4}}\b|present\b)"),
        r"\b\d{4}\s*[-–—]+\s*\d{4}\b".to_string(),
        r"(?i)\b\d{4}\s*[-–—]+\s*present\b".to_string(),
    ])
});

const WORD_INDICATORS: &[&str] = &["at", "with", "for"];
const SYMBOL_INDICATORS: &[&str] = &["-", "|", ","];

/// A run of capitalized words on one line, e.g. `Acme Corp` or `Globex & Co.`.
const COMPANY: &str = r"[A-Z][A-Za-z0-9&.]*(?:[ \t]+[A-Z0-9&][A-Za-z0-9&.]*)*";

/// Builds the company chain for one title: "<title> <indicator> <Company>" for
/// every indicator first, then "<Company> <indicator> <title>".
fn company_chain(title: &str) -> PatternChain {
    let title = regex::escape(title);
    let separators: Vec<String> = WORD_INDICATORS
        .iter()
        .map(|w| format!(r"[ \t]+(?i:{w})[ \t]+"))
        .chain(
            SYMBOL_INDICATORS
                .iter()
                .map(|s| format!(r"[ \t]*{}[ \t]*", regex::escape(s))),
        )
        .collect();

    let after = separators
        .iter()
        .map(|sep| format!(r"(?i:{title}){sep}({COMPANY})"));
    let before = separators
        .iter()
        .map(|sep| format!(r"({COMPANY}){sep}(?i:{title})\b"));
    PatternChain::new(after.chain(before).collect::<Vec<_>>())
}

/// One entry per occurrence of every catalog job title.
pub fn extract_jobs(text: &str, catalog: &ReferenceCatalog) -> Vec<JobEntry> {
    let mut jobs = Vec::new();
    for title in catalog.job_titles() {
        let Some(re) = term_regex(title) else {
            continue;
        };
        let mut occurrences = re.find_iter(text).peekable();
        if occurrences.peek().is_none() {
            continue;
        }
        let companies = company_chain(title);

        for found in occurrences {
            let context = context_window(text, found.start(), found.end(), JOB_WINDOW);
            let date_range = DATE_RANGE.first_match(&context).map(|s| s.trim().to_string());
            let company = companies
                .first_match(&context)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            let responsibilities = responsibilities(&context);
            debug!("Job title {title:?} matched (company: {company:?}, dates: {date_range:?})");

            jobs.push(JobEntry {
                title: title.clone(),
                company,
                date_range,
                responsibilities,
                context,
            });
        }
    }
    jobs
}

fn responsibilities(context: &str) -> Vec<String> {
    context
        .lines()
        .filter(|line| is_bulleted(line))
        .map(strip_bullet)
        .filter(|line| line.chars().count() > MIN_RESPONSIBILITY_CHARS)
        .take(MAX_RESPONSIBILITIES)
        .map(String::from)
        .collect()
}
