//! Search Ranker: scores every record against a free-text query.
//!
//! A query found verbatim in a record's searchable text scores 100 and skips
//! fuzzy scoring entirely. Anything else gets a partial-ratio score, which is
//! capped below 100, and must beat `SEARCH_THRESHOLD` to be returned.

pub mod fuzzy;
pub mod handlers;

use serde::Serialize;

use crate::models::resume::ResumeRecord;

pub const EXACT_SCORE: u8 = 100;
pub const SEARCH_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub score: u8,
    pub record: ResumeRecord,
}

/// Lowercased concatenation of every extracted field (context windows and
/// unset values excluded) followed by the raw text.
pub fn searchable_text(record: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();
    parts.extend(record.name.as_deref());
    parts.extend(record.email.as_deref());
    parts.extend(record.phone.as_deref());
    parts.extend(record.skills.iter().map(String::as_str));
    for job in &record.jobs {
        parts.push(&job.title);
        parts.extend(job.company.as_deref());
        parts.extend(job.date_range.as_deref());
        parts.extend(job.responsibilities.iter().map(String::as_str));
    }
    for edu in &record.education {
        parts.push(&edu.degree);
        parts.extend(edu.institution.as_deref());
        parts.extend(edu.year.as_deref());
    }
    for project in &record.projects {
        parts.push(&project.title);
        parts.extend(project.description.iter().map(String::as_str));
    }
    parts.push(&record.raw_text);
    parts.join(" ").to_lowercase()
}

/// Score for an already-lowercased, non-empty query.
pub fn score(query: &str, record: &ResumeRecord) -> u8 {
    let text = searchable_text(record);
    if text.contains(query) {
        EXACT_SCORE
    } else {
        fuzzy::partial_ratio(query, &text)
    }
}

/// Records scoring above the threshold, best first. Equal scores keep store
/// order. A blank query returns everything at `EXACT_SCORE`.
pub fn search(query: &str, records: &[ResumeRecord]) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records
            .iter()
            .map(|r| SearchHit {
                score: EXACT_SCORE,
                record: r.clone(),
            })
            .collect();
    }

    let mut hits: Vec<SearchHit> = records
        .iter()
        .filter_map(|r| {
            let score = score(&query, r);
            (score > SEARCH_THRESHOLD).then(|| SearchHit {
                score,
                record: r.clone(),
            })
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}
