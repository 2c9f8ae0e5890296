use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COMPANY_NOT_FOUND: &str = "Company name not found";
pub const DATE_NOT_FOUND: &str = "Date not found";
pub const INSTITUTION_NOT_FOUND: &str = "Institution name not found";

/// One parsed resume. Identity is `file_path`; the store never holds two
/// records for the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub file_path: PathBuf,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Title-cased, sorted, deduplicated.
    pub skills: Vec<String>,
    pub jobs: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    /// In-memory only. Records loaded from disk come back with an empty string.
    #[serde(skip)]
    pub raw_text: String,
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Name shown to the user: the extracted name, else the file stem title-cased.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        file_stem_title(&self.file_path)
    }
}

fn file_stem_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    /// Catalog spelling (lowercase).
    pub title: String,
    #[serde(with = "company_sentinel")]
    pub company: Option<String>,
    #[serde(with = "date_sentinel")]
    pub date_range: Option<String>,
    /// At most three bullet lines.
    pub responsibilities: Vec<String>,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(with = "institution_sentinel")]
    pub institution: Option<String>,
    /// Four digits in 1900..=2099 when present.
    pub year: Option<String>,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    /// At most three lines.
    pub description: Vec<String>,
}

// Persisted consumers expect a string in these slots, never null. `None`
// serializes to the sentinel and the sentinel reads back as `None`.
macro_rules! sentinel_field {
    ($module:ident, $sentinel:expr) => {
        mod $module {
            use serde::{Deserialize, Deserializer, Serializer};

            pub fn serialize<S: Serializer>(
                value: &Option<String>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(value.as_deref().unwrap_or($sentinel))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<String>, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.filter(|s| s != $sentinel && !s.is_empty()))
            }
        }
    };
}

sentinel_field!(company_sentinel, super::COMPANY_NOT_FOUND);
sentinel_field!(date_sentinel, super::DATE_NOT_FOUND);
sentinel_field!(institution_sentinel, super::INSTITUTION_NOT_FOUND);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job(company: Option<&str>) -> JobEntry {
        JobEntry {
            title: "software engineer".to_string(),
            company: company.map(String::from),
            date_range: None,
            responsibilities: vec![],
            context: "Software Engineer".to_string(),
        }
    }

    #[test]
    fn test_missing_company_serializes_as_sentinel() {
        let json = serde_json::to_value(sample_job(None)).unwrap();
        assert_eq!(json["company"], COMPANY_NOT_FOUND);
        assert_eq!(json["date_range"], DATE_NOT_FOUND);
    }

    #[test]
    fn test_sentinel_reads_back_as_none() {
        let json = serde_json::to_string(&sample_job(None)).unwrap();
        let back: JobEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.company, None);
        assert_eq!(back.date_range, None);
    }

    #[test]
    fn test_present_company_survives_round_trip() {
        let json = serde_json::to_string(&sample_job(Some("Acme Corp"))).unwrap();
        let back: JobEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_missing_institution_uses_sentinel_but_year_is_null() {
        let entry = EducationEntry {
            degree: "master of science".to_string(),
            institution: None,
            year: None,
            context: String::new(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["institution"], INSTITUTION_NOT_FOUND);
        assert!(json["year"].is_null());
    }

    #[test]
    fn test_display_name_falls_back_to_file_stem() {
        let record = ResumeRecord {
            file_path: PathBuf::from("/tmp/jane_doe-resume.pdf"),
            name: None,
            email: None,
            phone: None,
            skills: vec![],
            jobs: vec![],
            education: vec![],
            projects: vec![],
            raw_text: String::new(),
            created_at: Utc::now(),
        };
        assert_eq!(record.display_name(), "Jane Doe Resume");
    }

    #[test]
    fn test_capitalize_lowers_tail() {
        assert_eq!(capitalize("sQL"), "Sql");
        assert_eq!(capitalize("c++"), "C++");
        assert_eq!(capitalize(""), "");
    }
}
