//! Reference Catalog: the known skills, job titles and degrees that every
//! extractor matches against. Loaded once at startup, read-only afterwards.
//!
//! An empty catalog is valid: extractors simply find nothing.

pub mod defaults;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

pub use defaults::bootstrap_defaults;

pub const SKILLS_FILE: &str = "skills.csv";
pub const JOB_TITLES_FILE: &str = "job_titles.csv";
pub const DEGREES_FILE: &str = "education_degrees.csv";

pub const SKILL_OVERRIDE_FILE: &str = "skills.txt";
pub const EDUCATION_OVERRIDE_FILE: &str = "education.txt";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read reference source {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Reference source {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCatalog {
    skills: Vec<String>,
    job_titles: Vec<String>,
    degrees: Vec<String>,
}

impl ReferenceCatalog {
    /// Lowercases, trims and deduplicates each list, keeping first-seen order.
    pub fn new<I, J, K>(skills: I, job_titles: J, degrees: K) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            skills: normalize(skills),
            job_titles: normalize(job_titles),
            degrees: normalize(degrees),
        }
    }

    /// Reads `skills.csv` (`Skill`), `job_titles.csv` (`Title`) and
    /// `education_degrees.csv` (`Degree`) from `dir`. A missing file yields an
    /// empty list for that category.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::new(
            read_column(&dir.join(SKILLS_FILE), "Skill")?,
            read_column(&dir.join(JOB_TITLES_FILE), "Title")?,
            read_column(&dir.join(DEGREES_FILE), "Degree")?,
        );
        info!(
            "Reference catalog loaded: {} skills, {} job titles, {} degrees",
            catalog.skills.len(),
            catalog.job_titles.len(),
            catalog.degrees.len()
        );
        Ok(catalog)
    }

    /// Replaces skills and degrees with the line-delimited override files in
    /// `dir`, or with the built-in keyword lists where a file is absent.
    pub fn with_keyword_overrides(self, dir: &Path) -> Result<Self, CatalogError> {
        let skills = read_keywords(&dir.join(SKILL_OVERRIDE_FILE), defaults::SKILL_KEYWORDS)?;
        let degrees = read_keywords(
            &dir.join(EDUCATION_OVERRIDE_FILE),
            defaults::EDUCATION_KEYWORDS,
        )?;
        Ok(Self {
            skills: normalize(skills),
            job_titles: self.job_titles,
            degrees: normalize(degrees),
        })
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    pub fn degrees(&self) -> &[String] {
        &self.degrees
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.job_titles.is_empty() && self.degrees.is_empty()
    }
}

fn normalize<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

fn read_column(path: &Path, column: &'static str) -> Result<Vec<String>, CatalogError> {
    if !path.exists() {
        warn!("Reference source {} not found; category left empty", path.display());
        return Ok(Vec::new());
    }
    let csv_err = |source| CatalogError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let index = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or(CatalogError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })?;

    let mut values = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        if let Some(value) = row.get(index) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

fn read_keywords(path: &Path, fallback: &[&str]) -> Result<Vec<String>, CatalogError> {
    if !path.exists() {
        return Ok(fallback.iter().map(|s| s.to_string()).collect());
    }
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}
