use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::catalog::ReferenceCatalog;
use crate::extraction::{
    extract_contact, extract_education, extract_jobs, extract_name, extract_projects,
    extract_skills,
};
use crate::ingest::text_source::TextSource;
use crate::models::resume::ResumeRecord;
use crate::store::{RecordStore, StoreError};

/// Runs every extractor over `text` and stamps the record. Pure apart from the
/// timestamp: the same text and catalog give the same fields.
pub fn assemble(file_path: PathBuf, text: String, catalog: &ReferenceCatalog) -> ResumeRecord {
    let contact = extract_contact(&text);
    let record = ResumeRecord {
        name: extract_name(&text),
        email: contact.email,
        phone: contact.phone,
        skills: extract_skills(&text, catalog),
        jobs: extract_jobs(&text, catalog),
        education: extract_education(&text, catalog),
        projects: extract_projects(&text),
        file_path,
        raw_text: text,
        created_at: Utc::now(),
    };
    debug!(
        "Assembled {}: {} skills, {} jobs, {} education, {} projects",
        record.file_path.display(),
        record.skills.len(),
        record.jobs.len(),
        record.education.len(),
        record.projects.len()
    );
    record
}

/// Obtains the document's text and assembles it off the async runtime.
pub async fn parse_file(
    file_path: PathBuf,
    source: &dyn TextSource,
    catalog: Arc<ReferenceCatalog>,
) -> anyhow::Result<ResumeRecord> {
    let text = source.extract_text(&file_path).await;
    let record = tokio::task::spawn_blocking(move || assemble(file_path, text, &catalog))
        .await
        .context("Extraction task panicked")?;
    Ok(record)
}

/// Absolute form of `path`, used as the record's identity.
pub async fn canonical_path(path: &Path) -> PathBuf {
    match tokio::fs::canonicalize(path).await {
        Ok(p) => p,
        Err(_) if path.is_absolute() => path.to_path_buf(),
        Err(_) => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    Added(ResumeRecord),
    AlreadyPresent(ResumeRecord),
}

impl IngestOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            IngestOutcome::Added(_) => "added",
            IngestOutcome::AlreadyPresent(_) => "already_present",
        }
    }

    pub fn into_record(self) -> ResumeRecord {
        match self {
            IngestOutcome::Added(r) | IngestOutcome::AlreadyPresent(r) => r,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub found: usize,
    pub added: usize,
    pub skipped: usize,
    pub records: Vec<ResumeRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Parses one file into the store unless its path is already held. The store
/// lock is not held while the document is being parsed.
pub async fn ingest_file(
    store: &RwLock<RecordStore>,
    path: &Path,
    source: &dyn TextSource,
    catalog: Arc<ReferenceCatalog>,
) -> Result<IngestOutcome, IngestError> {
    let file_path = canonical_path(path).await;
    if let Some(existing) = store.read().await.get(&file_path) {
        info!("{} already parsed; skipping", file_path.display());
        return Ok(IngestOutcome::AlreadyPresent(existing.clone()));
    }

    let record = parse_file(file_path.clone(), source, catalog).await?;

    let mut guard = store.write().await;
    if let Some(existing) = guard.get(&file_path) {
        return Ok(IngestOutcome::AlreadyPresent(existing.clone()));
    }
    guard.add(record.clone())?;
    info!("Added resume {}", record.display_name());
    Ok(IngestOutcome::Added(record))
}

/// True for a `.pdf` extension in any case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// PDF files directly inside `dir`, in path order.
pub async fn pdf_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !has_pdf_extension(&path) {
            continue;
        }
        if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parses every PDF in `dir` that the store does not already hold, then
/// persists once. One unreadable file only yields an empty record.
pub async fn ingest_folder(
    store: &RwLock<RecordStore>,
    dir: &Path,
    source: &dyn TextSource,
    catalog: Arc<ReferenceCatalog>,
) -> Result<BatchReport, IngestError> {
    let files = pdf_files(dir)
        .await
        .with_context(|| format!("Failed to list {}", dir.display()))?;
    let mut report = BatchReport {
        found: files.len(),
        ..BatchReport::default()
    };
    if files.is_empty() {
        info!("No PDF files in {}", dir.display());
        return Ok(report);
    }

    let mut parsed = Vec::new();
    for path in files {
        let file_path = canonical_path(&path).await;
        if store.read().await.contains(&file_path) {
            report.skipped += 1;
            continue;
        }
        parsed.push(parse_file(file_path, source, Arc::clone(&catalog)).await?);
    }

    let offered = parsed.len();
    let added = store.write().await.add_all(parsed)?;
    report.added = added.len();
    report.skipped += offered - added.len();
    report.records = added;
    info!(
        "Batch {}: {} found, {} added, {} skipped",
        dir.display(),
        report.found,
        report.added,
        report.skipped
    );
    Ok(report)
}
