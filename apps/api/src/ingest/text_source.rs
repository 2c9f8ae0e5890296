//! Text sources: where a resume's raw text comes from.
//!
//! `PdfTextSource` is the real extractor; `StubTextSource` is deterministic and
//! needs no PDF tooling. `AppState` holds an `Arc<dyn TextSource>` chosen from
//! config. Neither variant fails: an unreadable file yields empty text, which
//! produces a record with every field unset instead of aborting a batch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextSourceKind {
    #[default]
    Pdf,
    Stub,
}

impl std::str::FromStr for TextSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "stub" => Ok(Self::Stub),
            other => Err(format!("unknown text source '{other}' (expected 'pdf' or 'stub')")),
        }
    }
}

#[async_trait]
pub trait TextSource: Send + Sync {
    /// Returns the document's text, or an empty string if it cannot be read.
    async fn extract_text(&self, path: &Path) -> String;
}

pub fn build_text_source(kind: TextSourceKind) -> Arc<dyn TextSource> {
    match kind {
        TextSourceKind::Pdf => Arc::new(PdfTextSource),
        TextSourceKind::Stub => Arc::new(StubTextSource::default()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PdfTextSource
// ────────────────────────────────────────────────────────────────────────────

pub struct PdfTextSource;

#[async_trait]
impl TextSource for PdfTextSource {
    async fn extract_text(&self, path: &Path) -> String {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read {}: {e}", path.display());
                return String::new();
            }
        };

        // pdf-extract is CPU-bound and synchronous.
        let shown = path.display().to_string();
        let extracted =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;
        match extracted {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("PDF text extraction failed for {shown}: {e}");
                String::new()
            }
            Err(e) => {
                warn!("PDF extraction task for {shown} did not complete: {e}");
                String::new()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StubTextSource
// ────────────────────────────────────────────────────────────────────────────

/// Serves registered fixtures by path; anything else is read as UTF-8 text.
#[derive(Debug, Default)]
pub struct StubTextSource {
    fixtures: HashMap<PathBuf, String>,
}

impl StubTextSource {
    #[allow(dead_code)]
    pub fn with_fixture(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.fixtures.insert(path.into(), text.into());
        self
    }
}

#[async_trait]
impl TextSource for StubTextSource {
    async fn extract_text(&self, path: &Path) -> String {
        if let Some(text) = self.fixtures.get(path) {
            return text.clone();
        }
        match tokio::fs::read(path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("Stub text source could not read {}: {e}", path.display());
                String::new()
            }
        }
    }
}
