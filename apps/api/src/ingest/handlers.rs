use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::ingest::assembler::{has_pdf_extension, ingest_file, ingest_folder, BatchReport};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub path: PathBuf,
}

#[derive(Serialize)]
pub struct ParseResponse {
    pub status: &'static str,
    pub record: ResumeRecord,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub dir: PathBuf,
}

async fn is_kind(path: &std::path::Path, check: impl Fn(&std::fs::Metadata) -> bool) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| check(&m))
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if !has_pdf_extension(&req.path) {
        return Err(AppError::Validation(format!(
            "{} is not a PDF file",
            req.path.display()
        )));
    }
    if !is_kind(&req.path, |m| m.is_file()).await {
        return Err(AppError::NotFound(format!(
            "No file at {}",
            req.path.display()
        )));
    }
    let outcome = ingest_file(
        &state.store,
        &req.path,
        state.text_source.as_ref(),
        Arc::clone(&state.catalog),
    )
    .await?;
    Ok(Json(ParseResponse {
        status: outcome.status(),
        record: outcome.into_record(),
    }))
}

/// POST /api/v1/resumes/batch
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchReport>, AppError> {
    if !is_kind(&req.dir, |m| m.is_dir()).await {
        return Err(AppError::Validation(format!(
            "{} is not a directory",
            req.dir.display()
        )));
    }
    let report = ingest_folder(
        &state.store,
        &req.dir,
        state.text_source.as_ref(),
        Arc::clone(&state.catalog),
    )
    .await?;
    Ok(Json(report))
}
