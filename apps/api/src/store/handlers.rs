use std::path::PathBuf;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::assembler::canonical_path;
use crate::state::AppState;
use crate::store::copy_original;

#[derive(Deserialize)]
pub struct DownloadRequest {
    pub file_path: PathBuf,
    pub destination: PathBuf,
}

#[derive(Serialize)]
pub struct DownloadResponse {
    pub copied_to: PathBuf,
}

/// DELETE /api/v1/resumes
pub async fn handle_clear(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.write().await.clear_all()?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/download
pub async fn handle_download(
    State(state): State<AppState>,
    Json(req): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, AppError> {
    let canonical = canonical_path(&req.file_path).await;
    let original = {
        let store = state.store.read().await;
        store
            .get(&req.file_path)
            .or_else(|| store.get(&canonical))
            .map(|r| r.file_path.clone())
            .ok_or_else(|| {
                AppError::NotFound(format!("No stored resume for {}", req.file_path.display()))
            })?
    };

    let destination = req.destination;
    let copied_to =
        tokio::task::spawn_blocking(move || copy_original(&original, &destination))
            .await
            .map_err(anyhow::Error::from)??;
    info!("Download copied to {}", copied_to.display());
    Ok(Json(DownloadResponse { copied_to }))
}
