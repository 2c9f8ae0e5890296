use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::search::{search, SearchHit};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub results: Vec<SearchHit>,
}

/// GET /api/v1/resumes?q=
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    // The store lock is released before scoring; scoring runs on a blocking thread.
    let records = state.store.read().await.records().to_vec();
    let results = tokio::task::spawn_blocking(move || search(&params.q, &records))
        .await
        .map_err(anyhow::Error::from)?;
    Ok(Json(SearchResponse {
        total: results.len(),
        results,
    }))
}
