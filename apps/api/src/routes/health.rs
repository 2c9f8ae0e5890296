use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the size of the record store.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let records = state.store.read().await.len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-matcher",
        "records": records,
        "store_path": state.config.store_path
    }))
}
