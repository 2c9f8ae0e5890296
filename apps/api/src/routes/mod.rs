pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ingest::handlers as ingest;
use crate::search::handlers as search;
use crate::state::AppState;
use crate::store::handlers as store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes",
            get(search::handle_search).delete(store::handle_clear),
        )
        .route("/api/v1/resumes/parse", post(ingest::handle_parse))
        .route("/api/v1/resumes/batch", post(ingest::handle_batch))
        .route("/api/v1/resumes/download", post(store::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use crate::catalog::ReferenceCatalog;
    use crate::config::Config;
    use crate::ingest::text_source::StubTextSource;
    use crate::store::RecordStore;

    fn app(dir: &Path) -> Router {
        let state = AppState {
            store: Arc::new(RwLock::new(
                RecordStore::open(dir.join("store.json")).unwrap(),
            )),
            catalog: Arc::new(ReferenceCatalog::new(
                ["python", "sql"],
                ["software engineer"],
                ["bachelor of science"],
            )),
            text_source: Arc::new(StubTextSource::default()),
            config: Config::default(),
        };
        build_router(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn write_resume(dir: &Path, file: &str, text: &str) -> String {
        let path = dir.join(file);
        std::fs::write(&path, text).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(&app(dir.path()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "resume-matcher");
        assert_eq!(body["records"], 0);
    }

    #[tokio::test]
    async fn test_parse_then_search() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let path = write_resume(
            dir.path(),
            "john.pdf",
            "John Smith\njohn@x.com\n555-123-4567\nSkills: Python, SQL",
        );

        let (status, body) =
            send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": path }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "added");
        assert_eq!(body["record"]["name"], "John Smith");
        assert_eq!(body["record"]["skills"], json!(["Python", "Sql"]));

        let (_, again) =
            send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": path }))).await;
        assert_eq!(again["status"], "already_present");

        let (status, found) = send(&app, "GET", "/api/v1/resumes?q=python", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["total"], 1);
        assert_eq!(found["results"][0]["score"], 100);

        let (_, all) = send(&app, "GET", "/api/v1/resumes", None).await;
        assert_eq!(all["total"], 1);
    }

    #[tokio::test]
    async fn test_batch_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        write_resume(&docs, "a.pdf", "Ada Lovelace\nada@x.com");
        write_resume(&docs, "b.pdf", "Alan Turing\nalan@x.com");
        let app = app(dir.path());

        let (status, report) =
            send(&app, "POST", "/api/v1/resumes/batch", Some(json!({ "dir": docs }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["found"], 2);
        assert_eq!(report["added"], 2);

        let (status, _) = send(&app, "DELETE", "/api/v1/resumes", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, all) = send(&app, "GET", "/api/v1/resumes", None).await;
        assert_eq!(all["total"], 0);
    }

    #[tokio::test]
    async fn test_batch_rejects_non_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            &app(dir.path()),
            "POST",
            "/api/v1/resumes/batch",
            Some(json!({ "dir": dir.path().join("missing") })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = send(
            &app(dir.path()),
            "POST",
            "/api/v1/resumes/parse",
            Some(json!({ "path": dir.path().join("nope.pdf") })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_download_copies_and_reports_missing_original() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let path = write_resume(dir.path(), "jane.pdf", "Jane Doe\njane@x.com");
        let (_, parsed) =
            send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": path }))).await;
        let stored = parsed["record"]["file_path"].clone();

        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/resumes/download",
            Some(json!({ "file_path": stored, "destination": out })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(out.join("jane.pdf").is_file());
        assert!(body["copied_to"].as_str().unwrap().ends_with("jane.pdf"));

        std::fs::remove_file(&path).unwrap();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/resumes/download",
            Some(json!({ "file_path": stored, "destination": out })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "ORIGINAL_FILE_MISSING");
    }

    #[tokio::test]
    async fn test_parse_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let path = write_resume(dir.path(), "notes.txt", "John Smith\njohn@x.com");

        let (status, body) =
            send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": path }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, all) = send(&app, "GET", "/api/v1/resumes", None).await;
        assert_eq!(all["total"], 0);
    }

    #[tokio::test]
    async fn test_download_accepts_non_canonical_path() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        write_resume(dir.path(), "jane.pdf", "Jane Doe\njane@x.com");
        let dotted = dir.path().join(".").join("jane.pdf");
        send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": dotted }))).await;

        let out = dir.path().join("out");
        std::fs::create_dir(&out).unwrap();
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/resumes/download",
            Some(json!({ "file_path": dotted, "destination": out })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(out.join("jane.pdf").is_file());
    }

    #[tokio::test]
    async fn test_fuzzy_search_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let path = write_resume(dir.path(), "ada.pdf", "Ada Lovelace\nSkills: Python");
        send(&app, "POST", "/api/v1/resumes/parse", Some(json!({ "path": path }))).await;

        let (status, found) = send(&app, "GET", "/api/v1/resumes?q=pythn", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["total"], 1);
        assert!(found["results"][0]["score"].as_u64().unwrap() < 100);

        // The read lock is gone once the search returns.
        let (status, _) = send(&app, "DELETE", "/api/v1/resumes", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_download_unknown_record() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            &app(dir.path()),
            "POST",
            "/api/v1/resumes/download",
            Some(json!({ "file_path": "/never/parsed.pdf", "destination": "/tmp" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
