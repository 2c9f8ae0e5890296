use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::ReferenceCatalog;
use crate::config::Config;
use crate::ingest::TextSource;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The only mutable shared state. Writers hold the lock only to insert,
    /// clear or persist, never while a document is being parsed.
    pub store: Arc<RwLock<RecordStore>>,
    pub catalog: Arc<ReferenceCatalog>,
    /// Real PDF extractor or deterministic stub, chosen by `TEXT_SOURCE`.
    pub text_source: Arc<dyn TextSource>,
    pub config: Config,
}
