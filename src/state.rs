use std::sync::Arc;

use tracing::{info, warn};

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use crate::submission::SubmissionRouter;

/// Shared state handed to every handler via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Document store; connects on first use and is closed on shutdown.
    pub store: Arc<dyn DocumentStore>,
    pub submissions: SubmissionRouter,
    pub completion: Arc<CompletionClient>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let completion = Arc::new(CompletionClient::new(&config));
        Self {
            submissions: SubmissionRouter::new(Arc::clone(&store)),
            config: Arc::new(config),
            store,
            completion,
        }
    }
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise the in-memory store.
/// Nothing connects here.
pub fn open_store(config: &Config) -> Arc<dyn DocumentStore> {
    match &config.database_url {
        Some(url) => {
            info!(
                max_connections = config.database_max_connections,
                "Using PostgreSQL document store"
            );
            Arc::new(PgDocumentStore::new(url.clone(), config.database_max_connections))
        }
        None => {
            if config.is_production() {
                warn!("DATABASE_URL not set in production; submissions will not survive a restart");
            } else {
                warn!("DATABASE_URL not set; using in-memory document store");
            }
            Arc::new(MemoryDocumentStore::new())
        }
    }
}
