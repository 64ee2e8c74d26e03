//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_core::service::PostService;
use quill_infra::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
use quill_infra::{BlogDatabase, SqlitePostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "sqlite")]
        let repo: Arc<dyn PostRepository> = match BlogDatabase::init(&config.database).await {
            Ok(db) => Arc::new(SqlitePostRepository::new(db.conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to open database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "sqlite"))]
        let repo: Arc<dyn PostRepository> = {
            let _ = config;
            tracing::info!("Running without sqlite feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(PostService::new(repo)),
        }
    }

    /// State backed by a fresh in-memory repository.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        Self {
            posts: Arc::new(PostService::new(repo)),
        }
    }
}
