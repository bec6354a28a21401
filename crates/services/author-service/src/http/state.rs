//! Application state for dependency injection.

use std::sync::Arc;

use common::StorageBackend;

use crate::service::AuthorService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn AuthorService>,
    pub storage_backend: StorageBackend,
}

impl AppState {
    /// Create new app state.
    pub fn new(service: Arc<dyn AuthorService>, storage_backend: StorageBackend) -> Self {
        Self {
            service,
            storage_backend,
        }
    }
}
