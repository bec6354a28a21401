//! Storage adapters translating authors to and from a persistence backend.
//!
//! Every adapter honors the same error rules so the repository above them
//! stays backend independent:
//! - `add` fails with `AlreadyExists` when the id is taken
//! - `get`, `update` and `delete` fail with `NotFound` when the id is absent
//! - `exists` never fails; lookup errors read as "absent"

mod memory;
#[cfg(feature = "mongo")]
mod mongo;
#[cfg(feature = "scylla")]
mod cql;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AppResult, StorageBackend, StorageConfig};
use domain::Author;

pub use memory::MemoryStorage;
#[cfg(feature = "mongo")]
pub use mongo::{AuthorDocument, MongoStorage};
#[cfg(feature = "scylla")]
pub use cql::{AuthorRow, ScyllaStorage};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author storage trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorStorage: Send + Sync {
    /// Insert a new author, returning its id
    async fn add(&self, author: Author) -> AppResult<String>;

    /// Find author by id
    async fn get(&self, id: &str) -> AppResult<Author>;

    /// Replace name and picture URL of an existing author
    async fn update(&self, author: Author) -> AppResult<Author>;

    /// Remove author by id
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// List all authors (ordering is backend defined)
    async fn list_all(&self) -> AppResult<Vec<Author>>;

    /// Check whether an author with the id exists
    async fn exists(&self, id: &str) -> bool;
}

/// Build the storage adapter selected by configuration.
pub async fn connect(config: &StorageConfig) -> AppResult<Arc<dyn AuthorStorage>> {
    info!("Using {} storage backend", config.backend);

    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageBackend::Mongo => connect_mongo(config).await,
        StorageBackend::Scylla => connect_scylla(config).await,
    }
}

#[cfg(feature = "mongo")]
async fn connect_mongo(config: &StorageConfig) -> AppResult<Arc<dyn AuthorStorage>> {
    let storage = MongoStorage::connect(&config.mongo_uri, &config.database).await?;
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "mongo"))]
async fn connect_mongo(_config: &StorageConfig) -> AppResult<Arc<dyn AuthorStorage>> {
    Err(common::AppError::config(
        "mongo storage requested but the `mongo` feature is disabled",
    ))
}

#[cfg(feature = "scylla")]
async fn connect_scylla(config: &StorageConfig) -> AppResult<Arc<dyn AuthorStorage>> {
    let storage = ScyllaStorage::connect(&config.scylla_hosts, &config.database).await?;
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "scylla"))]
async fn connect_scylla(_config: &StorageConfig) -> AppResult<Arc<dyn AuthorStorage>> {
    Err(common::AppError::config(
        "scylla storage requested but the `scylla` feature is disabled",
    ))
}
