//! Shared configuration structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Persistence backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process map (testing and local development)
    Memory,
    /// MongoDB document store
    Mongo,
    /// Scylla / Cassandra wide-column store
    Scylla,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Mongo => "mongo",
            StorageBackend::Scylla => "scylla",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" => Ok(StorageBackend::Memory),
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            "scylla" | "scylladb" | "cassandra" => Ok(StorageBackend::Scylla),
            other => Err(AppError::config(format!(
                "unknown storage backend {other:?} (expected memory, mongo or scylla)"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// MongoDB connection string
    pub mongo_uri: String,
    /// Scylla contact points (`host:port`)
    pub scylla_hosts: Vec<String>,
    /// Database (MongoDB) or keyspace (Scylla) name
    pub database: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Mongo,
            mongo_uri: "mongodb://localhost:27017".to_string(),
            scylla_hosts: vec!["127.0.0.1:9042".to_string()],
            database: domain::DEFAULT_DATABASE.to_string(),
        }
    }
}

/// gRPC client connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrpcClientConfig {
    /// Service endpoint URL (e.g., "http://localhost:8281")
    pub endpoint: String,
}

impl GrpcClientConfig {
    /// Build a config from an address, adding an `http://` scheme when missing.
    pub fn from_address(address: &str) -> Self {
        let address = address.trim();
        let endpoint = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };
        Self { endpoint }
    }
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8281".to_string(),
        }
    }
}
