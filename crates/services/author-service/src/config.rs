//! Author service configuration.

use std::env;

use common::{AppResult, GrpcClientConfig, StorageBackend, StorageConfig};

/// Author service configuration.
#[derive(Debug, Clone)]
pub struct AuthorServiceConfig {
    /// Listen host for both transports
    pub host: String,
    /// HTTP (JSON) port
    pub http_port: u16,
    /// gRPC port
    pub grpc_port: u16,
    /// Persistence backend settings
    pub storage: StorageConfig,
    /// Quote service client settings
    pub quote_service: GrpcClientConfig,
}

impl AuthorServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let backend = match env::var("AUTHOR_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.storage.backend,
        };

        Ok(Self {
            host: env::var("AUTHOR_SERVICE_HOST").unwrap_or(defaults.host),
            http_port: env::var("AUTHOR_SERVICE_HTTP_PORT")
                .or_else(|_| env::var("COMPONENT_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            grpc_port: env::var("AUTHOR_SERVICE_GRPC_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.grpc_port),
            storage: StorageConfig {
                backend,
                mongo_uri: env::var("MONGO_DB_HOST").unwrap_or(defaults.storage.mongo_uri),
                scylla_hosts: env::var("SCYLLA_HOSTS")
                    .map(|hosts| parse_hosts(&hosts))
                    .unwrap_or(defaults.storage.scylla_hosts),
                database: env::var("AUTHOR_DATABASE").unwrap_or(defaults.storage.database),
            },
            quote_service: env::var("QUOTE_SERVICE_URL")
                .map(|url| GrpcClientConfig::from_address(&url))
                .unwrap_or(defaults.quote_service),
        })
    }

    /// Override the storage backend by name.
    pub fn with_storage(mut self, backend: &str) -> AppResult<Self> {
        self.storage.backend = backend.parse::<StorageBackend>()?;
        Ok(self)
    }
}

impl Default for AuthorServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8180,
            grpc_port: 8181,
            storage: StorageConfig::default(),
            quote_service: GrpcClientConfig::default(),
        }
    }
}

/// Split a comma separated contact point list.
fn parse_hosts(hosts: &str) -> Vec<String> {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    #[test]
    fn test_defaults() {
        let config = AuthorServiceConfig::default();

        assert_eq!(config.http_port, 8180);
        assert_eq!(config.grpc_port, 8181);
        assert_eq!(config.storage.backend, StorageBackend::Mongo);
        assert_eq!(config.storage.database, "mosha");
        assert_eq!(config.quote_service.endpoint, "http://localhost:8281");
    }

    #[test]
    fn test_parse_hosts() {
        assert_eq!(
            parse_hosts("10.0.0.1:9042, 10.0.0.2:9042,"),
            vec!["10.0.0.1:9042", "10.0.0.2:9042"]
        );
    }

    #[test]
    fn test_with_storage() {
        let config = AuthorServiceConfig::default().with_storage("memory").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);

        assert!(matches!(
            AuthorServiceConfig::default().with_storage("sqlite"),
            Err(AppError::Config(_))
        ));
    }
}
