//! Author Service Library
//!
//! This crate manages authors over HTTP (JSON) and gRPC on top of a
//! pluggable storage backend. Deleting an author first deletes the
//! author's quotes through the remote quote service.

pub mod client;
pub mod config;
pub mod dto;
pub mod grpc;
pub mod http;
pub mod repository;
pub mod service;
pub mod storage;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::client::QuoteClient;
use crate::config::AuthorServiceConfig;
use crate::grpc::AuthorGrpcService;
use crate::http::{create_router, AppState};
use crate::repository::CascadingAuthorRepository;
use crate::service::{AuthorManager, AuthorService};

/// Build the service stack and run the HTTP and gRPC servers until either
/// one stops.
pub async fn run_server_with_config(
    config: AuthorServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Storage and quote service client
    let storage = storage::connect(&config.storage).await?;
    let quotes = Arc::new(QuoteClient::connect_lazy(&config.quote_service)?);

    // Create repository and service
    let repo = Arc::new(CascadingAuthorRepository::new(storage, quotes));
    let service: Arc<dyn AuthorService> = Arc::new(AuthorManager::new(repo));

    // Build addresses
    let http_addr: SocketAddr = format!("{}:{}", config.host, config.http_port).parse()?;
    let grpc_addr: SocketAddr = format!("{}:{}", config.host, config.grpc_port).parse()?;

    // HTTP server
    let app = create_router(AppState::new(service.clone(), config.storage.backend))
        .layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    info!("Author service HTTP listening on {}", http_addr);

    // gRPC server
    let grpc = Server::builder()
        .add_service(proto::AuthorServiceServer::new(AuthorGrpcService::new(service)))
        .serve(grpc_addr);
    info!("Author service gRPC listening on {}", grpc_addr);

    // Wait for either server to exit
    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result?;
            error!("HTTP server exited unexpectedly");
        }
        result = grpc => {
            result?;
            error!("gRPC server exited unexpectedly");
        }
    }

    Ok(())
}
