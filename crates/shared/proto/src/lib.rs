//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - AuthorService (`authorservice`): Author management (CRUD, existence check)
//! - QuoteService (`quoteservice`): Remote quote management (cascade delete by author)

/// Author service definitions.
pub mod authorservice {
    tonic::include_proto!("authorservice");
}

/// Quote service definitions.
pub mod quoteservice {
    tonic::include_proto!("quoteservice");
}

// Re-export commonly used items
pub use authorservice::author_service_server::AuthorServiceServer;
pub use quoteservice::quote_service_client::QuoteServiceClient;
