//! HTTP handlers.

pub mod author_handler;
pub mod health_handler;

pub use author_handler::author_routes;
pub use health_handler::health_routes;
