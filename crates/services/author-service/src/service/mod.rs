//! Business logic layer.

mod author_service;

pub use author_service::{AuthorManager, AuthorService};

#[cfg(any(test, feature = "test-utils"))]
pub use author_service::MockAuthorService;
