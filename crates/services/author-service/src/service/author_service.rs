//! Author service - Handles author use cases for both transports.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::Author;

use crate::repository::AuthorRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Create an author, returning its id
    async fn create_author(&self, author: Author) -> AppResult<String>;

    /// Get author by id
    async fn get_author(&self, id: &str) -> AppResult<Author>;

    /// List all authors
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    /// Update an existing author
    async fn update_author(&self, author: Author) -> AppResult<Author>;

    /// Delete an author together with its quotes
    async fn delete_author(&self, id: &str) -> AppResult<()>;

    /// Check whether an author exists
    async fn author_exists(&self, id: &str) -> bool;
}

/// Concrete implementation of AuthorService using repository.
pub struct AuthorManager {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorManager {
    /// Create new author service instance with repository
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AuthorService for AuthorManager {
    async fn create_author(&self, author: Author) -> AppResult<String> {
        let id = self.repo.add_author(author).await?;
        info!("Created author {}", id);
        Ok(id)
    }

    async fn get_author(&self, id: &str) -> AppResult<Author> {
        self.repo.get_author(id).await
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repo.list_all().await
    }

    async fn update_author(&self, author: Author) -> AppResult<Author> {
        let updated = self.repo.update_author(author).await?;
        info!("Updated author {}", updated.id);
        Ok(updated)
    }

    async fn delete_author(&self, id: &str) -> AppResult<()> {
        self.repo.delete_author(id).await?;
        info!("Deleted author {} and its quotes", id);
        Ok(())
    }

    async fn author_exists(&self, id: &str) -> bool {
        self.repo.author_exists(id).await
    }
}
