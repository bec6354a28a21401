//! Author repository with cascading delete.
//!
//! Deleting an author first asks the quote service to drop the author's
//! quotes. The stored record is removed only after that call succeeds; a
//! failed cascade leaves storage untouched and is returned as is. If the
//! cascade succeeds but the storage delete fails, the error is surfaced
//! without compensation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use common::AppResult;
use domain::Author;

use crate::client::QuoteCascade;
use crate::storage::AuthorStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Store a new author, generating an id when none was supplied
    async fn add_author(&self, author: Author) -> AppResult<String>;

    /// Find author by id
    async fn get_author(&self, id: &str) -> AppResult<Author>;

    /// List all authors
    async fn list_all(&self) -> AppResult<Vec<Author>>;

    /// Replace name and picture URL of an existing author
    async fn update_author(&self, author: Author) -> AppResult<Author>;

    /// Delete the author's quotes, then the author
    async fn delete_author(&self, id: &str) -> AppResult<()>;

    /// Check whether an author exists
    async fn author_exists(&self, id: &str) -> bool;
}

/// Repository backed by a storage adapter and a quote cascade.
pub struct CascadingAuthorRepository {
    storage: Arc<dyn AuthorStorage>,
    quotes: Arc<dyn QuoteCascade>,
}

impl CascadingAuthorRepository {
    /// Create new repository instance
    pub fn new(storage: Arc<dyn AuthorStorage>, quotes: Arc<dyn QuoteCascade>) -> Self {
        Self { storage, quotes }
    }
}

#[async_trait]
impl AuthorRepository for CascadingAuthorRepository {
    async fn add_author(&self, mut author: Author) -> AppResult<String> {
        author.ensure_id();
        self.storage.add(author).await
    }

    async fn get_author(&self, id: &str) -> AppResult<Author> {
        self.storage.get(id).await
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        self.storage.list_all().await
    }

    async fn update_author(&self, author: Author) -> AppResult<Author> {
        self.storage.update(author).await
    }

    async fn delete_author(&self, id: &str) -> AppResult<()> {
        if let Err(e) = self.quotes.delete_author_quotes(id).await {
            warn!("Keeping author {}: quote cascade failed: {}", id, e);
            return Err(e);
        }

        self.storage.delete(id).await
    }

    async fn author_exists(&self, id: &str) -> bool {
        self.storage.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockQuoteCascade;
    use crate::storage::{MemoryStorage, MockAuthorStorage};
    use common::AppError;

    fn john() -> Author {
        Author::with_id("123", "John Doe", "http://x/john.jpg")
    }

    fn cascade_ok() -> MockQuoteCascade {
        let mut quotes = MockQuoteCascade::new();
        quotes.expect_delete_author_quotes().returning(|_| Ok(()));
        quotes
    }

    fn cascade_failing() -> MockQuoteCascade {
        let mut quotes = MockQuoteCascade::new();
        quotes
            .expect_delete_author_quotes()
            .returning(|_| Err(AppError::cascade("quote service unavailable")));
        quotes
    }

    #[tokio::test]
    async fn test_add_generates_missing_id() {
        let storage = Arc::new(MemoryStorage::new());
        let repo = CascadingAuthorRepository::new(storage.clone(), Arc::new(cascade_ok()));

        let id = repo
            .add_author(Author::with_id("", "John Doe", ""))
            .await
            .unwrap();

        assert!(!id.is_empty());
        assert_eq!(repo.get_author(&id).await.unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn test_add_keeps_supplied_id() {
        let mut storage = MockAuthorStorage::new();
        storage
            .expect_add()
            .withf(|author| author.id == "123")
            .returning(|author| Ok(author.id));

        let repo = CascadingAuthorRepository::new(Arc::new(storage), Arc::new(cascade_ok()));
        assert_eq!(repo.add_author(john()).await.unwrap(), "123");
    }

    #[tokio::test]
    async fn test_delete_cascades_before_storage() {
        let mut seq = mockall::Sequence::new();

        let mut quotes = MockQuoteCascade::new();
        quotes
            .expect_delete_author_quotes()
            .withf(|id| id == "123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut storage = MockAuthorStorage::new();
        storage
            .expect_delete()
            .withf(|id| id == "123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let repo = CascadingAuthorRepository::new(Arc::new(storage), Arc::new(quotes));
        assert!(repo.delete_author("123").await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_cascade_never_touches_storage() {
        let mut storage = MockAuthorStorage::new();
        storage.expect_delete().never();

        let repo =
            CascadingAuthorRepository::new(Arc::new(storage), Arc::new(cascade_failing()));

        let err = repo.delete_author("123").await.unwrap_err();
        assert!(matches!(err, AppError::CascadeFailure(_)));
    }

    #[tokio::test]
    async fn test_failed_cascade_keeps_author() {
        let storage = Arc::new(MemoryStorage::with_data(vec![john()]));
        let repo = CascadingAuthorRepository::new(storage, Arc::new(cascade_failing()));

        assert!(repo.delete_author("123").await.is_err());
        assert_eq!(repo.get_author("123").await.unwrap(), john());
    }

    #[tokio::test]
    async fn test_storage_error_after_cascade_is_surfaced() {
        let mut storage = MockAuthorStorage::new();
        storage
            .expect_delete()
            .returning(|id| Err(AppError::not_found(id)));

        let repo = CascadingAuthorRepository::new(Arc::new(storage), Arc::new(cascade_ok()));

        let err = repo.delete_author("123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_author() {
        let storage = Arc::new(MemoryStorage::new());
        let repo = CascadingAuthorRepository::new(storage, Arc::new(MockQuoteCascade::new()));

        let err = repo.update_author(john()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!repo.author_exists("123").await);
    }

    #[tokio::test]
    async fn test_list_all_returns_every_author() {
        let storage = Arc::new(MemoryStorage::new());
        let repo = CascadingAuthorRepository::new(storage, Arc::new(MockQuoteCascade::new()));

        for name in ["Ada", "Mark", "Zora"] {
            repo.add_author(Author::new(name, "")).await.unwrap();
        }

        let authors = repo.list_all().await.unwrap();
        assert_eq!(authors.len(), 3);
        for author in authors {
            assert_eq!(repo.get_author(&author.id).await.unwrap(), author);
        }
    }
}
