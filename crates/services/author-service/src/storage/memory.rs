//! In-memory implementation of the author storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::Author;

use super::AuthorStorage;

/// In-memory author storage backed by a map keyed by author id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    authors: Arc<RwLock<HashMap<String, Author>>>,
}

impl MemoryStorage {
    /// Creates a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new memory storage with initial data.
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(
                authors
                    .into_iter()
                    .map(|author| (author.id.clone(), author))
                    .collect(),
            )),
        }
    }
}

#[async_trait]
impl AuthorStorage for MemoryStorage {
    async fn add(&self, author: Author) -> AppResult<String> {
        let mut authors = self.authors.write().await;
        if authors.contains_key(&author.id) {
            return Err(AppError::already_exists(author.id));
        }

        let id = author.id.clone();
        authors.insert(id.clone(), author);
        Ok(id)
    }

    async fn get(&self, id: &str) -> AppResult<Author> {
        self.authors
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let mut authors = self.authors.write().await;
        match authors.get_mut(&author.id) {
            Some(stored) => {
                *stored = author;
                Ok(stored.clone())
            }
            None => Err(AppError::not_found(author.id)),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.authors
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.authors.read().await.values().cloned().collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(authors)
    }

    async fn exists(&self, id: &str) -> bool {
        self.authors.read().await.contains_key(id)
    }
}
