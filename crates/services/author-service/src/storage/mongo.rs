//! MongoDB implementation of the author storage.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Author, AUTHORS_COLLECTION};

use super::AuthorStorage;

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Author document as persisted in the `authors` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "picurl", default)]
    pub pic_url: String,
}

impl From<Author> for AuthorDocument {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            pic_url: author.pic_url,
        }
    }
}

impl From<AuthorDocument> for Author {
    fn from(document: AuthorDocument) -> Self {
        Author {
            id: document.id,
            name: document.name,
            pic_url: document.pic_url,
        }
    }
}

/// Author storage backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoStorage {
    collection: Collection<AuthorDocument>,
}

impl MongoStorage {
    /// Connect to MongoDB and bind the `authors` collection of `database`.
    pub async fn connect(uri: &str, database: &str) -> AppResult<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(AppError::backend)?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options).map_err(AppError::backend)?;
        info!("Connected to MongoDB database {}", database);

        Ok(Self::new(&client, database))
    }

    /// Bind the `authors` collection using an existing client.
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            collection: client.database(database).collection(AUTHORS_COLLECTION),
        }
    }
}

#[async_trait]
impl AuthorStorage for MongoStorage {
    async fn add(&self, author: Author) -> AppResult<String> {
        let id = author.id.clone();

        match self.collection.insert_one(AuthorDocument::from(author)).await {
            Ok(_) => Ok(id),
            Err(e) if is_duplicate_key(&e) => Err(AppError::already_exists(id)),
            Err(e) => Err(AppError::backend(e)),
        }
    }

    async fn get(&self, id: &str) -> AppResult<Author> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(AppError::backend)?
            .map(Author::from)
            .ok_or_else(|| AppError::not_found(id))
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": author.id.as_str() },
                AuthorDocument::from(author.clone()),
            )
            .await
            .map_err(AppError::backend)?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(author.id));
        }

        Ok(author)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(AppError::backend)?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found(id));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        let documents: Vec<AuthorDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "name": 1, "_id": 1 })
            .await
            .map_err(AppError::backend)?
            .try_collect()
            .await
            .map_err(AppError::backend)?;

        Ok(documents.into_iter().map(Author::from).collect())
    }

    async fn exists(&self, id: &str) -> bool {
        match self.collection.find_one(doc! { "_id": id }).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!("Author lookup for {} failed: {}", id, e);
                false
            }
        }
    }
}

/// Check whether a write failed on the unique `_id` index.
fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
