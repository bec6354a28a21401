//! Wide-column (Scylla / Cassandra) implementation of the author storage.
//!
//! Existence rules are enforced by the backend through lightweight
//! transactions: inserts use `IF NOT EXISTS`, updates and deletes use
//! `IF EXISTS`, and the `[applied]` column of the result decides between
//! success and `AlreadyExists` / `NotFound`.

use async_trait::async_trait;
use futures::TryStreamExt;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::response::query_result::QueryResult;
use scylla::statement::prepared::PreparedStatement;
use scylla::value::{CqlValue, Row};
use scylla::DeserializeRow;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Author, AUTHORS_COLLECTION};

use super::AuthorStorage;

/// Author row as stored in the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, DeserializeRow)]
pub struct AuthorRow {
    pub id: String,
    pub name: Option<String>,
    #[scylla(rename = "picurl")]
    pub pic_url: Option<String>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: row.id,
            name: row.name.unwrap_or_default(),
            pic_url: row.pic_url.unwrap_or_default(),
        }
    }
}

/// CQL text for every statement the adapter runs, bound to one keyspace.
#[derive(Debug, Clone)]
struct Statements {
    create_keyspace: String,
    create_table: String,
    insert: String,
    select: String,
    select_all: String,
    update: String,
    delete: String,
}

impl Statements {
    fn new(keyspace: &str) -> AppResult<Self> {
        if keyspace.is_empty()
            || !keyspace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::config(format!("invalid keyspace name {keyspace:?}")));
        }

        let table = format!("{}.{}", keyspace, AUTHORS_COLLECTION);
        Ok(Self {
            create_keyspace: format!(
                "CREATE KEYSPACE IF NOT EXISTS {keyspace} WITH REPLICATION = \
                 {{ 'class' : 'SimpleStrategy', 'replication_factor' : 1 }}"
            ),
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (id text PRIMARY KEY, name text, picurl text)"
            ),
            insert: format!(
                "INSERT INTO {table} (id, name, picurl) VALUES (?, ?, ?) IF NOT EXISTS"
            ),
            select: format!("SELECT id, name, picurl FROM {table} WHERE id = ?"),
            select_all: format!("SELECT id, name, picurl FROM {table}"),
            update: format!("UPDATE {table} SET name = ?, picurl = ? WHERE id = ? IF EXISTS"),
            delete: format!("DELETE FROM {table} WHERE id = ? IF EXISTS"),
        })
    }
}

/// Author storage backed by a Scylla / Cassandra table.
pub struct ScyllaStorage {
    session: Session,
    insert: PreparedStatement,
    select: PreparedStatement,
    select_all: PreparedStatement,
    update: PreparedStatement,
    delete: PreparedStatement,
}

impl ScyllaStorage {
    /// Connect to the cluster, create keyspace and table if missing, and
    /// prepare all statements.
    pub async fn connect(hosts: &[String], keyspace: &str) -> AppResult<Self> {
        let statements = Statements::new(keyspace)?;

        let session = SessionBuilder::new()
            .known_nodes(hosts)
            .build()
            .await
            .map_err(AppError::backend)?;
        info!("Connected to Scylla cluster at {}", hosts.join(","));

        session
            .query_unpaged(statements.create_keyspace.as_str(), ())
            .await
            .map_err(AppError::backend)?;
        session
            .query_unpaged(statements.create_table.as_str(), ())
            .await
            .map_err(AppError::backend)?;
        info!("Keyspace {} ready", keyspace);

        Ok(Self {
            insert: prepare(&session, &statements.insert).await?,
            select: prepare(&session, &statements.select).await?,
            select_all: prepare(&session, &statements.select_all).await?,
            update: prepare(&session, &statements.update).await?,
            delete: prepare(&session, &statements.delete).await?,
            session,
        })
    }

    async fn find(&self, id: &str) -> AppResult<Option<Author>> {
        let row = self
            .session
            .execute_unpaged(&self.select, (id,))
            .await
            .map_err(AppError::backend)?
            .into_rows_result()
            .map_err(AppError::backend)?
            .maybe_first_row::<AuthorRow>()
            .map_err(AppError::backend)?;

        Ok(row.map(Author::from))
    }
}

#[async_trait]
impl AuthorStorage for ScyllaStorage {
    async fn add(&self, author: Author) -> AppResult<String> {
        let result = self
            .session
            .execute_unpaged(&self.insert, (&author.id, &author.name, &author.pic_url))
            .await
            .map_err(AppError::backend)?;

        if !lwt_applied(result)? {
            return Err(AppError::already_exists(author.id));
        }

        Ok(author.id)
    }

    async fn get(&self, id: &str) -> AppResult<Author> {
        self.find(id).await?.ok_or_else(|| AppError::not_found(id))
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let result = self
            .session
            .execute_unpaged(&self.update, (&author.name, &author.pic_url, &author.id))
            .await
            .map_err(AppError::backend)?;

        if !lwt_applied(result)? {
            return Err(AppError::not_found(author.id));
        }

        Ok(author)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self
            .session
            .execute_unpaged(&self.delete, (id,))
            .await
            .map_err(AppError::backend)?;

        if !lwt_applied(result)? {
            return Err(AppError::not_found(id));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        let rows: Vec<AuthorRow> = self
            .session
            .execute_iter(self.select_all.clone(), ())
            .await
            .map_err(AppError::backend)?
            .rows_stream::<AuthorRow>()
            .map_err(AppError::backend)?
            .try_collect()
            .await
            .map_err(AppError::backend)?;

        // Full scans come back in token order
        let mut authors: Vec<Author> = rows.into_iter().map(Author::from).collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(authors)
    }

    async fn exists(&self, id: &str) -> bool {
        match self.find(id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!("Author lookup for {} failed: {}", id, e);
                false
            }
        }
    }
}

async fn prepare(session: &Session, statement: &str) -> AppResult<PreparedStatement> {
    session
        .prepare(statement)
        .await
        .map_err(AppError::backend)
}

/// Read the `[applied]` flag of a lightweight transaction result.
fn lwt_applied(result: QueryResult) -> AppResult<bool> {
    let row = result
        .into_rows_result()
        .map_err(AppError::backend)?
        .first_row::<Row>()
        .map_err(AppError::backend)?;

    Ok(applied_flag(&row))
}

fn applied_flag(row: &Row) -> bool {
    matches!(row.columns.first(), Some(Some(CqlValue::Boolean(true))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_flag() {
        let applied = Row {
            columns: vec![Some(CqlValue::Boolean(true)), None, None, None],
        };
        let rejected = Row {
            columns: vec![
                Some(CqlValue::Boolean(false)),
                Some(CqlValue::Text("123".to_string())),
                Some(CqlValue::Text("John Doe".to_string())),
                None,
            ],
        };

        assert!(applied_flag(&applied));
        assert!(!applied_flag(&rejected));
        assert!(!applied_flag(&Row { columns: vec![] }));
    }

    #[test]
    fn test_statements_use_lightweight_transactions() {
        let statements = Statements::new("mosha").unwrap();

        assert!(statements.insert.starts_with("INSERT INTO mosha.authors"));
        assert!(statements.insert.ends_with("IF NOT EXISTS"));
        assert!(statements.update.ends_with("IF EXISTS"));
        assert!(statements.delete.ends_with("IF EXISTS"));
        assert!(statements.create_table.contains("id text PRIMARY KEY"));
        assert!(statements.create_keyspace.contains("'replication_factor' : 1"));
    }

    #[test]
    fn test_statements_reject_bad_keyspace() {
        assert!(matches!(
            Statements::new("mosha; DROP TABLE x"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(Statements::new(""), Err(AppError::Config(_))));
    }

    #[test]
    fn test_row_with_null_columns() {
        let row = AuthorRow {
            id: "123".to_string(),
            name: Some("John Doe".to_string()),
            pic_url: None,
        };
        assert_eq!(Author::from(row), Author::with_id("123", "John Doe", ""));
    }
}
