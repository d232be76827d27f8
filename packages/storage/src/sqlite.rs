// ABOUTME: SQLite-backed document store
// ABOUTME: Stores each document as a JSON text column keyed by its path

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::{DocumentStore, StorageConfig, StorageError, StorageResult};

/// SQLite implementation of DocumentStore
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Open (creating if needed) the database described by `config` and run
    /// migrations.
    pub async fn open(config: &StorageConfig) -> StorageResult<Self> {
        let database_url = if config.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            // Ensure parent directory exists
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            format!("sqlite:{}", config.path.display())
        };

        debug!("Opening document store at: {}", database_url);

        let mut options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

        if config.enable_wal {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.busy_timeout_seconds));

        if config.is_in_memory() {
            // Every new connection to :memory: is a fresh database, keep the one we have
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    pub async fn initialize(&self) -> StorageResult<()> {
        info!("Initializing document store with migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(StorageError::Migration)?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, path: &str) -> StorageResult<Option<Value>> {
        debug!("Fetching document: {}", path);

        let data: Option<String> =
            sqlx::query_scalar("SELECT data FROM documents WHERE path = ?")
                .bind(path)
                .fetch_optional(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        match data {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, path: &str, data: &Value) -> StorageResult<()> {
        debug!("Writing document: {}", path);

        if !data.is_object() {
            return Err(StorageError::NotAnObject(path.to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO documents (path, data)
            VALUES (?, ?)
            ON CONFLICT(path) DO UPDATE SET
                data = excluded.data,
                updated_at = datetime('now')
            "#,
        )
        .bind(path)
        .bind(serde_json::to_string(data)?)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    async fn update(&self, path: &str, fields: &Map<String, Value>) -> StorageResult<()> {
        debug!("Updating {} field(s) of document: {}", fields.len(), path);

        // json_patch applies RFC 7396 merge semantics in a single statement
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET data = json_patch(data, ?), updated_at = datetime('now')
            WHERE path = ?
            "#,
        )
        .bind(serde_json::to_string(fields)?)
        .bind(path)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(path.to_string()));
        }

        Ok(())
    }
}
