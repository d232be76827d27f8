// ABOUTME: Document store abstraction and its SQLite implementation
// ABOUTME: Path-addressed JSON documents with get, set and partial update

pub mod sqlite;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use linkdesk_config::constants;

pub use sqlite::SqliteDocumentStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document {0} is not a JSON object")]
    NotAnObject(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A store of JSON object documents addressed by a slash separated path,
/// e.g. `system/ai_settings`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` if nothing is stored at `path`
    async fn get(&self, path: &str) -> StorageResult<Option<Value>>;

    /// Create or fully overwrite the document at `path`
    async fn set(&self, path: &str, data: &Value) -> StorageResult<()>;

    /// Merge `fields` into an existing document with JSON merge-patch
    /// semantics (RFC 7396): a `null` value removes the field.
    /// Fails with [`StorageError::NotFound`] if the document does not exist.
    async fn update(&self, path: &str, fields: &Map<String, Value>) -> StorageResult<()>;
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            enable_wal: true,
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Single-connection in-memory database, for tests and throwaway runs
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            enable_wal: false, // WAL mode doesn't work with :memory:
            max_connections: 1,
            busy_timeout_seconds: 10,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == ":memory:"
    }
}

/// Get the path to the database file (~/.linkdesk/linkdesk.db)
pub fn default_database_path() -> PathBuf {
    // $HOME, then the platform home directory, then the working directory
    let home = std::env::var_os(constants::HOME)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    home.join(".linkdesk").join("linkdesk.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_database_path_follows_home() {
        let previous = std::env::var_os(constants::HOME);
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(constants::HOME, dir.path());

        let path = default_database_path();

        match previous {
            Some(home) => std::env::set_var(constants::HOME, home),
            None => std::env::remove_var(constants::HOME),
        }
        assert_eq!(path, dir.path().join(".linkdesk").join("linkdesk.db"));
    }

    #[test]
    fn test_in_memory_config() {
        let config = StorageConfig::in_memory();
        assert!(config.is_in_memory());
        assert!(!config.enable_wal);
        assert!(!StorageConfig::at("/tmp/linkdesk.db").is_in_memory());
    }
}
