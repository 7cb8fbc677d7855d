//! Database Connection and Setup
//!
//! Opens the SQLite database named by the connection string and creates the
//! schema if needed.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// In-memory database connection string
pub const MEMORY_URL: &str = ":memory:";

/// Shared connection handle injected into every repository
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
}

impl DbState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(err, msg)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DomainError::Conflict(msg.unwrap_or_else(|| err.to_string()))
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Rowid of the last insert, as the `u32` ids the domain uses
pub(super) fn last_insert_id(conn: &Connection) -> DomainResult<u32> {
    let rowid = conn.last_insert_rowid();
    u32::try_from(rowid).map_err(|_| DomainError::Internal(format!("rowid {} out of id range", rowid)))
}

/// Open the database at `url` (a file path or `:memory:`) and run migrations
pub fn init_db(url: &str) -> DomainResult<DbState> {
    let conn = if url == MEMORY_URL {
        Connection::open_in_memory()
    } else {
        Connection::open(url)
    }
    .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", url, e)))?;

    run_migrations(&conn)?;
    log::info!("database ready at {}", url);

    Ok(DbState::new(conn))
}

/// Create tables and indexes
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL UNIQUE,
            priority TEXT NOT NULL
        );

        -- No uniqueness on the pair: a list may reference the same item more than once
        CREATE TABLE IF NOT EXISTS on_list (
            item_id INTEGER NOT NULL REFERENCES items(id),
            list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_on_list_list ON on_list(list_id);",
    )
    .map_err(|e| DomainError::Internal(format!("Failed to run migrations: {}", e)))
}
