//! Database handle
//!
//! Owns the single SQLite connection shared by the credential, question and
//! score stores. Opening creates the schema; dropping or closing releases it.

use log::{debug, info};
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS questions
        (question TEXT, answer TEXT);
    CREATE TABLE IF NOT EXISTS users
        (username TEXT PRIMARY KEY, password TEXT);
    CREATE TABLE IF NOT EXISTS scores
        (username TEXT, score INTEGER, FOREIGN KEY(username) REFERENCES users(username));
";

/// Scoped store handle. Every statement issued through it auto-commits.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the quiz database at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        info!("Opened quiz database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        // scores.username is a logical reference only; bundled SQLite enables
        // foreign keys by default
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        let db = Self { conn };
        db.create_tables()?;
        Ok(db)
    }

    /// Creates the questions, users and scores tables if they don't already exist.
    fn create_tables(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(SCHEMA)?;
        debug!("Schema ensured");
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    ///
    /// Dropping a `Database` also closes it, but silently.
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| StorageError::Sqlite(e))?;
        info!("Quiz database closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table_names(db: &Database) -> Vec<String> {
        let mut stmt = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();
        names
    }

    #[test]
    fn test_open_creates_all_tables() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(table_names(&db), vec!["questions", "scores", "users"]);
    }

    #[test]
    fn test_reopen_is_idempotent_and_keeps_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.db");

        let db = Database::open(&path).unwrap();
        db.conn()
            .execute("INSERT INTO questions VALUES ('Q?', 'a')", [])
            .unwrap();
        db.close().unwrap();

        let db = Database::open(&path).unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_foreign_keys_are_not_enforced() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);

        db.conn()
            .execute("INSERT INTO scores (username, score) VALUES ('ghost', 5)", [])
            .unwrap();
    }
}
