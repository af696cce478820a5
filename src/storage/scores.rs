//! Score recorder
//!
//! Append-only log of quiz results, one row per completed run.

use log::info;
use rusqlite::params;

use crate::error::StorageError;
use crate::storage::Database;
use crate::storage::results::ScoreEntry;

/// Append-only quiz result log
pub struct ScoreRecorder<'db> {
    db: &'db Database,
}

impl<'db> ScoreRecorder<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Appends one (username, score) row.
    pub fn record(&self, username: &str, score: u32) -> Result<(), StorageError> {
        self.db.conn().execute(
            "INSERT INTO scores (username, score) VALUES (?1, ?2)",
            params![username, score],
        )?;
        info!("Recorded score {} for {}", score, username);
        Ok(())
    }

    /// A user's past scores, oldest first.
    pub fn scores_for(&self, username: &str) -> Result<Vec<ScoreEntry>, StorageError> {
        let mut stmt = self.db.conn().prepare(
            "SELECT username, score FROM scores WHERE username = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![username], |row| {
            Ok(ScoreEntry {
                username: row.get(0)?,
                score: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
