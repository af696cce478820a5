//! Question store
//!
//! Append-only table of question/answer pairs, listed in insertion order.

use log::{debug, info};
use rusqlite::params;

use crate::error::StorageError;
use crate::storage::Database;
use crate::storage::results::Question;
use crate::utils::validation::normalize_answer;

/// Quiz questions with their canonical answers
pub struct QuestionStore<'db> {
    db: &'db Database,
}

impl<'db> QuestionStore<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Inserts a question. The answer is stored trimmed and lower-cased.
    pub fn add(&self, question: &str, answer: &str) -> Result<(), StorageError> {
        self.db.conn().execute(
            "INSERT INTO questions (question, answer) VALUES (?1, ?2)",
            params![question, normalize_answer(answer)],
        )?;
        debug!("Added question: {}", question.trim());
        Ok(())
    }

    /// All questions in insertion order.
    pub fn list(&self) -> Result<Vec<Question>, StorageError> {
        let mut stmt = self
            .db
            .conn()
            .prepare("SELECT question, answer FROM questions ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(Question {
                question: row.get(0)?,
                answer: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Number of stored questions
    pub fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .db
            .conn()
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Seeds the given pairs only if the table holds no questions yet.
    ///
    /// Returns the number of questions inserted.
    pub fn seed_if_empty(&self, pairs: &[(&str, &str)]) -> Result<usize, StorageError> {
        if self.count()? > 0 {
            debug!("Question table already populated, skipping seed");
            return Ok(0);
        }

        for (question, answer) in pairs {
            self.add(question, answer)?;
        }
        info!("Seeded {} questions", pairs.len());
        Ok(pairs.len())
    }
}
