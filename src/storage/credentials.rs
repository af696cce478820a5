//! Credential store
//!
//! Durable username → credential record table. The primary key on `username`
//! rejects a second insert before anything is overwritten.

use log::debug;
use rusqlite::{ErrorCode, OptionalExtension, params};

use crate::error::StorageError;
use crate::storage::Database;

/// Username to credential record table
pub struct CredentialStore<'db> {
    db: &'db Database,
}

impl<'db> CredentialStore<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }

    /// Inserts a new user row. Fails with `UsernameTaken` if the name exists.
    pub fn insert(&self, username: &str, credential_record: &str) -> Result<(), StorageError> {
        let result = self.db.conn().execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, credential_record],
        );

        match result {
            Ok(_) => {
                debug!("Stored credentials for {}", username);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StorageError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Case-sensitive lookup of a user's credential record.
    pub fn find(&self, username: &str) -> Result<Option<String>, StorageError> {
        let record = self
            .db
            .conn()
            .query_row(
                "SELECT password FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        Ok(record)
    }
}
