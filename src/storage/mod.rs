//! SQLite storage
//!
//! Handles the database handle and the credential, question and score tables.

pub mod credentials;
pub mod database;
pub mod questions;
pub mod results;
pub mod scores;

pub use credentials::CredentialStore;
pub use database::Database;
pub use questions::QuestionStore;
pub use results::{Question, ScoreEntry};
pub use scores::ScoreRecorder;
