pub mod auth;
pub mod config;
pub mod error;
pub mod quiz;
pub mod storage;
pub mod utils;

pub use auth::CredentialService;
pub use crate::config::{AppConfig, CredentialPolicy};
pub use quiz::QuizSession;
pub use storage::{Database, QuestionStore, ScoreRecorder};
