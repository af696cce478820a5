//! Error types
//!
//! Defines domain-specific error types for each module of the quiz application.

use std::fmt;
use std::io;

/// Credential input validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    EmptyInput,
    UsernameTooShort { min: usize },
    PasswordTooShort { min: usize },
    NonAlphanumeric,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyInput => write!(f, "Username or password cannot be empty"),
            AuthError::UsernameTooShort { min } => {
                write!(f, "Username must be at least {} characters long", min)
            }
            AuthError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            AuthError::NonAlphanumeric => write!(
                f,
                "Username and password must contain only alphanumeric characters"
            ),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    UsernameTaken(String),
    CorruptRecord(String),
    Sqlite(rusqlite::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::UsernameTaken(u) => write!(f, "Username already exists: {}", u),
            StorageError::CorruptRecord(u) => {
                write!(f, "Stored credential record is malformed for user: {}", u)
            }
            StorageError::Sqlite(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Sqlite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        StorageError::Sqlite(error)
    }
}

/// Quiz session errors
#[derive(Debug)]
pub enum QuizError {
    Console(io::Error),
    Storage(StorageError),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Console(e) => write!(f, "Console I/O error: {}", e),
            QuizError::Storage(e) => write!(f, "Quiz storage error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {}

impl From<io::Error> for QuizError {
    fn from(error: io::Error) -> Self {
        QuizError::Console(error)
    }
}

impl From<StorageError> for QuizError {
    fn from(error: StorageError) -> Self {
        QuizError::Storage(error)
    }
}

/// General application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Storage(StorageError),
    Quiz(QuizError),
    Prompt(String),
    RegistrationFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Quiz(e) => write!(f, "Quiz error: {}", e),
            AppError::Prompt(e) => write!(f, "Prompt error: {}", e),
            AppError::RegistrationFailed(u) => {
                write!(f, "Could not log in or register user: {}", u)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::Storage(error)
    }
}

impl From<QuizError> for AppError {
    fn from(error: QuizError) -> Self {
        AppError::Quiz(error)
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(error: dialoguer::Error) -> Self {
        AppError::Prompt(error.to_string())
    }
}
