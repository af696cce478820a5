//! Error handlers
//!
//! Provides error reporting and exit-code mapping.

use crate::error::types::AppError;
use log::error;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("Digital Odyssey error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 78,
        AppError::RegistrationFailed(_) => 77,
        AppError::Storage(_) => 74,
        AppError::Quiz(_) => 74,
        AppError::Prompt(_) => 66,
    }
}
