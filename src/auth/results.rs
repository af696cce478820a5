//! Authentication result types
//!
//! Defines outcome enums returned by the detailed credential operations.

use crate::error::AuthError;

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    Invalid(AuthError),
    UsernameTaken,
    StorageFailure,
}

impl RegisterOutcome {
    /// True only when a new user row was written
    pub fn is_success(&self) -> bool {
        matches!(self, RegisterOutcome::Registered)
    }
}

/// Result of a login attempt
///
/// Unknown users and wrong passwords both map to `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
    StorageFailure,
}

impl LoginOutcome {
    /// True only when the password matched
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated)
    }
}
