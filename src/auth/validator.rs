//! Registration input validator
//!
//! Usernames and passwords must be non-empty, meet the configured minimum
//! lengths and consist only of letters and digits.

use crate::config::CredentialPolicy;
use crate::error::AuthError;
use crate::utils::validation::{char_len, is_alphanumeric};

/// Checks a (username, password) pair against the policy, first failure wins.
pub fn validate_registration(
    username: &str,
    password: &str,
    policy: &CredentialPolicy,
) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyInput);
    }

    if char_len(username) < policy.min_username_length {
        return Err(AuthError::UsernameTooShort {
            min: policy.min_username_length,
        });
    }

    if char_len(password) < policy.min_password_length {
        return Err(AuthError::PasswordTooShort {
            min: policy.min_password_length,
        });
    }

    if !is_alphanumeric(username) || !is_alphanumeric(password) {
        return Err(AuthError::NonAlphanumeric);
    }

    Ok(())
}
