//! Credential service
//!
//! Registration and login over the credential store. Neither operation
//! propagates errors: every failure is logged and reported through the
//! returned outcome.

use log::{error, info, warn};
use std::hint::black_box;

use crate::auth::credentials::{CredentialRecord, SALT_HEX_LEN, derive_key};
use crate::auth::results::{LoginOutcome, RegisterOutcome};
use crate::auth::validator::validate_registration;
use crate::config::CredentialPolicy;
use crate::error::StorageError;
use crate::storage::{CredentialStore, Database};

/// Registers and authenticates users against the `users` table
pub struct CredentialService<'db> {
    store: CredentialStore<'db>,
    policy: CredentialPolicy,
}

impl<'db> CredentialService<'db> {
    pub fn new(db: &'db Database, policy: CredentialPolicy) -> Self {
        Self {
            store: CredentialStore::new(db),
            policy,
        }
    }

    /// Registers a user, returning `true` only if a new row was written.
    pub fn register(&self, username: &str, password: &str) -> bool {
        self.register_detailed(username, password).is_success()
    }

    /// Returns `true` only if the user exists and the password matches.
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.login_detailed(username, password).is_success()
    }

    /// Validates the input, hashes the password under a fresh salt and stores
    /// the record. Validation failures write nothing.
    pub fn register_detailed(&self, username: &str, password: &str) -> RegisterOutcome {
        if let Err(e) = validate_registration(username, password, &self.policy) {
            error!("{}", e);
            return RegisterOutcome::Invalid(e);
        }

        let record = CredentialRecord::create(
            password,
            self.policy.salt_entropy_bytes,
            self.policy.pbkdf2_iterations,
        );

        match self.store.insert(username, &record.encode()) {
            Ok(()) => {
                info!("Registered user {}", username);
                RegisterOutcome::Registered
            }
            Err(StorageError::UsernameTaken(_)) => {
                error!("Username already exists. Please choose a different username.");
                RegisterOutcome::UsernameTaken
            }
            Err(e) => {
                error!("Error registering user {}: {}", username, e);
                RegisterOutcome::StorageFailure
            }
        }
    }

    /// Looks up the stored record and verifies the password against it.
    pub fn login_detailed(&self, username: &str, password: &str) -> LoginOutcome {
        let stored = match self.store.find(username) {
            Ok(stored) => stored,
            Err(e) => {
                error!("Error logging in user {}: {}", username, e);
                return LoginOutcome::StorageFailure;
            }
        };

        let Some(stored) = stored else {
            // Same KDF cost as a known user
            black_box(derive_key(
                black_box(password),
                &"0".repeat(SALT_HEX_LEN),
                self.policy.pbkdf2_iterations,
            ));
            warn!("Login failed for {}", username);
            return LoginOutcome::Rejected;
        };

        let Some(record) = CredentialRecord::parse(&stored) else {
            error!(
                "Error logging in user {}: {}",
                username,
                StorageError::CorruptRecord(username.to_string())
            );
            return LoginOutcome::StorageFailure;
        };

        if record.verify(password, self.policy.pbkdf2_iterations) {
            info!("User {} logged in", username);
            LoginOutcome::Authenticated
        } else {
            warn!("Login failed for {}", username);
            LoginOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::RECORD_LEN;
    use crate::error::AuthError;

    fn fast_policy() -> CredentialPolicy {
        CredentialPolicy {
            pbkdf2_iterations: 1_000,
            ..CredentialPolicy::default()
        }
    }

    fn stored_record(db: &Database, username: &str) -> Option<String> {
        CredentialStore::new(db).find(username).unwrap()
    }

    #[test]
    fn test_register_then_login() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());

        assert!(service.register("alice", "wonderland1"));
        assert!(service.login("alice", "wonderland1"));
        assert!(!service.login("alice", "wonderland2"));
        assert!(!service.login("Alice", "wonderland1"));
    }

    #[test]
    fn test_unknown_user_is_rejected_like_bad_password() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());
        service.register("alice", "wonderland1");

        assert_eq!(service.login_detailed("ghost", "whatever1"), LoginOutcome::Rejected);
        assert_eq!(service.login_detailed("alice", "whatever1"), LoginOutcome::Rejected);
    }

    #[test]
    fn test_duplicate_registration_keeps_first_record() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());

        assert!(service.register("alice", "wonderland1"));
        let first = stored_record(&db, "alice").unwrap();

        assert_eq!(
            service.register_detailed("alice", "otherpass9"),
            RegisterOutcome::UsernameTaken
        );
        assert_eq!(stored_record(&db, "alice").unwrap(), first);
        assert!(service.login("alice", "wonderland1"));
        assert!(!service.login("alice", "otherpass9"));
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());

        assert_eq!(
            service.register_detailed("ab", "longenough1"),
            RegisterOutcome::Invalid(AuthError::UsernameTooShort { min: 3 })
        );
        assert!(!service.register("validuser", "short1"));
        assert!(!service.register("valid user", "password1"));
        assert!(stored_record(&db, "ab").is_none());
        assert!(stored_record(&db, "validuser").is_none());
        assert!(stored_record(&db, "valid user").is_none());
    }

    #[test]
    fn test_same_password_gets_distinct_records() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());

        assert!(service.register("alice", "samepass1"));
        assert!(service.register("bobby", "samepass1"));
        let a = stored_record(&db, "alice").unwrap();
        let b = stored_record(&db, "bobby").unwrap();
        assert_eq!(a.len(), RECORD_LEN);
        assert_ne!(a, b);
        assert_ne!(&a[..SALT_HEX_LEN], &b[..SALT_HEX_LEN]);
    }

    #[test]
    fn test_corrupt_record_fails_closed() {
        let db = Database::open_in_memory().unwrap();
        CredentialStore::new(&db).insert("mallory", "not-a-record").unwrap();
        let service = CredentialService::new(&db, fast_policy());

        assert_eq!(
            service.login_detailed("mallory", "whatever1"),
            LoginOutcome::StorageFailure
        );
    }

    #[test]
    fn test_database_errors_fail_closed() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, fast_policy());
        assert!(service.register("alice", "wonderland1"));

        db.conn().execute_batch("DROP TABLE users;").unwrap();

        assert_eq!(
            service.login_detailed("alice", "wonderland1"),
            LoginOutcome::StorageFailure
        );
        assert_eq!(
            service.register_detailed("bobby", "password1"),
            RegisterOutcome::StorageFailure
        );
        assert!(!service.login("alice", "wonderland1"));
        assert!(!service.register("bobby", "password1"));
    }

    #[test]
    fn test_default_policy_parameters() {
        let db = Database::open_in_memory().unwrap();
        let service = CredentialService::new(&db, CredentialPolicy::default());

        assert!(service.register("carol", "password1"));
        let stored = stored_record(&db, "carol").unwrap();
        let salt = &stored[..SALT_HEX_LEN];
        assert_eq!(&stored[SALT_HEX_LEN..], derive_key("password1", salt, 100_000));
        assert!(service.login("carol", "password1"));
    }
}
