//! Authentication system
//!
//! Handles credential validation, salted password hashing and login verification.

pub mod credentials;
pub mod results;
pub mod service;
pub mod validator;

pub use credentials::CredentialRecord;
pub use results::{LoginOutcome, RegisterOutcome};
pub use service::CredentialService;
pub use validator::validate_registration;
