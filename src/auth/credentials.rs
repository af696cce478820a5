//! Credential record format and hashing
//!
//! A stored record is 64 hex characters of salt immediately followed by the
//! hex-encoded PBKDF2-HMAC-SHA512 derived key. The fixed salt width makes the
//! split unambiguous, so there is no separator.

use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};

/// Width of the hex-encoded salt prefix (SHA-256 output).
pub const SALT_HEX_LEN: usize = 64;

/// PBKDF2 output length; matches the SHA-512 digest size.
pub const DERIVED_KEY_BYTES: usize = 64;

/// Total length of an encoded record.
pub const RECORD_LEN: usize = SALT_HEX_LEN + DERIVED_KEY_BYTES * 2;

/// Salt and derived key of one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    salt: String,
    derived_key: String,
}

impl CredentialRecord {
    /// Hash a password under a freshly generated salt.
    pub fn create(password: &str, salt_entropy_bytes: usize, iterations: u32) -> Self {
        let salt = generate_salt(salt_entropy_bytes);
        let derived_key = derive_key(password, &salt, iterations);
        Self { salt, derived_key }
    }

    /// Split a stored record into salt and key. `None` if it is malformed.
    pub fn parse(stored: &str) -> Option<Self> {
        if stored.len() != RECORD_LEN || !stored.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let (salt, derived_key) = stored.split_at(SALT_HEX_LEN);
        Some(Self {
            salt: salt.to_string(),
            derived_key: derived_key.to_string(),
        })
    }

    /// Wire form: salt || derived key.
    pub fn encode(&self) -> String {
        format!("{}{}", self.salt, self.derived_key)
    }

    /// Recompute the key for `password` under this record's salt and compare.
    pub fn verify(&self, password: &str, iterations: u32) -> bool {
        let attempt = derive_key(password, &self.salt, iterations);
        constant_time_eq(attempt.as_bytes(), self.derived_key.as_bytes())
    }
}

/// Random bytes from the thread CSPRNG, SHA-256'd and hex-encoded (64 chars).
pub fn generate_salt(entropy_bytes: usize) -> String {
    let mut bytes = vec![0u8; entropy_bytes];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(Sha256::digest(&bytes))
}

/// PBKDF2-HMAC-SHA512 over the password's UTF-8 bytes, keyed by the salt's
/// ASCII bytes, hex-encoded.
pub fn derive_key(password: &str, salt: &str, iterations: u32) -> String {
    let mut key = [0u8; DERIVED_KEY_BYTES];
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
    hex::encode(key)
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
