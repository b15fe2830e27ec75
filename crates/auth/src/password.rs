//! Password hashing and verification using bcrypt
//!
//! Every hash gets a fresh random salt; verification is delegated to bcrypt,
//! which compares in constant time. Both run on the blocking pool because a
//! cost-10 hash takes tens of milliseconds of CPU.

use crate::error::AuthError;

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Derive a salted hash of `password`
    pub async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check `password` against a stored hash
    ///
    /// A malformed stored hash counts as a mismatch so that callers keep
    /// returning the same generic rejection.
    pub async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        let outcome =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
