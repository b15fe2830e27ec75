//! Authentication errors

use thiserror::Error;

/// Failures of the credential primitives
///
/// None of these describe a caller mistake; bad credentials are a `false`
/// from [`crate::PasswordHasher::verify`], not an error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication configuration error: {0}")]
    Configuration(String),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Token encoding failed: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid or expired token")]
    InvalidToken,
}
