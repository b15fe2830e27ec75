//! Credential primitives for Folio
//!
//! Provides slow salted password hashing and signed, time-boxed session
//! tokens. Nothing here touches the document store; the accounts domain
//! composes these into registration and login.

mod claims;
mod config;
mod error;
mod jwt;
mod password;

pub use claims::SessionClaims;
pub use config::{parse_expires_in, AuthConfig};
pub use error::AuthError;
pub use jwt::TokenIssuer;
pub use password::PasswordHasher;
