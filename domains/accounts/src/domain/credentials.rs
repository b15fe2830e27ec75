//! Registration and login
//!
//! Registration looks the email up first and rejects known emails with a
//! conflict. The lookup alone would race against a concurrent registration
//! of the same email, so the insert also goes through the store's unique-key
//! path and a duplicate reported there is the same conflict.
//!
//! Login never tells an unknown email apart from a wrong password.

use folio_auth::{PasswordHasher, TokenIssuer};
use folio_common::{Error, Result, ResultExt};
use folio_store::StoreError;

use crate::domain::entities::{Account, NewAccount};
use crate::repository::AccountRepository;

/// Message for a registration whose email is taken
pub const ACCOUNT_EXISTS_MESSAGE: &str = "User already exists";

/// The only message a failed login ever returns
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub account: Account,
}

#[derive(Clone)]
pub struct CredentialService {
    accounts: AccountRepository,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl CredentialService {
    pub fn new(accounts: AccountRepository, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Register a new account
    pub async fn register(
        &self,
        name: Option<String>,
        email: String,
        password: &str,
    ) -> Result<Account> {
        let existing = self
            .accounts
            .find_by_email(&email)
            .await
            .or_internal("Error registering user")?;
        if existing.is_some() {
            return Err(Error::Conflict(ACCOUNT_EXISTS_MESSAGE.to_string()));
        }

        let password_hash = self
            .hasher
            .hash(password)
            .await
            .or_internal("Error registering user")?;

        let account = self
            .accounts
            .insert(NewAccount::new(name, email, password_hash))
            .await
            .map_err(|e| match e {
                StoreError::Duplicate { .. } => {
                    tracing::info!("Concurrent registration lost the unique-email race");
                    Error::Conflict(ACCOUNT_EXISTS_MESSAGE.to_string())
                }
                other => Error::internal("Error registering user", other),
            })?;

        tracing::info!(account_id = %account.id, "Account registered");
        Ok(account)
    }

    /// Verify credentials and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let Some(account) = self
            .accounts
            .find_by_email(email)
            .await
            .or_internal("Error logging in")?
        else {
            tracing::debug!(reason = "unknown_email", "Login rejected");
            return Err(invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(password, &account.password_hash)
            .await
            .or_internal("Error logging in")?;
        if !matches {
            tracing::debug!(account_id = %account.id, reason = "password_mismatch", "Login rejected");
            return Err(invalid_credentials());
        }

        let token = self
            .tokens
            .issue(&account.id.to_string(), &account.email)
            .or_internal("Error logging in")?;

        tracing::info!(account_id = %account.id, "Login succeeded");
        Ok(Session { token, account })
    }
}

fn invalid_credentials() -> Error {
    Error::Authentication(INVALID_CREDENTIALS_MESSAGE.to_string())
}
