//! Accounts domain state

use crate::{AccountRepository, CredentialService};

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub accounts: AccountRepository,
    pub credentials: CredentialService,
    /// Include stored password hashes in account representations
    pub expose_password_hash: bool,
}
