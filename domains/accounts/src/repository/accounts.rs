//! Account repository (the identity store)
//!
//! Exposes lookup, insert and listing only; accounts are never updated or
//! deleted through this domain.

use std::sync::Arc;

use folio_common::DocumentId;
use folio_store::{to_body, Document, DocumentStore, StoreResult};

use crate::domain::entities::{Account, NewAccount};

/// Collection holding account documents
pub const ACCOUNTS_COLLECTION: &str = "users";

/// Field whose value is unique across accounts
const EMAIL_FIELD: &str = "email";

#[derive(Clone)]
pub struct AccountRepository {
    store: Arc<dyn DocumentStore>,
}

impl AccountRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn decode(document: Document) -> StoreResult<Account> {
        let stored: NewAccount = document.decode(ACCOUNTS_COLLECTION)?;
        Ok(stored.into_account(document.id))
    }

    /// Find account by email
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        self.store
            .find_one_by(ACCOUNTS_COLLECTION, EMAIL_FIELD, email)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Get account by ID
    pub async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Account>> {
        self.store
            .find_by_id(ACCOUNTS_COLLECTION, id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Insert a new account
    ///
    /// The store claims the email as a unique key, so a concurrent insert of
    /// the same email fails with `StoreError::Duplicate` instead of creating
    /// a second account.
    pub async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        let body = to_body(&account)?;
        let document = self
            .store
            .insert_unique(ACCOUNTS_COLLECTION, EMAIL_FIELD, body)
            .await?;
        Ok(account.into_account(document.id))
    }

    /// List every account in store order
    pub async fn list_all(&self) -> StoreResult<Vec<Account>> {
        self.store
            .find_all(ACCOUNTS_COLLECTION)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }
}
