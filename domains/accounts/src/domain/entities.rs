//! Domain entities for the Accounts domain

use folio_common::DocumentId;
use serde::{Deserialize, Serialize};

/// A registered identity
///
/// Created by registration and never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: DocumentId,
    pub name: Option<String>,
    pub email: String,
    /// bcrypt hash; never the plaintext
    pub password_hash: String,
}

/// Account body as persisted in the `users` collection
///
/// The hash is stored under `password`, the field name existing data uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl NewAccount {
    pub fn new(name: Option<String>, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }

    pub fn into_account(self, id: DocumentId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// Account representation returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: Option<String>,
    pub email: String,
    /// Present only when hash exposure is switched on for old clients
    #[serde(rename = "password", skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl Account {
    /// Caller-facing view, optionally carrying the stored hash
    pub fn view(&self, expose_password_hash: bool) -> AccountView {
        AccountView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            password_hash: expose_password_hash.then(|| self.password_hash.clone()),
        }
    }
}
