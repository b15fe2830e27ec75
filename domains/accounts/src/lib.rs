//! Accounts domain: identity store, registration, login

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::credentials::{CredentialService, Session};
pub use domain::entities::{Account, AccountView, NewAccount};

// Re-export repository types
pub use repository::{AccountRepository, ACCOUNTS_COLLECTION};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
