//! Repository implementations for the Accounts domain

pub mod accounts;

pub use accounts::{AccountRepository, ACCOUNTS_COLLECTION};
