//! Domain layer for the Accounts domain

pub mod credentials;
pub mod entities;
