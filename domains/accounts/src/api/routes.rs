//! Route definitions for Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::AccountsState;

/// Create registration and login routes
fn auth_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/v1/register", post(auth::register))
        .route("/api/v1/login", post(auth::login))
}

/// Create account listing routes
fn user_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/v1/users", get(users::list_users))
        .route("/api/v1/users/{id}", get(users::get_user))
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}
