//! Folio application composition root
//!
//! Composes the Accounts and Content domain routers into a single application
//! over one shared document store.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use folio_accounts::{AccountRepository, AccountsState, CredentialService};
use folio_auth::{AuthConfig, PasswordHasher, TokenIssuer};
use folio_common::Config;
use folio_content::ContentState;
use folio_store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use serde_json::{json, Value};

/// Open the store named by the configuration
///
/// PostgreSQL when `DATABASE_URL` is set (migrations are applied before the
/// store is returned), otherwise a fresh in-memory store.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn DocumentStore>, anyhow::Error> {
    match &config.database_url {
        Some(url) => {
            let store = PgDocumentStore::connect(url).await?;
            store.migrate().await?;
            tracing::info!("Using PostgreSQL document store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory document store");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

/// Create the main application router with all routes
pub async fn create_app(
    config: &Config,
    store: Arc<dyn DocumentStore>,
) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::from_config(config)?;

    // Accounts domain state
    let accounts = AccountRepository::new(Arc::clone(&store));
    let credentials = CredentialService::new(
        accounts.clone(),
        PasswordHasher::new(auth_config.bcrypt_cost),
        TokenIssuer::new(&auth_config),
    );
    let accounts_state = AccountsState {
        accounts,
        credentials,
        expose_password_hash: config.expose_password_hash,
    };

    // Content domain state
    let content_state = ContentState::new(store);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(folio_accounts::routes().with_state(accounts_state))
        .merge(folio_content::routes().with_state(content_state));

    Ok(app)
}

/// Liveness endpoint
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Server is running smoothly",
        "timestamp": Utc::now(),
    }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
