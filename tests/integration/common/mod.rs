//! Common test utilities and fixtures for integration tests
//!
//! - Test application over a fresh in-memory store
//! - Request builders and body parsing
//! - Account fixtures

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use folio_auth::{AuthConfig, TokenIssuer};
use folio_common::{Config, LogFormat};
use folio_store::MemoryDocumentStore;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret
pub const TEST_PASSWORD: &str = "correct horse battery staple"; // pragma: allowlist secret

/// Configuration used by every test app; the lowest bcrypt cost keeps tests fast
pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        expires_in: "1h".to_string(),
        bcrypt_cost: 4,
        expose_password_hash: false,
        rust_log: "folio=debug".to_string(),
        log_format: LogFormat::Pretty,
        port: 0,
    }
}

/// Test application with a handle on its store
pub struct TestApp {
    pub router: Router,
    pub store: MemoryDocumentStore,
    pub config: Config,
}

impl TestApp {
    /// Create a new test application over an empty store
    pub async fn new() -> Result<Self> {
        Self::with_config(test_config()).await
    }

    /// Test application that includes stored hashes in account representations
    pub async fn exposing_password_hashes() -> Result<Self> {
        let mut config = test_config();
        config.expose_password_hash = true;
        Self::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Result<Self> {
        let store = MemoryDocumentStore::new();
        let router = folio_app::create_app(&config, Arc::new(store.clone())).await?;
        Ok(Self {
            router,
            store,
            config,
        })
    }

    pub fn test_router(&self) -> Router {
        self.router.clone()
    }

    /// Token issuer sharing the app's secret, for verifying issued tokens
    pub fn token_issuer(&self) -> Result<TokenIssuer> {
        Ok(TokenIssuer::new(&AuthConfig::from_config(&self.config)?))
    }

    /// Send one request and return status plus parsed JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self
            .test_router()
            .oneshot(json_request(method, uri, body))
            .await
            .unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    /// Register an account through the API
    pub async fn register(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/v1/register",
            Some(json!({"name": "Test User", "email": email, "password": password})),
        )
        .await
    }

    /// Log in through the API
    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/v1/login",
            Some(json!({"email": email, "password": password})),
        )
        .await
    }
}

/// Helper: build a JSON request
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub mod assertions {
    use serde_json::Value;

    /// Failure envelope with the given message
    pub fn assert_failure(body: &Value, message: &str) {
        assert_eq!(body["success"], false, "body: {}", body);
        assert_eq!(body["message"], message, "body: {}", body);
    }

    /// Success envelope
    pub fn assert_success(body: &Value) {
        assert_eq!(body["success"], true, "body: {}", body);
    }
}
