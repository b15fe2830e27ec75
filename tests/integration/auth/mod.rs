//! Registration and login endpoint integration tests
//!
//! - POST /api/v1/register
//! - POST /api/v1/login

use axum::http::{Method, StatusCode};
use folio_common::DocumentId;
use serde_json::json;

use crate::common::{assertions, TestApp, TEST_PASSWORD};

mod test_register {
    use super::*;

    #[tokio::test]
    async fn test_register_returns_201() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app.register("ada@example.com", TEST_PASSWORD).await;

        assert_eq!(status, StatusCode::CREATED);
        assertions::assert_success(&body);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(app.store.document_count("users"), 1);
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let app = TestApp::new().await.unwrap();
        app.register("ada@example.com", TEST_PASSWORD).await;

        let (_, body) = app.send(Method::GET, "/api/v1/users", None).await;
        let users = body["data"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["email"], "ada@example.com");
        assert!(users[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let app = TestApp::new().await.unwrap();
        app.register("ada@example.com", TEST_PASSWORD).await;

        let (status, body) = app.register("ada@example.com", "another password").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assertions::assert_failure(&body, "User already exists");
        assert_eq!(app.store.document_count("users"), 1);
    }

    #[tokio::test]
    async fn test_register_without_name_succeeds() {
        let app = TestApp::new().await.unwrap();

        let (status, _) = app
            .send(
                Method::POST,
                "/api/v1/register",
                Some(json!({"email": "ada@example.com", "password": TEST_PASSWORD})),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_register_malformed_body_is_400_envelope() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(
                Method::POST,
                "/api/v1/register",
                Some(json!({"email": "ada@example.com"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
        assert_eq!(app.store.document_count("users"), 0);
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_verifiable_token() {
        let app = TestApp::new().await.unwrap();
        app.register("ada@example.com", TEST_PASSWORD).await;

        let (status, body) = app.login("ada@example.com", TEST_PASSWORD).await;

        assert_eq!(status, StatusCode::OK);
        assertions::assert_success(&body);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert!(body["user"].get("password").is_none());

        let token = body["token"].as_str().unwrap();
        let claims = app.token_issuer().unwrap().verify(token).unwrap();
        let user_id = body["user"]["_id"].as_str().unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(DocumentId::parse(user_id).is_ok());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = TestApp::new().await.unwrap();
        app.register("ada@example.com", TEST_PASSWORD).await;

        let (wrong_status, wrong_body) = app.login("ada@example.com", "wrong password").await;
        let (unknown_status, unknown_body) = app.login("nobody@example.com", TEST_PASSWORD).await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assertions::assert_failure(&wrong_body, "Invalid email or password");
        assert_eq!(wrong_body, unknown_body);
    }

    #[tokio::test]
    async fn test_login_exposes_hash_when_configured() {
        let app = TestApp::exposing_password_hashes().await.unwrap();
        app.register("ada@example.com", TEST_PASSWORD).await;

        let (_, body) = app.login("ada@example.com", TEST_PASSWORD).await;

        let hash = body["user"]["password"].as_str().unwrap();
        assert!(hash.starts_with("$2"));
        assert_ne!(hash, TEST_PASSWORD);
    }
}
