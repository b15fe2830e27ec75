//! Cross-cutting rules checked through the HTTP surface
//!
//! Identifier syntax, no-upsert updates, delete finality, registration
//! uniqueness under concurrency, and internal-failure rendering.

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{assertions, json_request, parse_body, TestApp, TEST_PASSWORD};

const MALFORMED_IDS: [&str; 3] = ["123", "not-a-valid-id", "65f1c0de9b1e8a2f3c4d5e6f"];

mod test_identifiers {
    use super::*;

    #[tokio::test]
    async fn test_malformed_id_is_400_without_store_access() {
        let app = TestApp::new().await.unwrap();

        for kind in ["blogs", "about", "projects"] {
            for id in MALFORMED_IDS {
                let uri = format!("/api/v1/{}/{}", kind, id);
                for (method, body) in [
                    (Method::GET, None),
                    (Method::PUT, Some(json!({"title": "x"}))),
                    (Method::DELETE, None),
                ] {
                    let (status, response) = app.send(method, &uri, body).await;
                    assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
                    assertions::assert_failure(&response, "Invalid id format");
                }
            }
        }

        assert_eq!(app.store.operation_count(), 0);
    }
}

mod test_resource_rules {
    use super::*;

    #[tokio::test]
    async fn test_update_missing_never_creates() {
        let app = TestApp::new().await.unwrap();
        let uri = format!("/api/v1/projects/{}", Uuid::new_v4());

        let (status, _) = app
            .send(Method::PUT, &uri, Some(json!({"title": "ghost"})))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(app.store.document_count("projects"), 0);
    }

    #[tokio::test]
    async fn test_deleted_resource_stays_gone() {
        let app = TestApp::new().await.unwrap();
        let (_, created) = app
            .send(Method::POST, "/api/v1/blogs", Some(json!({"title": "A"})))
            .await;
        let uri = format!("/api/v1/blogs/{}", created["data"]["_id"].as_str().unwrap());

        let (status, _) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_registration_rules {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_duplicate_registrations_yield_one_account() {
        let app = TestApp::new().await.unwrap();

        let requests = (0..8).map(|_| {
            let router = app.test_router();
            tokio::spawn(async move {
                let request = json_request(
                    Method::POST,
                    "/api/v1/register",
                    Some(json!({"email": "race@example.com", "password": TEST_PASSWORD})),
                );
                router.oneshot(request).await.unwrap().status()
            })
        });

        let mut created = 0;
        for handle in requests.collect::<Vec<_>>() {
            match handle.await.unwrap() {
                StatusCode::CREATED => created += 1,
                status => assert_eq!(status, StatusCode::BAD_REQUEST),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(app.store.document_count("users"), 1);
    }
}

mod test_internal_failures {
    use super::*;

    #[tokio::test]
    async fn test_store_failure_is_500_envelope() {
        let app = TestApp::new().await.unwrap();
        app.store.set_unavailable(true);

        let response = app
            .test_router()
            .oneshot(json_request(Method::GET, "/api/v1/blogs", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse_body(response).await;
        assertions::assert_failure(&body, "Error fetching blogs");
    }

    #[tokio::test]
    async fn test_login_store_failure_is_500() {
        let app = TestApp::new().await.unwrap();
        app.store.set_unavailable(true);

        let (status, body) = app.login("ada@example.com", TEST_PASSWORD).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
