//! Content endpoint integration tests
//!
//! The same five operations are served for blogs, about and projects:
//! - POST   /api/v1/{kind}
//! - GET    /api/v1/{kind}
//! - GET    /api/v1/{kind}/{id}
//! - PUT    /api/v1/{kind}/{id}
//! - DELETE /api/v1/{kind}/{id}

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assertions, TestApp};

fn blog(title: &str) -> Value {
    json!({"image": "cover.png", "title": title, "description": "body"})
}

/// Helper: create a resource and return its id
async fn create(app: &TestApp, path: &str, fields: Value) -> String {
    let (status, body) = app.send(Method::POST, path, Some(fields)).await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    body["data"]["_id"].as_str().unwrap().to_string()
}

mod test_blogs {
    use super::*;

    #[tokio::test]
    async fn test_create_blog_returns_201_with_timestamps() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(Method::POST, "/api/v1/blogs", Some(blog("A")))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assertions::assert_success(&body);
        assert_eq!(body["message"], "Blog added successfully");
        assert_eq!(body["data"]["title"], "A");
        assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
        assert_eq!(body["data"]["createdAt"], body["data"]["publishedAt"]);
    }

    #[tokio::test]
    async fn test_list_blogs() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app.send(Method::GET, "/api/v1/blogs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));

        create(&app, "/api/v1/blogs", blog("A")).await;
        create(&app, "/api/v1/blogs", blog("B")).await;

        let (_, body) = app.send(Method::GET, "/api/v1/blogs", None).await;
        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_get_blog_returns_created_fields() {
        let app = TestApp::new().await.unwrap();
        let id = create(&app, "/api/v1/blogs", blog("A")).await;

        let (status, body) = app
            .send(Method::GET, &format!("/api/v1/blogs/{}", id), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["_id"], id.as_str());
        assert_eq!(body["data"]["title"], "A");
        assert_eq!(body["data"]["image"], "cover.png");
    }

    #[tokio::test]
    async fn test_update_blog_keeps_created_at() {
        let app = TestApp::new().await.unwrap();
        let (_, created) = app
            .send(Method::POST, "/api/v1/blogs", Some(blog("A")))
            .await;
        let id = created["data"]["_id"].as_str().unwrap();

        let (status, body) = app
            .send(Method::PUT, &format!("/api/v1/blogs/{}", id), Some(blog("B")))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Blog updated successfully");
        assert_eq!(body["data"]["title"], "B");
        assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);
    }

    #[tokio::test]
    async fn test_delete_blog() {
        let app = TestApp::new().await.unwrap();
        let id = create(&app, "/api/v1/blogs", blog("A")).await;

        let (status, body) = app
            .send(Method::DELETE, &format!("/api/v1/blogs/{}", id), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Blog deleted successfully");
        assert_eq!(body["data"], json!({"_id": id, "deletedCount": 1}));
    }

    #[tokio::test]
    async fn test_unknown_blog_is_404() {
        let app = TestApp::new().await.unwrap();
        let uri = format!("/api/v1/blogs/{}", Uuid::new_v4());

        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(blog("B"))),
            (Method::DELETE, None),
        ] {
            let (status, response) = app.send(method, &uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assertions::assert_failure(&response, "Blog not found");
        }
    }
}

mod test_about {
    use super::*;

    #[tokio::test]
    async fn test_about_has_no_timestamps() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(
                Method::POST,
                "/api/v1/about",
                Some(json!({
                    "image": "me.png",
                    "occupation": "Engineer",
                    "description": "Hi",
                    "email": "me@example.com",
                    "phone": "555-0100"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "About added successfully");
        assert_eq!(body["data"]["occupation"], "Engineer");
        assert_eq!(body["data"]["phone"], "555-0100");
        assert!(body["data"].get("createdAt").is_none());
    }

    #[tokio::test]
    async fn test_update_about() {
        let app = TestApp::new().await.unwrap();
        let id = create(&app, "/api/v1/about", json!({"occupation": "Engineer"})).await;

        let (status, body) = app
            .send(
                Method::PUT,
                &format!("/api/v1/about/{}", id),
                Some(json!({"occupation": "Writer"})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "About updated successfully");
        assert_eq!(body["data"]["occupation"], "Writer");
    }
}

mod test_projects {
    use super::*;

    #[tokio::test]
    async fn test_project_fields_use_camel_case() {
        let app = TestApp::new().await.unwrap();
        let id = create(
            &app,
            "/api/v1/projects",
            json!({
                "title": "Folio",
                "subTitle": "Portfolio backend",
                "gitLink": "https://git.example.com/folio",
                "demoLink": "https://folio.example.com"
            }),
        )
        .await;

        let (_, body) = app
            .send(Method::GET, &format!("/api/v1/projects/{}", id), None)
            .await;

        assert_eq!(body["data"]["subTitle"], "Portfolio backend");
        assert_eq!(body["data"]["gitLink"], "https://git.example.com/folio");
        assert_eq!(body["data"]["demoLink"], "https://folio.example.com");
        assert!(body["data"]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let app = TestApp::new().await.unwrap();
        let id = create(&app, "/api/v1/projects", json!({"title": "Folio"})).await;

        let (status, body) = app
            .send(Method::GET, &format!("/api/v1/blogs/{}", id), None)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assertions::assert_failure(&body, "Blog not found");
    }
}
