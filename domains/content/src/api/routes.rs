//! Route definitions for Content domain API

use axum::{routing::get, Router};

use super::handlers::resources;
use super::middleware::ContentState;
use crate::domain::entities::{About, Blog, Project};
use crate::domain::kind::ResourceKind;

/// Create the five CRUD routes of one content kind under `K::PATH`
fn resource_routes<K: ResourceKind>() -> Router<ContentState> {
    Router::new()
        .route(
            K::PATH,
            get(resources::list::<K>).post(resources::create::<K>),
        )
        .route(
            &format!("{}/{{id}}", K::PATH),
            get(resources::get::<K>)
                .put(resources::update::<K>)
                .delete(resources::delete::<K>),
        )
}

/// Create all Content domain API routes
pub fn routes() -> Router<ContentState> {
    Router::new()
        .merge(resource_routes::<Blog>())
        .merge(resource_routes::<About>())
        .merge(resource_routes::<Project>())
}
