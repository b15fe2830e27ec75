//! Generic resource handlers, one instantiation per content kind
//!
//! - POST   {path}      - Create
//! - GET    {path}      - List
//! - GET    {path}/{id} - Get one
//! - PUT    {path}/{id} - Replace fields
//! - DELETE {path}/{id} - Delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use folio_common::{ApiResponse, JsonBody, Result};

use crate::api::middleware::ContentState;
use crate::domain::entities::{DeleteResult, Resource};
use crate::domain::kind::{messages, ResourceKind};

/// POST {path}
pub async fn create<K: ResourceKind>(
    State(state): State<ContentState>,
    JsonBody(fields): JsonBody<K::Fields>,
) -> Result<(StatusCode, Json<ApiResponse<Resource<K>>>)> {
    let resource = state.service::<K>().create(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(messages::added::<K>(), resource)),
    ))
}

/// GET {path}
pub async fn list<K: ResourceKind>(
    State(state): State<ContentState>,
) -> Result<Json<ApiResponse<Vec<Resource<K>>>>> {
    let resources = state.service::<K>().list().await?;
    Ok(Json(ApiResponse::data(resources)))
}

/// GET {path}/{id}
pub async fn get<K: ResourceKind>(
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Resource<K>>>> {
    let resource = state.service::<K>().get(&id).await?;
    Ok(Json(ApiResponse::data(resource)))
}

/// PUT {path}/{id}
pub async fn update<K: ResourceKind>(
    State(state): State<ContentState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<K::Fields>,
) -> Result<Json<ApiResponse<Resource<K>>>> {
    let resource = state.service::<K>().update(&id, fields).await?;
    Ok(Json(ApiResponse::with_message(
        messages::updated::<K>(),
        resource,
    )))
}

/// DELETE {path}/{id}
pub async fn delete<K: ResourceKind>(
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteResult>>> {
    let result = state.service::<K>().delete(&id).await?;
    Ok(Json(ApiResponse::with_message(
        messages::deleted::<K>(),
        result,
    )))
}
