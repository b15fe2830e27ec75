//! Registration and login handlers
//!
//! - POST /api/v1/register - Create an account
//! - POST /api/v1/login - Exchange credentials for a session token

use axum::{extract::State, http::StatusCode, Json};
use folio_common::{ApiResponse, JsonBody, Result};
use serde::{Deserialize, Serialize};

use crate::api::middleware::AccountsState;
use crate::domain::entities::AccountView;

/// Request for registering an account
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Request for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AccountView,
}

/// POST /api/v1/register
pub async fn register(
    State(state): State<AccountsState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    state
        .credentials
        .register(request.name, request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message("User registered successfully")),
    ))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AccountsState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let session = state
        .credentials
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: session.token,
        user: session.account.view(state.expose_password_hash),
    }))
}
