//! Account listing handlers
//!
//! - GET /api/v1/users - List accounts
//! - GET /api/v1/users/{id} - Get one account

use axum::{
    extract::{Path, State},
    Json,
};
use folio_common::{ApiResponse, DocumentId, Error, Result, ResultExt};

use crate::api::middleware::AccountsState;
use crate::domain::entities::AccountView;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AccountsState>,
) -> Result<Json<ApiResponse<Vec<AccountView>>>> {
    let accounts = state
        .accounts
        .list_all()
        .await
        .or_internal("Error fetching users")?;

    let views = accounts
        .iter()
        .map(|account| account.view(state.expose_password_hash))
        .collect();
    Ok(Json(ApiResponse::data(views)))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AccountsState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AccountView>>> {
    let id = DocumentId::parse(&id)?;

    let account = state
        .accounts
        .find_by_id(id)
        .await
        .or_internal("Error fetching user")?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(ApiResponse::data(
        account.view(state.expose_password_hash),
    )))
}
