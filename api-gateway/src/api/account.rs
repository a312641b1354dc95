//! Account API handlers
//!
//! Handles the account directory endpoints:
//! - List all accounts
//! - Get an account by id
//! - Delete an account by id
//! - Update an account by id

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use common::model::account::Account;
use common::money::Money;
use directory_service::AccountPatch;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::AppState;

/// Update account request
///
/// Fields absent from the request body stay `None` and leave the account
/// untouched; a supplied zero or empty string is a real value and is
/// validated, not skipped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    /// New account ID, must start with 'a'
    pub id: Option<String>,
    /// New owner name, at least two characters
    #[serde(rename = "ownerName")]
    pub owner_name: Option<String>,
    /// New balance, zero or greater
    pub balance: Option<Money>,
    /// New tier, one of BLACK, GOLD or PLATINUM
    #[serde(rename = "type")]
    pub tier: Option<String>,
}

impl From<UpdateAccountRequest> for AccountPatch {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountPatch {
            id: request.id,
            owner_name: request.owner_name,
            balance: request.balance,
            tier: request.tier,
        }
    }
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "Full account list", body = [Account])
    ),
    tag = "account"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.directory.list_accounts().await
        .map_err(ApiError::Common)?;

    Ok(Json(accounts))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account retrieved successfully", body = Account),
        (status = 404, description = "Account not found")
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let account = state.directory.get_account(&id).await
        .map_err(ApiError::Common)?;

    Ok(Json(account))
}

/// Delete an account by ID
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted successfully", body = String),
        (status = 400, description = "Invalid account ID"),
        (status = 404, description = "Account not found")
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    state.directory.delete_account(&id).await
        .map_err(ApiError::Common)?;

    Ok("Account deleted successfully")
}

/// Update an account by ID
///
/// Every supplied, valid field overwrites the account's field; omitted fields
/// are left unchanged.
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated successfully", body = String),
        (status = 400, description = "Invalid field supplied"),
        (status = 404, description = "Account not found")
    ),
    tag = "account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<&'static str, ApiError> {
    state.directory.update_account(&id, request.into()).await
        .map_err(ApiError::Common)?;

    Ok("Account updated successfully")
}
