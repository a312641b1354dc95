// api-gateway/src/lib.rs
pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{routing::get, Router};
use directory_service::DirectoryService;

use crate::api::account::{delete_account, get_account, list_accounts, update_account};
use crate::api::health::ping;

/// App state shared across handlers
pub struct AppState {
    /// Account directory service
    pub directory: Arc<DirectoryService>,
}

/// Build the HTTP router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/accounts", get(list_accounts))
        .route(
            "/accounts/:id",
            get(get_account).delete(delete_account).put(update_account),
        )
        .with_state(state)
}
