use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::model::account::{Account, AccountTier};
use directory_service::DirectoryService;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use api_gateway::{router, AppState};

fn app() -> Router {
    let directory = DirectoryService::with_accounts(vec![
        Account::new("a1", "Ana", dec!(100), AccountTier::Gold),
        Account::new("a2", "Bruno", dec!(250.50), AccountTier::Black),
    ]);

    router(Arc::new(AppState {
        directory: Arc::new(directory),
    }))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn delete(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn put(app: &Router, uri: &str, json: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_ping() {
    let app = app();

    let response = get(&app, "/ping").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Pong!");
}

#[tokio::test]
async fn test_list_accounts() {
    let app = app();

    let response = get(&app, "/accounts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let accounts: Vec<Account> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, "a1");
    assert_eq!(accounts[1].id, "a2");
}

#[tokio::test]
async fn test_get_account() {
    let app = app();

    let response = get(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let account: Account = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(account.id, "a1");
    assert_eq!(account.owner_name, "Ana");
    assert_eq!(account.balance, dec!(100));
    assert_eq!(account.tier, AccountTier::Gold);
}

#[tokio::test]
async fn test_get_unknown_account_is_404() {
    let app = app();

    let response = get(&app, "/accounts/a9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("a9"), "message should name the id: {}", body);
}

#[tokio::test]
async fn test_delete_account() {
    let app = app();

    let response = delete(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Account deleted successfully");

    // The account is gone and the delete is not silently repeatable
    let response = get(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_invalid_id_is_400_and_leaves_directory_unchanged() {
    let app = app();

    let response = delete(&app, "/accounts/b1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/accounts").await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let accounts: Vec<Account> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(accounts.len(), 2);
}

#[tokio::test]
async fn test_update_account() {
    let app = app();

    let response = put(&app, "/accounts/a1", r#"{"balance": 50}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Account updated successfully");

    let response = get(&app, "/accounts/a1").await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let account: Account = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(account.balance, dec!(50));
    assert_eq!(account.owner_name, "Ana");
    assert_eq!(account.tier, AccountTier::Gold);
}

#[tokio::test]
async fn test_update_accepts_zero_balance() {
    let app = app();

    let response = put(&app, "/accounts/a1", r#"{"balance": 0}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/accounts/a1").await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let account: Account = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(account.balance, dec!(0));
}

#[tokio::test]
async fn test_update_rejects_negative_balance() {
    let app = app();

    let response = put(&app, "/accounts/a1", r#"{"balance": -1}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_unknown_tier() {
    let app = app();

    let response = put(&app, "/accounts/a1", r#"{"type": "SILVER"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_invalid_new_id() {
    let app = app();

    let response = put(&app, "/accounts/a1", r#"{"id": "b9"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_account_is_404() {
    let app = app();

    let response = put(&app, "/accounts/a9", r#"{"balance": 10}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validates_fields_even_for_unknown_account() {
    let app = app();

    let response = put(&app, "/accounts/a9", r#"{"balance": -1}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_account_lifecycle() {
    let app = app();

    // Seeded account is retrievable
    let response = get(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update changes only the supplied field
    let response = put(&app, "/accounts/a1", r#"{"balance": 50}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/accounts/a1").await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let account: Account = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(account.balance, dec!(50));
    assert_eq!(account.owner_name, "Ana");
    assert_eq!(account.tier, AccountTier::Gold);

    // Delete, then the account is gone
    let response = delete(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/accounts/a1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
