//! Error handling for the API gateway
//!
//! Every handler is a catch boundary: a service error is mapped to an HTTP
//! status with a plain-text human-readable body, never a structured error
//! envelope and never a stack trace.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// API errors
#[derive(Debug, thiserror::Error)]
#[allow(dead_code)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("{0}")]
    Common(#[from] common::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        // Log the error with request ID for backend tracing
        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Common(e) => match e {
                common::error::Error::AccountNotFound(_) => StatusCode::NOT_FOUND,
                common::error::Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                common::error::Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        // Plain-text body with the appropriate status code
        (status, self.to_string()).into_response()
    }
}
