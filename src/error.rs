use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::paths::InvalidIdentifier;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps path-resolution failures to HTTP status codes and renders them as
/// `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed identifier, book or chapter in a content path
    InvalidIdentifier(InvalidIdentifier),
    /// Well-formed content path that the static file server should have answered
    RouteNotFulfilled(String),
    /// Path under `/api` that matches no content template
    NotFound(String),
    /// HTML page could not be rendered
    Render(askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidIdentifier(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid path parameter: {}", err),
            ),
            ApiError::RouteNotFulfilled(path) => (
                StatusCode::NOT_IMPLEMENTED,
                format!("{} is served by the static file server, not by the documentation service", path),
            ),
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No API resource matches {}", path),
            ),
            ApiError::Render(err) => {
                tracing::error!("Failed to render page: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<InvalidIdentifier> for ApiError {
    fn from(err: InvalidIdentifier) -> Self {
        ApiError::InvalidIdentifier(err)
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Render(err)
    }
}
