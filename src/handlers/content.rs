//! Static content routes.
//!
//! The `#[utoipa::path]` functions below only describe the JSON files served by
//! the static file server; they are registered in the OpenAPI document and
//! never mounted. Requests that still reach this service land in
//! [`content_handler`].

use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, Json};
use serde_json::Value as JsonValue;

fn not_fulfilled(path: &str) -> ApiError {
    ApiError::RouteNotFulfilled(path.to_string())
}

/// GET /api/{*path} handler - Content request that bypassed the static server
///
/// Validates the path against the content templates so malformed requests get
/// a useful 400, then reports that the file is not served here.
pub async fn content_handler(
    State(state): State<AppState>,
    Path(rest): Path<String>,
) -> ApiError {
    let path = format!("/api/{}", rest);

    match state.routes.match_request(&path) {
        Ok(Some(canonical)) => {
            tracing::warn!(
                "Content request for {} reached the documentation service; the static file server should answer it",
                canonical
            );
            ApiError::RouteNotFulfilled(canonical)
        }
        Ok(None) => {
            tracing::debug!("No content template matches {}", path);
            ApiError::NotFound(path)
        }
        Err(err) => {
            tracing::info!("Rejected content path {}: {}", path, err);
            ApiError::from(err)
        }
    }
}

/// Get Available Translations
///
/// Returns a list of all available Bible translations with their metadata.
/// Each translation object contains its identifier (e.g. "BSB"), full name,
/// language code and further metadata.
#[utoipa::path(
    get,
    path = routes::TRANSLATIONS,
    responses(
        (status = 200, description = "Available translations", body = Vec<serde_json::Value>)
    ),
    tag = "Translations"
)]
pub async fn available_translations() -> Result<Json<Vec<JsonValue>>, ApiError> {
    Err(not_fulfilled(routes::TRANSLATIONS))
}

/// Get Books in Translation
///
/// Returns the translation metadata and the books it contains.
#[utoipa::path(
    get,
    path = routes::TRANSLATION_BOOKS,
    params(
        ("translation" = String, Path, description = "Translation ID (e.g., 'BSB', 'KJV')", example = "BSB")
    ),
    responses(
        (status = 200, description = "Books in the translation", body = serde_json::Value),
        (status = 400, description = "Invalid translation ID", body = ErrorResponse)
    ),
    tag = "Translations"
)]
pub async fn translation_books() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::TRANSLATION_BOOKS))
}

/// Get Chapter
///
/// Returns the book metadata, the chapter number and the verses of one
/// chapter of a translation.
#[utoipa::path(
    get,
    path = routes::TRANSLATION_CHAPTER,
    params(
        ("translation" = String, Path, description = "Translation ID", example = "BSB"),
        ("book" = String, Path, description = "Book ID (e.g., 'GEN', 'MAT')", example = "GEN"),
        ("chapter" = u32, Path, description = "Chapter number (1-indexed)", minimum = 1, example = 1)
    ),
    responses(
        (status = 200, description = "Chapter content", body = serde_json::Value),
        (status = 400, description = "Invalid translation, book or chapter", body = ErrorResponse)
    ),
    tag = "Translations"
)]
pub async fn translation_chapter() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::TRANSLATION_CHAPTER))
}

/// Get Available Commentaries
///
/// Returns a list of all available Bible commentaries.
#[utoipa::path(
    get,
    path = routes::COMMENTARIES,
    responses(
        (status = 200, description = "Available commentaries", body = Vec<serde_json::Value>)
    ),
    tag = "Commentaries"
)]
pub async fn available_commentaries() -> Result<Json<Vec<JsonValue>>, ApiError> {
    Err(not_fulfilled(routes::COMMENTARIES))
}

/// Get Books in Commentary
#[utoipa::path(
    get,
    path = routes::COMMENTARY_BOOKS,
    params(
        ("commentary" = String, Path, description = "Commentary ID", example = "tyndale")
    ),
    responses(
        (status = 200, description = "Books in the commentary", body = serde_json::Value),
        (status = 400, description = "Invalid commentary ID", body = ErrorResponse)
    ),
    tag = "Commentaries"
)]
pub async fn commentary_books() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::COMMENTARY_BOOKS))
}

/// Get Commentary Chapter
#[utoipa::path(
    get,
    path = routes::COMMENTARY_CHAPTER,
    params(
        ("commentary" = String, Path, description = "Commentary ID", example = "tyndale"),
        ("book" = String, Path, description = "Book ID", example = "GEN"),
        ("chapter" = u32, Path, description = "Chapter number", minimum = 1, example = 1)
    ),
    responses(
        (status = 200, description = "Commentary chapter content", body = serde_json::Value),
        (status = 400, description = "Invalid commentary, book or chapter", body = ErrorResponse)
    ),
    tag = "Commentaries"
)]
pub async fn commentary_chapter() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::COMMENTARY_CHAPTER))
}

/// Get Available Datasets
///
/// Returns a list of all available datasets, such as cross-references.
#[utoipa::path(
    get,
    path = routes::DATASETS,
    responses(
        (status = 200, description = "Available datasets", body = Vec<serde_json::Value>)
    ),
    tag = "Datasets"
)]
pub async fn available_datasets() -> Result<Json<Vec<JsonValue>>, ApiError> {
    Err(not_fulfilled(routes::DATASETS))
}

/// Get Books in Dataset
#[utoipa::path(
    get,
    path = routes::DATASET_BOOKS,
    params(
        ("dataset" = String, Path, description = "Dataset ID", example = "crossref")
    ),
    responses(
        (status = 200, description = "Books in the dataset", body = serde_json::Value),
        (status = 400, description = "Invalid dataset ID", body = ErrorResponse)
    ),
    tag = "Datasets"
)]
pub async fn dataset_books() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::DATASET_BOOKS))
}

/// Get Dataset Chapter
#[utoipa::path(
    get,
    path = routes::DATASET_CHAPTER,
    params(
        ("dataset" = String, Path, description = "Dataset ID", example = "crossref"),
        ("book" = String, Path, description = "Book ID", example = "GEN"),
        ("chapter" = u32, Path, description = "Chapter number", minimum = 1, example = 1)
    ),
    responses(
        (status = 200, description = "Dataset chapter content", body = serde_json::Value),
        (status = 400, description = "Invalid dataset, book or chapter", body = ErrorResponse)
    ),
    tag = "Datasets"
)]
pub async fn dataset_chapter() -> Result<Json<JsonValue>, ApiError> {
    Err(not_fulfilled(routes::DATASET_CHAPTER))
}
