use crate::api_config::ConfigDocument;
use crate::models::ApiConfigResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/config handler - Dump the resolved API configuration
///
/// Returns `config.json` exactly as loaded, or the built-in default document
/// when the file is missing or unreadable.
#[utoipa::path(
    get,
    path = routes::API_CONFIG,
    responses(
        (status = 200, description = "Resolved API configuration", body = ApiConfigResponse)
    ),
    tag = "Configuration"
)]
pub async fn api_config_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ConfigDocument>) {
    let document = state.resolver.resolve().clone();
    tracing::debug!("Serving API config from {}", state.resolver.path().display());
    (StatusCode::OK, Json(document))
}
