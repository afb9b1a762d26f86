use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use askama::Template;
use axum::{extract::State, response::Html};

/// Pinned so the rendered reference does not change under a deployed service.
pub const REDOC_BUNDLE: &str =
    "https://cdn.jsdelivr.net/npm/redoc@2.1.5/bundles/redoc.standalone.js";

#[derive(Template)]
#[template(path = "redoc.html")]
struct RedocTemplate<'a> {
    spec_url: &'a str,
    bundle_url: &'a str,
}

/// GET /redoc handler - ReDoc reference page
///
/// The page loads the OpenAPI document through its advertised (prefixed) URL.
pub async fn redoc_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let spec_url = state.routes.advertise(routes::OPENAPI_JSON);
    tracing::debug!("Rendering ReDoc for {}", spec_url);
    Ok(Html(render_redoc(&spec_url)?))
}

pub fn render_redoc(spec_url: &str) -> Result<String, askama::Error> {
    RedocTemplate {
        spec_url,
        bundle_url: REDOC_BUNDLE,
    }
    .render()
}
