use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc;
use crate::handlers::{
    api_config_handler, content_handler, health_handler, index_handler, redoc_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router.
///
/// Routes are registered without the mount prefix: the reverse proxy strips
/// it. Only the URLs handed to browsers (Swagger UI's spec URL, the OpenAPI
/// server entry, landing-page links) carry the prefix.
pub fn router(state: AppState) -> Router {
    let api_doc = api_doc::openapi(state.routes.prefix());

    let swagger_config =
        utoipa_swagger_ui::Config::new([state.routes.advertise(routes::OPENAPI_JSON)])
            .persist_authorization(true);

    Router::new()
        .route(routes::INDEX, get(index_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::API_CONFIG, get(api_config_handler))
        .route(routes::API_CONTENT, get(content_handler))
        .route(routes::REDOC, get(redoc_handler))
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI)
                .url(routes::OPENAPI_JSON, api_doc)
                .config(swagger_config),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        "Serving documentation on http://{} (Swagger UI at {})",
        addr,
        state.routes.advertise(&format!("{}/", routes::SWAGGER_UI))
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
