use crate::error::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The service has no backing store, so it is healthy whenever it answers.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_config::ConfigResolver;
    use crate::config::Config;
    use crate::mount::MountPrefix;
    use crate::server;
    use crate::state::AppState;
    use axum::{body::Body, http::Request};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn state_for(content_root: PathBuf) -> AppState {
        AppState::new(Config {
            content_root,
            mount_prefix: MountPrefix::default(),
            service_port: 8000,
            service_host: "0.0.0.0".to_string(),
        })
    }

    async fn get_health(state: AppState) -> HealthResponse {
        let response = server::router(state)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let dir = TempDir::new().unwrap();

        let response_json = get_health(state_for(dir.path().to_path_buf())).await;

        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_with_broken_config() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("api")).unwrap();
        std::fs::write(dir.path().join("api/config.json"), "not json").unwrap();
        let state = state_for(dir.path().to_path_buf());
        assert_eq!(
            ConfigResolver::new(dir.path().join("api/config.json")).resolve(),
            state.resolver.resolve()
        );

        let response_json = get_health(state).await;

        assert_eq!(response_json.status, "healthy");
    }
}
