use utoipa::openapi::server::ServerBuilder;
use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{ApiConfigResponse, EndpointsResponse};
use crate::mount::MountPrefix;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bible API",
        description = "Free Use Bible API - Access Bible translations, commentaries, and datasets via JSON endpoints. All endpoints return JSON data served as static files."
    ),
    paths(
        handlers::content::available_translations,
        handlers::content::translation_books,
        handlers::content::translation_chapter,
        handlers::content::available_commentaries,
        handlers::content::commentary_books,
        handlers::content::commentary_chapter,
        handlers::content::available_datasets,
        handlers::content::dataset_books,
        handlers::content::dataset_chapter,
        handlers::config::api_config_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ApiConfigResponse,
            EndpointsResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "Translations", description = "Bible translations"),
        (name = "Commentaries", description = "Bible commentaries and study resources"),
        (name = "Datasets", description = "Cross-reference and other datasets"),
        (name = "Configuration", description = "API configuration"),
        (name = "Health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document as advertised under the given mount prefix.
pub fn openapi(prefix: &MountPrefix) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![
        ServerBuilder::new()
            .url(prefix.server_url())
            .description(Some("Current server"))
            .build(),
    ]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_all_routes_are_documented() {
        let doc = openapi(&MountPrefix::default());

        for path in [
            routes::TRANSLATIONS,
            routes::TRANSLATION_BOOKS,
            routes::TRANSLATION_CHAPTER,
            routes::COMMENTARIES,
            routes::COMMENTARY_BOOKS,
            routes::COMMENTARY_CHAPTER,
            routes::DATASETS,
            routes::DATASET_BOOKS,
            routes::DATASET_CHAPTER,
            routes::API_CONFIG,
            routes::HEALTH,
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.paths.paths.len(), 11);
    }

    #[test]
    fn test_server_url_follows_mount_prefix() {
        let doc = openapi(&MountPrefix::new(""));
        let servers = doc.servers.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "/");

        let doc = openapi(&MountPrefix::new("/bible-api/"));
        assert_eq!(doc.servers.unwrap()[0].url, "/bible-api");
    }

    #[test]
    fn test_chapter_parameter_has_minimum() {
        let json = serde_json::to_value(openapi(&MountPrefix::default())).unwrap();

        let params = &json["paths"][routes::DATASET_CHAPTER]["get"]["parameters"];
        let chapter = params
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "chapter")
            .unwrap();
        assert_eq!(chapter["in"], "path");
        assert_eq!(chapter["schema"]["minimum"].as_f64(), Some(1.0));
    }
}
