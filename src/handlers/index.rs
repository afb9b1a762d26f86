use crate::api_config::ConfigDocument;
use crate::error::ApiError;
use crate::paths::{AdvertisedEndpoint, ContentKind, PathLevel, RouteDescriptor, DEFAULT_API_BASE};
use crate::routes;
use crate::state::AppState;
use askama::Template;
use axum::{extract::State, response::Html};

/// Landing page; every value is HTML-escaped by the template engine.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    version: &'a str,
    api_base: &'a str,
    listing_path: &'a str,
    books_template: String,
    books_example: String,
    chapter_template: String,
    chapter_example: String,
    sections: Vec<KindSection>,
    swagger_url: String,
    redoc_url: String,
    openapi_url: String,
    config_url: String,
}

/// Endpoints of one content kind, listed under its own heading.
struct KindSection {
    title: &'static str,
    endpoints: Vec<AdvertisedEndpoint>,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(document: &'a ConfigDocument, routes: &'a RouteDescriptor) -> Self {
        let endpoints = routes.advertised_endpoints();
        let example = |level: PathLevel| {
            endpoints
                .iter()
                .find(|e| e.kind == ContentKind::Translation && e.level == level)
                .map(|e| e.example.clone())
                .unwrap_or_default()
        };
        let books_example = example(PathLevel::Books);
        let chapter_example = example(PathLevel::Chapter);

        let sections = ContentKind::ALL
            .into_iter()
            .map(|kind| KindSection {
                title: kind.title(),
                endpoints: endpoints.iter().filter(|e| e.kind == kind).cloned().collect(),
            })
            .collect();

        Self {
            version: document.version().unwrap_or(env!("CARGO_PKG_VERSION")),
            api_base: document.api_base().unwrap_or(DEFAULT_API_BASE),
            listing_path: routes.listing_path(ContentKind::Translation),
            books_template: RouteDescriptor::books_template(ContentKind::Translation),
            books_example,
            chapter_template: RouteDescriptor::chapter_template(ContentKind::Translation),
            chapter_example,
            sections,
            swagger_url: routes.advertise(&format!("{}/", routes::SWAGGER_UI)),
            redoc_url: routes.advertise(routes::REDOC),
            openapi_url: routes.advertise(routes::OPENAPI_JSON),
            config_url: routes.advertise(routes::API_CONFIG),
        }
    }
}

/// GET / handler - Landing page with the endpoint overview
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    tracing::debug!("Rendering landing page");
    let html = render_index(state.resolver.resolve(), &state.routes)?;
    Ok(Html(html))
}

/// Render the landing page for a resolved config and route table.
pub fn render_index(
    document: &ConfigDocument,
    routes: &RouteDescriptor,
) -> Result<String, askama::Error> {
    IndexTemplate::new(document, routes).render()
}
