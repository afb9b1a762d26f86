use serde::{Deserialize, Serialize};

/// Shape of the API configuration document, as documented in OpenAPI.
///
/// `GET /api/config` returns the file verbatim, so every field is optional
/// and unknown fields pass through.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfigResponse {
    pub version: Option<String>,
    pub api_base: Option<String>,
    pub endpoints: Option<EndpointsResponse>,
}

/// Listing path per content kind
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndpointsResponse {
    pub translations: Option<String>,
    pub commentaries: Option<String>,
    pub datasets: Option<String>,
}
