// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_CONFIG: &str = "/api/config";
pub const API_CONTENT: &str = "/api/{*path}";
pub const OPENAPI_JSON: &str = "/openapi.json";
pub const SWAGGER_UI: &str = "/docs";
pub const REDOC: &str = "/redoc";

// Documentation-only content routes, fulfilled by the static file server

pub const TRANSLATIONS: &str = "/api/available-translations.json";
pub const TRANSLATION_BOOKS: &str = "/api/{translation}/books.json";
pub const TRANSLATION_CHAPTER: &str = "/api/{translation}/{book}/{chapter}.json";
pub const COMMENTARIES: &str = "/api/available-commentaries.json";
pub const COMMENTARY_BOOKS: &str = "/api/c/{commentary}/books.json";
pub const COMMENTARY_CHAPTER: &str = "/api/c/{commentary}/{book}/{chapter}.json";
pub const DATASETS: &str = "/api/available-datasets.json";
pub const DATASET_BOOKS: &str = "/api/d/{dataset}/books.json";
pub const DATASET_CHAPTER: &str = "/api/d/{dataset}/{book}/{chapter}.json";
