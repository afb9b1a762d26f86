//! Resolution of the API configuration document (`api/config.json`).
//!
//! The document is served verbatim by `GET /api/config` and feeds the listing
//! paths of the [`RouteDescriptor`](crate::paths::RouteDescriptor). A missing
//! or broken file never takes the service down: the resolver falls back to
//! [`ConfigDocument::default_document`] and logs why.

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::Config;
use crate::paths::{ContentKind, DEFAULT_API_BASE};

/// The resolved configuration document.
///
/// Wraps the parsed JSON object unchanged; the accessors below only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument(Map<String, JsonValue>);

impl ConfigDocument {
    /// Document used whenever `config.json` cannot be loaded.
    pub fn default_document() -> Self {
        let endpoints: Map<String, JsonValue> = ContentKind::ALL
            .into_iter()
            .map(|kind| (kind.endpoint_key().to_string(), json!(kind.default_listing())))
            .collect();

        let mut document = Map::new();
        document.insert("version".to_string(), json!("1.0.0"));
        document.insert("apiBase".to_string(), json!(DEFAULT_API_BASE));
        document.insert("endpoints".to_string(), JsonValue::Object(endpoints));
        ConfigDocument(document)
    }

    pub fn from_value(value: JsonValue) -> Result<Self, ConfigUnavailable> {
        match value {
            JsonValue::Object(map) => Ok(ConfigDocument(map)),
            _ => Err(ConfigUnavailable::NotAnObject),
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(JsonValue::as_str)
    }

    pub fn api_base(&self) -> Option<&str> {
        self.0.get("apiBase").and_then(JsonValue::as_str)
    }

    /// Configured listing path for a content kind, if the document has one.
    pub fn endpoint(&self, kind: ContentKind) -> Option<&str> {
        self.0
            .get("endpoints")
            .and_then(|endpoints| endpoints.get(kind.endpoint_key()))
            .and_then(JsonValue::as_str)
    }

    /// Inconsistencies that would produce broken links.
    ///
    /// The document is still used as-is; callers only report these.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let api_base = self.api_base();
        if api_base.is_none() {
            warnings.push(ConfigWarning::MissingApiBase);
        }

        for kind in ContentKind::ALL {
            match (self.endpoint(kind), api_base) {
                (None, _) => warnings.push(ConfigWarning::MissingEndpoint(kind)),
                (Some(path), Some(base)) if !path.starts_with(base) => {
                    warnings.push(ConfigWarning::EndpointOutsideApiBase {
                        kind,
                        path: path.to_string(),
                        api_base: base.to_string(),
                    })
                }
                _ => {}
            }
        }

        warnings
    }
}

/// Why `config.json` could not be used. Never surfaced to HTTP callers.
#[derive(Debug)]
pub enum ConfigUnavailable {
    Read(std::io::Error),
    Parse(serde_json::Error),
    NotAnObject,
}

impl std::fmt::Display for ConfigUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigUnavailable::Read(e) => write!(f, "cannot read config file: {}", e),
            ConfigUnavailable::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigUnavailable::NotAnObject => write!(f, "config file is not a JSON object"),
        }
    }
}

impl std::error::Error for ConfigUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigUnavailable::Read(e) => Some(e),
            ConfigUnavailable::Parse(e) => Some(e),
            ConfigUnavailable::NotAnObject => None,
        }
    }
}

/// A problem found in a successfully parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    MissingApiBase,
    MissingEndpoint(ContentKind),
    EndpointOutsideApiBase {
        kind: ContentKind,
        path: String,
        api_base: String,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::MissingApiBase => write!(f, "apiBase is missing or not a string"),
            ConfigWarning::MissingEndpoint(kind) => write!(
                f,
                "endpoints.{} is missing; using {}",
                kind.endpoint_key(),
                kind.default_listing()
            ),
            ConfigWarning::EndpointOutsideApiBase { kind, path, api_base } => write!(
                f,
                "endpoints.{} = '{}' does not start with apiBase '{}'",
                kind.endpoint_key(),
                path,
                api_base
            ),
        }
    }
}

/// Read and parse a configuration document from disk.
pub fn read_document(path: &Path) -> Result<ConfigDocument, ConfigUnavailable> {
    let content = std::fs::read_to_string(path).map_err(ConfigUnavailable::Read)?;
    let value: JsonValue = serde_json::from_str(&content).map_err(ConfigUnavailable::Parse)?;
    ConfigDocument::from_value(value)
}

/// Loads the configuration document once and hands out the memoized result.
#[derive(Debug)]
pub struct ConfigResolver {
    path: PathBuf,
    resolved: OnceLock<ConfigDocument>,
}

impl ConfigResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            resolved: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved document. Only the first call touches the filesystem.
    pub fn resolve(&self) -> &ConfigDocument {
        self.resolved.get_or_init(|| self.load())
    }

    fn load(&self) -> ConfigDocument {
        match read_document(&self.path) {
            Ok(document) => {
                tracing::info!("Loaded API config from {}", self.path.display());
                for warning in document.warnings() {
                    tracing::warn!("API config {}: {}", self.path.display(), warning);
                }
                document
            }
            Err(e) => {
                tracing::warn!(
                    "API config unavailable ({}), using built-in defaults: {}",
                    self.path.display(),
                    e
                );
                ConfigDocument::default_document()
            }
        }
    }
}
