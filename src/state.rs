use crate::api_config::ConfigResolver;
use crate::config::Config;
use crate::paths::RouteDescriptor;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<ConfigResolver>,
    pub routes: Arc<RouteDescriptor>,
}

impl AppState {
    /// Resolve the API config once and derive the route table from it.
    pub fn new(config: Config) -> Self {
        let resolver = ConfigResolver::from_config(&config);
        let routes = RouteDescriptor::new(resolver.resolve(), config.mount_prefix.clone());

        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            routes: Arc::new(routes),
        }
    }
}
