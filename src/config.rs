use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

use crate::mount::MountPrefix;

/// Directory the content volume is mounted at when `API_DIR` is unset.
pub const DEFAULT_CONTENT_ROOT: &str = "/app/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub content_root: PathBuf,
    pub mount_prefix: MountPrefix,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let content_root = env::var("API_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_ROOT));

        let mount_prefix = MountPrefix::new(&env::var("ROOT_PATH").unwrap_or_default());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            content_root,
            mount_prefix,
            service_port,
            service_host,
        })
    }

    /// Location of the API configuration document inside the content root.
    pub fn config_path(&self) -> PathBuf {
        self.content_root.join("api").join("config.json")
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content root: {}", self.content_root.display());
        tracing::info!("  API config file: {}", self.config_path().display());
        tracing::info!("  Mount prefix: {}",
            if self.mount_prefix.is_empty() { "(none)" } else { self.mount_prefix.as_str() });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
