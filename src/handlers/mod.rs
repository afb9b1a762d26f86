pub mod health;
pub mod config;
pub mod content;
pub mod index;
pub mod redoc;

pub use health::health_handler;
pub use config::api_config_handler;
pub use content::content_handler;
pub use index::index_handler;
pub use redoc::redoc_handler;
