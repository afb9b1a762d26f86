//! Documentation and configuration service for the static Bible content API.
//!
//! The content itself (translations, commentaries, datasets) is pre-rendered
//! JSON served by a static file server. This crate resolves the API
//! configuration document, derives canonical content paths from it, and
//! publishes the OpenAPI description, Swagger UI, ReDoc and a landing page.

pub mod api_config;
pub mod api_doc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mount;
pub mod paths;
pub mod routes;
pub mod server;
pub mod state;
