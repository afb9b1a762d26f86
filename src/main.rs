use bible_api_docs::config::Config;
use bible_api_docs::server;
use bible_api_docs::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("bible-api-docs starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState::new(config);
    tracing::info!(
        "API config version: {}",
        state.resolver.resolve().version().unwrap_or("(unset)")
    );

    server::run(state).await
}
