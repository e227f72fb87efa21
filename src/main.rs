use std::sync::Arc;

use cinepick::{
    config::Config,
    controllers::BrowseController,
    services::providers::RestProvider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    tracing::info!(backend = %config.backend_url, "Starting cinepick");

    let provider = Arc::new(RestProvider::new(config.backend_url));

    let controller = BrowseController::init(provider.as_ref(), provider.clone()).await;

    // Smoke output: the initial render model the UI would receive
    let view = controller.view();
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
