use std::sync::Arc;

use anyhow::Context;

use cinema_api::app::{self, services::AppServices};
use cinema_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinema_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let services = Arc::new(AppServices::with_logging_collaborators(config.rules));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
