use anyhow::Context;

use shopfront_api::config::{ApiConfig, CorsPolicy};
use shopfront_catalog::{Catalog, CatalogService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    shopfront_observability::init(config.log_format);

    if config.cors == CorsPolicy::AllowAny {
        tracing::warn!("CORS allows any origin, method and header; development use only");
    }

    let catalog = Catalog::seed().context("seed catalog is invalid")?;
    tracing::info!(products = catalog.len(), "catalog seeded");

    let app = shopfront_api::app::build_app(&config, CatalogService::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
