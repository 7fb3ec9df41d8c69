//! Service entrypoint: config, tracing, bind, serve

use anyhow::Result;
use libris::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var("LIBRIS_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let app = build_router(AppState::new());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "libris listening");
    axum::serve(listener, app).await?;

    Ok(())
}
