use std::sync::Arc;

use anyhow::Context;
use api::{app_builder, AppState, Config, FileStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::from_env().context("failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = FileStore::new(&cfg.log_dir);
    store
        .ensure_root()
        .await
        .context("failed to create log directory")?;
    tracing::info!(log_dir = %store.root().display(), "storing records");

    let addr = cfg.socket_addr();
    let app = app_builder(AppState::new(Arc::new(store), cfg));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
