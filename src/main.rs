use anyhow::Context;
use tracing_subscriber::EnvFilter;

use portfolio_api::config::AppConfig;
use portfolio_api::database::{manager, seed};
use portfolio_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, ADMIN_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!("starting portfolio API in {:?} mode", config.environment);

    // A store that cannot be opened or seeded is fatal: abort startup
    // rather than serve requests against a broken database.
    let pool = manager::connect(&config.database.url, config.database.max_connections)
        .await
        .context("failed to open database")?;
    manager::ensure_schema(&pool).await.context("failed to initialize schema")?;
    seed::seed_if_empty(&pool).await.context("failed to seed database")?;

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    println!("🚀 Portfolio API listening on http://{}", bind_addr);

    let state = AppState::new(pool, config);
    axum::serve(listener, portfolio_api::app(state))
        .await
        .context("server error")?;
    Ok(())
}
