//! Entry point: load config, wire dependencies, and run the server.

use accounts_api::auth::Passwords;
use accounts_api::config::Config;
use accounts_api::db::{self, PgAccountStore};
use accounts_api::{build_router, AppState};
use argon2::Params;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(config.connect_options()).await?;
    db::run_migrations(&db_pool).await?;

    let store = Arc::new(PgAccountStore::new(db_pool));
    let passwords = Passwords::new(Params::default())
        .map_err(|e| anyhow::anyhow!("password hasher: {}", e))?;
    let state = AppState::new(store, passwords);

    let app = build_router(state, &config.static_dir);

    tracing::info!(addr = %config.server_addr, static_dir = %config.static_dir.display(), "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
