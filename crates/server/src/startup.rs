use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// Load config from `CONFIG_PATH`/`config.toml`, falling back to env vars
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            AppConfig::from_env()
        }
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Connect, migrate and wrap the database in router state
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    if let Some(dir) = common::env::sqlite_parent_dir(&cfg.database.url) {
        common::env::ensure_data_dir(&dir).await?;
    }
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(routes::build_router(ServerState::from_db(db)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
