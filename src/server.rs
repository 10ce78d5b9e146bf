//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{ImportService, LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Idempotent schema migrations
/// - Background click worker
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    tokio::spawn(run_click_worker(click_rx, link_repository.clone()));
    tracing::info!("Click worker started");

    let link_service = Arc::new(LinkService::new(link_repository.clone()));
    let redirect_service = Arc::new(RedirectService::new(
        link_repository.clone(),
        click_tx.clone(),
    ));
    let import_service = Arc::new(ImportService::new(link_service.clone()));
    let stats_service = Arc::new(StatsService::new(link_repository));

    let state = AppState {
        link_service,
        redirect_service,
        import_service,
        stats_service,
        base_url: config.base_url.clone(),
        click_sender: click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
