//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, Axum server lifecycle and graceful shutdown.

use crate::application::services::UrlService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::RecordStore;
use crate::infrastructure::persistence::{InMemoryRecordStore, PgRecordStore, pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The record store (PostgreSQL pool + migrations, or in-memory)
/// - The URL service and handler state
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// The PostgreSQL pool is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (store, pg_pool) = open_store(&config).await?;

    let state = AppState::new(Arc::new(UrlService::new(store)));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pg_pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the configured record store.
///
/// Returns the pool alongside the store so the caller owns its shutdown.
async fn open_store(config: &Config) -> Result<(Arc<dyn RecordStore>, Option<PgPool>)> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pg_pool = pool::connect(config).await?;
            tracing::info!("Connected to database");

            pool::migrate(&pg_pool).await?;
            tracing::info!("Migrations applied");

            let store: Arc<dyn RecordStore> = Arc::new(PgRecordStore::new(Arc::new(pg_pool.clone())));
            Ok((store, Some(pg_pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());
            Ok((store, None))
        }
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
