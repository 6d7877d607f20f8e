//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::infrastructure::persistence::YieldStore;
use crate::infrastructure::templates::TemplateStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The database is not opened here; the first request that needs it opens
/// it, and a missing file only degrades the data pages.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(YieldStore::lazy(
        &config.database_path,
        config.db_max_connections,
    ));

    if tokio::fs::try_exists(&config.database_path)
        .await
        .unwrap_or(false)
    {
        tracing::info!("Database file found: {}", config.database_path.display());
    } else {
        tracing::warn!(
            "Database file not found: {}. Data pages will answer 'Database not available'",
            config.database_path.display()
        );
    }

    let templates = TemplateStore::new(&config.template_dir);
    let missing = templates.missing().await;
    if !missing.is_empty() {
        tracing::warn!("Missing templates: {:?}", missing);
    }

    let state = AppState::new(store, templates);
    let app = app_router(state, &config.public_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
