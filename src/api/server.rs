//! Estimator API server lifecycle — binds the axum HTTP server and
//! serves `estimator_router()` until shut down.
//!
//! Two entry points:
//! - `serve` runs in the foreground until Ctrl-C (used by the binary)
//! - `start_server_on` spawns a background task and returns a handle
//!   with a shutdown channel (used by embedders and tests)

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::api::router::estimator_router;
use crate::api::types::ApiContext;
use crate::config::ServerConfig;
use crate::request_log::RequestLogStore;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Session metadata for a running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to a running background server.
pub struct EstimatorServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl EstimatorServer {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Estimator API server shutdown signal sent");
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Build the API context for `config`, loading any persisted request log.
pub async fn build_context(config: &ServerConfig) -> ApiContext {
    let store = RequestLogStore::load(config.log_file.clone()).await;
    ApiContext::new(Arc::new(store), config.validate_input)
}

/// Run the server in the foreground until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let ctx = build_context(&config).await;
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, log_file = %config.log_file.display(), "Estimator API server listening");

    axum::serve(listener, estimator_router(ctx))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
            }
            tracing::info!("Estimator API server received shutdown signal");
        })
        .await?;

    tracing::info!("Estimator API server stopped");
    Ok(())
}

/// Start the server on `addr` in a background task.
///
/// Port `0` binds an ephemeral port; the chosen port is reported in the
/// returned session metadata.
pub async fn start_server_on(
    ctx: ApiContext,
    addr: SocketAddr,
) -> Result<EstimatorServer, ServerError> {
    // 1. Bind
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr()?;

    tracing::info!(%addr, "Estimator API server binding");

    // 2. Build the router
    let app = estimator_router(ctx);

    // 3. Create session metadata
    let session = ServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    // 4. Set up shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // 5. Spawn server in background task
    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Estimator API server received shutdown signal");
        };

        tracing::info!(%addr, "Estimator API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Estimator API server error: {e}");
        }

        tracing::info!("Estimator API server stopped");
    });

    Ok(EstimatorServer {
        session,
        shutdown_tx: Some(shutdown_tx),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
