//! Router construction and the serve loop.

use anyhow::{Context, Result};
use axum::{
    routing::{any, post, put},
    Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::handlers::{
    create_task, delete_task, get_task_by_id, get_tasks, health_check, hello, method_not_allowed,
    update_task,
};
use crate::store::TaskStore;

/// Shared application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The task collection every handler works against.
    pub store: TaskStore,
}

impl AppState {
    /// Wrap a store for use as router state.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }
}

/// Build the HTTP router.
///
/// `/create` and `/update` only accept their own verb and answer other
/// methods with 405. Every other route accepts any method, and unknown
/// paths fall back to the root greeting.
pub fn build_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", any(hello))
        .route("/tasks", any(get_tasks))
        .route("/task", any(get_task_by_id))
        .route("/create", post(create_task).fallback(method_not_allowed))
        .route("/update", put(update_task).fallback(method_not_allowed))
        .route("/delete", any(delete_task))
        .route("/health", any(health_check))
        .fallback(hello)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes)),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let store = if config.no_seed {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };
    let state = Arc::new(AppState::new(store));
    let app = build_router(Arc::clone(&state), &config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server on {addr}"))?;

    let tasks = state.store.len().await;
    info!(addr = %addr, tasks, "Server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
