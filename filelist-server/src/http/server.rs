//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Request timeout
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::auth::AuthContext;
use crate::db::Store;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Per-request deadline; slower requests get 408
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_permissive: false,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let port = config.bind_addr.port();
        let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
            .iter()
            .filter_map(|host| HeaderValue::from_str(&format!("http://{}:{}", host, port)).ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::lists::router())
        .merge(routes::entries::router())
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives, then close the store.
///
/// # Example
///
/// ```ignore
/// let store = Store::open("./files.db").await?;
/// let auth = AuthContext::new(secret)?;
/// run_server(store, auth, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Store,
    auth: AuthContext,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let state = AppState::new(store.clone(), auth);
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.cors_permissive);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
