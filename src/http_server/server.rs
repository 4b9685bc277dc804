//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! The risk store is created once here and handed to handlers as router
//! state.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::observability_routes::health_routes;
use super::risk_routes::{risk_routes, RiskApiState};
use crate::config::Config;
use crate::observability::{log_event, Event};
use crate::risk::RiskStore;

/// HTTP server for the risk tracker
pub struct HttpServer {
    config: Config,
    store: Arc<RiskStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: Config) -> Self {
        let store = Arc::new(RiskStore::new());
        let router = build_router(store.clone(), &config);
        Self {
            config,
            store,
            router,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.app.socket_addr()
    }

    /// Shared record store
    pub fn store(&self) -> Arc<RiskStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until Ctrl-C / SIGTERM
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(
            event = Event::ServerListening.as_str(),
            service = %self.config.app.name,
            %addr,
            "risk API available at http://{}/v1/risks",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router around a shared store
pub fn build_router(store: Arc<RiskStore>, config: &Config) -> Router {
    let risk_state = Arc::new(RiskApiState::new(store, config.pagination.defaults()));

    Router::new()
        // Health check at root level
        .merge(health_routes())
        // Risk routes under /v1
        .nest("/v1", risk_routes(risk_state))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    log_event(Event::ShutdownStart);
}
