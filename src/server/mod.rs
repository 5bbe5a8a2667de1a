//! JSON HTTP API
//!
//! ## Endpoints
//!
//! - `GET /health` — static service status
//! - `POST /search` — `{"query": "..."}` → ranked listings and best deal
//! - `POST /verify-link` — `{"url": "..."}` → verification result

mod error;
mod handlers;

pub use error::{ApiError, ErrorBody};
pub use handlers::{
    HealthResponse, SearchRequest, SearchResponse, VerifyRequest, VerifyResponse, SERVICE_NAME,
};

use crate::catalog::Catalog;
use crate::config::{Config, ServerConfig};
use crate::verifier::{LinkVerifier, Verify};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers
///
/// The verifier inside is the process-wide HTTP client; it is created once
/// and shared by the catalog and the `/verify-link` route.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    verifier: Arc<dyn Verify>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, verifier: Arc<dyn Verify>) -> Self {
        Self { catalog, verifier }
    }

    /// Builds the verifier and catalog described by `config`
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let verifier: Arc<dyn Verify> = Arc::new(LinkVerifier::new(&config.verifier)?);
        Ok(Self::with_verifier(config, verifier))
    }

    /// Builds the catalog from `config` around an existing verifier
    pub fn with_verifier(config: &Config, verifier: Arc<dyn Verify>) -> Self {
        let catalog = Arc::new(Catalog::from_config(config, verifier.clone()));
        Self::new(catalog, verifier)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn verifier(&self) -> &dyn Verify {
        self.verifier.as_ref()
    }
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", post(handlers::search))
        .route("/verify-link", post(handlers::verify_link))
        .with_state(state)
}

async fn bind(config: &ServerConfig) -> crate::Result<TcpListener> {
    let bind_addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    Ok(listener)
}

/// Binds `{config.host}:{config.port}` and serves until the process exits
pub async fn serve(config: &ServerConfig, state: AppState) -> crate::Result<()> {
    let listener = bind(config).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// ScoutServer
// ---------------------------------------------------------------------------

/// The API served from a background tokio task
///
/// Dropping the server aborts the task.
pub struct ScoutServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ScoutServer {
    /// Starts the API in the background
    ///
    /// Use port `0` to have the OS pick a free port.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(config: &ServerConfig, state: AppState) -> crate::Result<Self> {
        let listener = bind(config).await?;
        let addr = listener.local_addr()?;

        tracing::info!("Listening on http://{}", addr);

        let app = router(state);
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL of the server, e.g. `http://127.0.0.1:5000`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Abort the server task
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ScoutServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
