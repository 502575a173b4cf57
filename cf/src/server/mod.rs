//! HTTP API
//!
//! Thin axum layer over [`IdeaService`]: JSON in, JSON out, CORS for the
//! configured front-end origins, and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use eyre::{Context, Result};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::service::IdeaService;

mod error;
mod handlers;
pub mod models;

pub use error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IdeaService>,
}

impl AppState {
    pub fn new(service: Arc<IdeaService>) -> Self {
        Self { service }
    }
}

/// Routes without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/boost", post(handlers::boost))
        .route("/generate", post(handlers::generate))
        .route("/stats", get(handlers::stats))
        .route("/categories", get(handlers::categories))
        .with_state(state)
}

/// Full application: routes plus CORS and tracing
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    router(state).layer(cors_layer(&config.allowed_origins)).layer(TraceLayer::new_for_http())
}

/// `*` anywhere in the list opens CORS to every origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    debug!(?origins, "cors_layer: called");
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if origins.iter().any(|o| o.trim() == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "cors_layer: skipping invalid origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Bind and serve until ctrl-c
pub async fn serve(service: Arc<IdeaService>, config: &ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!(%addr, model = %service.model(), "CreativeFuse API listening");

    axum::serve(listener, app(AppState::new(service), config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("CreativeFuse API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "shutdown_signal: failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
