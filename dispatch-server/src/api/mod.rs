//! HTTP routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`print`] - print dispatch endpoint

pub mod health;
pub mod print;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::PrintBackend;
use crate::config::Config;
use till_render::TicketRenderer;

/// Shared handler state
///
/// The backend is chosen once at startup; handlers never branch on the
/// deployment environment themselves.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn PrintBackend>,
    pub renderer: TicketRenderer,
}

impl AppState {
    pub fn new(backend: Arc<dyn PrintBackend>, renderer: TicketRenderer) -> Self {
        Self { backend, renderer }
    }

    /// Build state from configuration (backend selection happens here)
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let backend = crate::backend::from_config(config)?;
        let renderer = TicketRenderer::new(config.ticket_width, config.timezone);
        Ok(Self::new(backend, renderer))
    }
}

/// Build the application router
///
/// The dispatch route answers POST only; other methods fall back to a
/// structured 405 body. CORS is permissive because the caller is a
/// browser-hosted client on a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::check))
        .route(
            "/api/print/{template}",
            post(print::dispatch).fallback(print::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
