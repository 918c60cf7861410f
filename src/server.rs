//! HTTP server assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::agent::AgentRegistry;
use crate::api::{
    AGENT_CARD_PATH, CatalogDocument, WELL_KNOWN_CATALOG_ALIAS, WELL_KNOWN_CATALOG_PATH,
};
use crate::catalog;
use crate::handlers;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state. The catalog is built once from the registry and
/// served as-is for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub registry: AgentRegistry,
    pub catalog: Arc<CatalogDocument>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: AgentRegistry) -> Self {
        let catalog = Arc::new(catalog::build_document(&registry));
        Self { registry, catalog }
    }
}

// ============================================================================
// Server Setup
// ============================================================================

/// Builds the application router: the well-known catalog, one mount per
/// agent, and the service routes.
pub fn build_app(state: AppState, request_timeout_seconds: u64) -> Router {
    let mut app = Router::new()
        .route(WELL_KNOWN_CATALOG_PATH, get(handlers::api_catalog))
        .route(WELL_KNOWN_CATALOG_ALIAS, get(handlers::api_catalog))
        .route("/livez", get(handlers::livez))
        .route("/version", get(handlers::version))
        .with_state(state.clone());

    for agent in state.registry.iter() {
        let agent_routes = Router::new()
            .route("/", post(handlers::send_message))
            .route(AGENT_CARD_PATH, get(handlers::agent_card))
            .with_state(agent.clone());
        app = app.nest(&agent.path, agent_routes);
    }

    app.fallback(handlers::fallback)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_seconds),
        ))
}
