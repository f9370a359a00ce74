//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check: database connectivity
//! - `/airlines/*`   - Airline CRUD and linked airports
//! - `/airports/*`   - Airport CRUD
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, applied in [`crate::server::run`]

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::resource_routes())
        .with_state(state)
        .layer(tracing::layer())
}
