//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! This module defines the axum router with all REST endpoints.
//!
//! # Route Structure
//!
//! ```text
//! /api/v1
//! ├── /health              GET - Health check
//! └── /trades              GET - List trades (paginated)
//!     ├── /search          GET - Free-text search
//!     ├── /filter          GET - Multi-field filter
//!     └── /{id}            GET - Get trade by ID
//! ```
//!
//! The static `/search` and `/filter` segments take precedence over the
//! `/{id}` capture, so those two paths are never mistaken for trade IDs.
//!
//! # Examples
//!
//! ```ignore
//! use trade_query::api::rest::routes::create_router;
//! use trade_query::api::rest::handlers::AppState;
//!
//! let state = Arc::new(AppState::new(engine));
//! let router = create_router(state);
//!
//! axum::serve(listener, router).await?;
//! ```

use crate::api::rest::handlers::{
    AppState, filter_trades, get_trade, health_check, list_trades, search_trades,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the REST API router with all endpoints.
///
/// # Arguments
///
/// * `state` - Shared application state containing the query engine
///
/// # Returns
///
/// An axum Router configured with all REST endpoints and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Trade routes
    let trade_routes = Router::new()
        .route("/", get(list_trades))
        .route("/search", get(search_trades))
        .route("/filter", get(filter_trades))
        .route("/{id}", get(get_trade));

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(health_check))
        .nest("/trades", trade_routes);

    // Main router with middleware
    Router::new()
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Creates a minimal router for testing without middleware.
///
/// This is useful for unit tests where you don't need tracing or CORS.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    let trade_routes = Router::new()
        .route("/", get(list_trades))
        .route("/search", get(search_trades))
        .route("/filter", get(filter_trades))
        .route("/{id}", get(get_trade));

    let api_v1 = Router::new()
        .route("/health", get(health_check))
        .nest("/trades", trade_routes);

    Router::new().nest("/api/v1", api_v1).with_state(state)
}
