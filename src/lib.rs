pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod supabase;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Assemble the full router: the public health route, the protected routes
/// behind the auth gate, and the global layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::get))
        .merge(protected_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(handlers::dashboard::get))
        .layer(from_fn_with_state(state, middleware::require_auth))
}
