use axum::{routing::get, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use super::auth;
use super::districts;
use super::health;
use super::state::AppState;
use super::states;

/// Router with trailing slashes trimmed before routing
pub type App = NormalizePath<Router>;

/// Create the full router with application state
///
/// `/states/1` and `/states/1/` reach the same handler.
pub fn create_router(state: AppState) -> App {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .merge(states::create_states_router())
        .merge(districts::create_districts_router())
        // Login is reachable without a token
        .merge(auth::create_auth_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
