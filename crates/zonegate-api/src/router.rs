//! Route definitions for the zonegate HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(oauth_routes(&state))
        .merge(zone_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Endpoints behind the authentication gate. The zone is resolved before the
/// gate runs.
fn oauth_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/oauth/token", post(handlers::token::token))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::authenticate,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::zone::resolve_zone,
        ))
}

/// Zone-scoped credential validation
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/zones/{zone_id}/client-secret/validate",
            post(handlers::zones::validate_client_secret),
        )
        .route(
            "/zones/{zone_id}/password/validate",
            post(handlers::zones::validate_password),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/healthz", get(handlers::health::health))
}
