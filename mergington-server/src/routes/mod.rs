pub mod activities;

use crate::AppState;
use axum::{Router, routing::get};
use mergington_core::api::routes;

use crate::handlers::system;

/// Create the API router: activity endpoints plus the root redirect and
/// probes.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(routes::ROOT, get(system::root_redirect_handler))
        .route(routes::PING, get(system::ping_handler))
        .route(routes::HEALTH, get(system::health_handler))
        .merge(activities::create_activity_routes())
}
