use axum::{
    extract::State,
    response::{Json, Redirect},
};
use mergington_core::api::routes;
use serde_json::{Value, json};
use tracing::debug;

use crate::infra::app_state::AppState;

/// `/` sends browsers to the static landing page.
pub async fn root_redirect_handler() -> Redirect {
    Redirect::temporary(routes::LANDING_PAGE)
}

pub async fn ping_handler() -> Json<Value> {
    debug!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Mergington activities API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let registry = state.registry();
    let uptime = chrono::Utc::now() - state.started_at;

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime.num_seconds(),
        "checks": {
            "registry": {
                "status": "healthy",
                "activities": registry.len(),
                "participants": registry.total_participants(),
            },
            "static_files": {
                "status": if state.config().static_dir().is_dir() { "healthy" } else { "missing" },
                "dir": state.config().static_dir().display().to_string(),
            }
        }
    }))
}
