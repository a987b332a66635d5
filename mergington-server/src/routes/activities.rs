use axum::{
    Router,
    routing::{delete, get, post},
};
use mergington_core::api::routes::activities;

use crate::{AppState, handlers::activities as handlers};

pub fn create_activity_routes() -> Router<AppState> {
    Router::new()
        .route(
            activities::COLLECTION,
            get(handlers::list_activities_handler),
        )
        .route(activities::SIGNUP, post(handlers::signup_handler))
        .route(activities::UNREGISTER, delete(handlers::unregister_handler))
}
