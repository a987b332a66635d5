use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Json,
};
use mergington_core::{
    ActivityRoster,
    api::{ActionMessage, EmailQuery},
};
use tracing::{info, warn};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Every activity with its current roster.
pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<ActivityRoster> {
    Json(state.registry().list())
}

/// Sign the `email` query parameter up for the activity in the path.
pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> AppResult<Json<ActionMessage>> {
    let Path(activity_name) = path.map_err(|rejection| {
        warn!(error = %rejection, "signup rejected: bad activity name");
        AppError::from(rejection)
    })?;
    let Query(EmailQuery { email }) = query.map_err(|rejection| {
        warn!(activity = %activity_name, error = %rejection, "signup rejected: bad query");
        AppError::from(rejection)
    })?;

    match state.registry().signup(&activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(Json(ActionMessage::new(message)))
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "signup refused");
            Err(err.into())
        }
    }
}

/// Remove the `email` query parameter from the activity in the path.
pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> AppResult<Json<ActionMessage>> {
    let Path(activity_name) = path.map_err(|rejection| {
        warn!(error = %rejection, "unregister rejected: bad activity name");
        AppError::from(rejection)
    })?;
    let Query(EmailQuery { email }) = query.map_err(|rejection| {
        warn!(activity = %activity_name, error = %rejection, "unregister rejected: bad query");
        AppError::from(rejection)
    })?;

    match state.registry().unregister(&activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(Json(ActionMessage::new(message)))
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "unregister refused");
            Err(err.into())
        }
    }
}
