use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use mergington_core::{RegistryError, api::ErrorBody};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.message,
            status: self.status.as_u16(),
        });

        (self.status, body).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => Self::not_found(err.to_string()),
            RegistryError::AlreadyEnrolled { .. }
            | RegistryError::NotEnrolled { .. } => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

// Undecodable activity names never reach the registry.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

// Missing or malformed query parameters never reach the registry.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_client_statuses() {
        let not_found: AppError = RegistryError::NotFound {
            activity: "Fictional Club".into(),
        }
        .into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);

        let already: AppError = RegistryError::AlreadyEnrolled {
            activity: "Chess Club".into(),
            email: "michael@mergington.edu".into(),
        }
        .into();
        assert_eq!(already.status, StatusCode::BAD_REQUEST);
        assert!(already.message.contains("already signed up"));

        let missing: AppError = RegistryError::NotEnrolled {
            activity: "Chess Club".into(),
            email: "x@mergington.edu".into(),
        }
        .into();
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert!(missing.message.contains("not signed up"));
    }

    #[test]
    fn response_carries_status_and_detail() {
        let response = AppError::not_found("Activity not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
