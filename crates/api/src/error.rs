use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pledger_services::auth::AuthError;
use pledger_services::dao::DaoError;
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    Internal(String),
}

/// Error bodies carry a human-readable message only.
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // Duplicate email reads as a plain 400 on the wire.
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Internal(detail) => {
                error!(%detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            warn!(%status, %message, "Request rejected");
        }

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<DaoError> for ApiError {
    fn from(err: DaoError) -> Self {
        match err {
            DaoError::NotFound(msg) => ApiError::NotFound(msg),
            DaoError::DuplicateKey(msg) => ApiError::Conflict(msg),
            DaoError::Forbidden(msg) => ApiError::Forbidden(msg),
            DaoError::Validation(msg) => ApiError::Validation(msg),
            DaoError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::HashError(msg) => ApiError::Internal(msg),
        }
    }
}
