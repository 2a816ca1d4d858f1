use std::fmt::{Display, Formatter};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::ValidationErrors;
use thiserror::Error;
use tracing::{debug, error, warn};

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The body could not be read at all; carries the extractor's own status.
    BodyRejected(StatusCode, String),
    UnprocessableEntity(ValidationErrors),
}

impl ApiError {
    pub fn body_rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::BodyRejected(status, message.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::UnprocessableEntity(errors)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BodyRejected(status, message) => {
                write!(f, "Status={}, BodyRejected: {}", status.as_u16(), message)
            }
            ApiError::UnprocessableEntity(errors) => {
                write!(f, "Status=422, UnprocessableEntity: {}", errors)
            }
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::ApiError(ApiError::UnprocessableEntity(errors)) => {
                debug!(%errors, "Rejected request body");
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(errors)).into_response();
            }
            ServerError::ApiError(ApiError::BodyRejected(status, message)) => {
                warn!(%status, %message, "Request body rejected");
                (status, message)
            }
            e => {
                error!(%e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected Error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}
