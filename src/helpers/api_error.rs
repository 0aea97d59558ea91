use super::JsonResponse;
use crate::db::RepositoryError;
use crate::forms::FormError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Failures surfaced to API clients. The body never carries internal details;
/// those are logged where the error is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        JsonResponse::error(self.status_code(), &self.to_string())
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Missing(_) => {
                tracing::debug!("Rejected request body: {}", err);
                Self::BadRequest
            }
            // Values the albums and artists columns cannot hold fail like a rejected write.
            FormError::Invalid(_) => {
                tracing::warn!("Unstorable request body: {}", err);
                Self::Internal
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RowNotFound(_) => Self::NotFound,
            // Duplicate titles have no dedicated status.
            err => {
                tracing::error!("Storage failure: {}", err);
                Self::Internal
            }
        }
    }
}
