use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Why a request was refused by the permission guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Header absent or not of the form `Bearer <token>`.
    #[error("{0}")]
    MissingHeader(&'static str),
    /// Token unreadable, or signed with a key we do not know.
    #[error("{0}")]
    InvalidHeader(&'static str),
    #[error("Token expired.")]
    TokenExpired,
    #[error("{0}")]
    InvalidClaims(&'static str),
    #[error("Permission not found.")]
    Unauthorized,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) => "authorization_header_missing",
            Self::InvalidHeader(_) => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims(_) => "invalid_claims",
            Self::Unauthorized => "unauthorized",
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "code": self.code(),
            "description": self.to_string(),
        }))
    }
}
