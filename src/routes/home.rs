use crate::helpers::ApiError;
use actix_web::{error::ResponseError, HttpRequest, HttpResponse};

pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to music store.")
}

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    ApiError::NotFound.error_response()
}

/// Fallback inside a resource scope. Paths a handler serves under another
/// method (the collection or a single `/{id}` segment) get 405.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    let rest = req.match_info().unprocessed();
    let known_path = match rest.strip_prefix('/') {
        None => rest.is_empty(),
        Some(segment) => !segment.is_empty() && !segment.contains('/'),
    };

    if known_path {
        ApiError::MethodNotAllowed.error_response()
    } else {
        ApiError::NotFound.error_response()
    }
}
