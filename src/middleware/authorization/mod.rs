//! Per-route permission checks on top of bearer token authentication.

mod guard;
mod guard_middleware;

pub use guard::RequirePermission;
pub use guard_middleware::RequirePermissionMiddleware;

use crate::middleware::authentication::{extract_bearer_token, get_header, AuthError, Claims, JwtVerifier};
use actix_web::http::header::HeaderMap;

pub const GET_ALBUMS: &str = "get:albums";
pub const POST_ALBUMS: &str = "post:albums";
pub const PATCH_ALBUMS: &str = "patch:albums";
pub const DELETE_ALBUMS: &str = "delete:albums";

pub const GET_ARTISTS: &str = "get:artists";
pub const POST_ARTISTS: &str = "post:artists";
pub const PATCH_ARTISTS: &str = "patch:artists";
pub const DELETE_ARTISTS: &str = "delete:artists";

/// Verifies the request's bearer token and checks that it grants `permission`.
pub async fn authorize(
    verifier: &JwtVerifier,
    headers: &HeaderMap,
    permission: &str,
) -> Result<Claims, AuthError> {
    let authorization = get_header::<String>(headers, "authorization")
        .map_err(|err| {
            tracing::debug!("{}", err);
            AuthError::MissingHeader("Authorization header is expected.")
        })?
        .ok_or(AuthError::MissingHeader("Authorization header is expected."))?;

    let token = extract_bearer_token(&authorization)?;
    let claims = verifier.verify(token).await?;
    claims.require_permission(permission)?;

    Ok(claims)
}
