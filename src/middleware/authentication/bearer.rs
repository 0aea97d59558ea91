use super::AuthError;

/// Pulls the token out of an `Authorization` header value.
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(authorization: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(AuthError::MissingHeader("Authorization header is expected.")),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::MissingHeader(
            "Authorization header must start with \"Bearer\".",
        )),
        [_] => Err(AuthError::MissingHeader("Token not found.")),
        [_, token] => Ok(*token),
        _ => Err(AuthError::MissingHeader(
            "Authorization header must be bearer token.",
        )),
    }
}
