use super::AuthError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Decoded payload of a verified access token.
///
/// Audience and issuer are checked by the verifier and not kept here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    pub iss: Option<String>,
    pub sub: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
    pub permissions: Option<HashSet<String>>,
}

impl Claims {
    pub fn require_permission(&self, permission: &str) -> Result<(), AuthError> {
        let permissions = self
            .permissions
            .as_ref()
            .ok_or(AuthError::InvalidClaims("Permissions not included in JWT."))?;

        if permissions.contains(permission) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}
