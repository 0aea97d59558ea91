use super::{AuthError, Claims, KeySet};
use crate::configuration::AuthSettings;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

const UNPARSEABLE: &str = "Unable to parse authentication token.";

/// Checks signature, issuer, audience and expiry of access tokens.
pub struct JwtVerifier {
    keys: KeySet,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(keys: KeySet, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self { keys, validation }
    }

    pub fn from_settings(
        settings: &AuthSettings,
        http_client: reqwest::Client,
    ) -> Result<Self, std::io::Error> {
        let keys = KeySet::from_settings(settings, http_client)?;
        Ok(Self::new(keys, &settings.issuer(), &settings.audience))
    }

    #[tracing::instrument(name = "Verify access token.", skip_all)]
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|err| {
            tracing::debug!("Token header rejected: {}", err);
            AuthError::InvalidHeader(UNPARSEABLE)
        })?;
        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;

        let jwk = self.keys.find(&kid).await?;
        let key = DecodingKey::from_jwk(&jwk).map_err(|err| {
            tracing::error!(kid = %kid, "Unusable signing key: {}", err);
            AuthError::InvalidHeader("Unable to find the appropriate key.")
        })?;

        decode::<Claims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("Token rejected: {}", err);
                match err.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    ErrorKind::InvalidAudience
                    | ErrorKind::InvalidIssuer
                    | ErrorKind::ImmatureSignature
                    | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims(
                        "Incorrect claims. Please, check the audience and issuer.",
                    ),
                    ErrorKind::Json(_) => AuthError::InvalidClaims("Unable to read token claims."),
                    _ => AuthError::InvalidHeader(UNPARSEABLE),
                }
            })
    }
}
