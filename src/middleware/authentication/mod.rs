//! Bearer token verification.
//!
//! A request is authenticated when its `Authorization: Bearer <jwt>` header
//! carries an RS256 token signed by a key from the issuer's JWKS, issued by
//! the configured domain for the configured audience, and not yet expired.

mod bearer;
mod claims;
mod error;
mod getheader;
mod keyset;
mod verifier;

pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use error::AuthError;
pub use getheader::get_header;
pub use keyset::{KeySet, RemoteKeySet};
pub use verifier::JwtVerifier;
