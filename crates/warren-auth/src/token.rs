//! JWT session token issuance and verification.
//!
//! Session tokens are stateless HS256 assertions of `{email,
//! tenant_id}` with a fixed 24-hour lifetime. They are never
//! persisted; the server re-validates the signature and re-resolves
//! the user on every request.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The user's email — identity is re-resolved from it per request.
    pub email: String,
    /// Tenant ID (UUID string).
    pub tenant_id: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    pub fn tenant_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.tenant_id).map_err(|_| AuthError::InvalidToken)
    }
}

/// Issue a signed HS256 session token.
pub fn issue_session_token(
    email: &str,
    tenant_id: Uuid,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        email: email.to_string(),
        tenant_id: tenant_id.to_string(),
        iss: config.jwt_issuer.clone(),
        iat: now,
        exp: now + config.session_lifetime_secs as i64,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    let header = Header::new(Algorithm::HS256);

    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify a session token.
///
/// Malformed, expired, and badly signed tokens all fail with the
/// same [`AuthError::InvalidToken`]; the distinction is never exposed.
pub fn decode_session_token(token: &str, config: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_required_spec_claims(&["exp", "iat", "iss"]);

    jsonwebtoken::decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}
