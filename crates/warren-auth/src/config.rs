//! Authentication configuration.

/// Configuration for the authentication service.
///
/// Constructed once at startup and passed by reference into every
/// component that needs it; nothing reads ambient process state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Server-held secret for HS256 session-token signing. Rotating
    /// it invalidates every outstanding token.
    pub jwt_secret: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Session token lifetime in seconds (default: 86_400 = 24 hours).
    pub session_lifetime_secs: u64,
    /// Minimum password length for registration (default: 6).
    pub min_password_length: usize,
    /// Base URL embedded in verification emails; the token is
    /// appended as a `token` query parameter.
    pub verification_url_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_issuer: "warren".into(),
            session_lifetime_secs: 86_400,
            min_password_length: 6,
            verification_url_base: "http://localhost:5002/verify-email".into(),
        }
    }
}
