//! Authentication error types.

use thiserror::Error;
use warren_core::error::WarrenError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email not verified")]
    EmailNotVerified,

    /// Malformed, expired, and badly signed tokens all collapse here
    /// so callers cannot probe which check failed.
    #[error("Invalid token")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for WarrenError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidToken => WarrenError::Unauthorized {
                reason: err.to_string(),
            },
            AuthError::EmailNotVerified => WarrenError::Forbidden {
                reason: err.to_string(),
            },
            AuthError::Validation(message) => WarrenError::Validation { message },
            AuthError::Crypto(msg) => WarrenError::Crypto(msg),
        }
    }
}
