//! Bearer authentication middleware.
//!
//! Applied to every protected route: extracts the bearer token,
//! validates it, re-resolves the user, and enforces the verified
//! flag. The resolved user is attached to request extensions for the
//! handlers.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;
use warren_core::error::WarrenError;
use warren_core::models::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Pull the raw bearer token out of the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            ApiError(WarrenError::Unauthorized {
                reason: "No authentication token provided".into(),
            })
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError(WarrenError::Unauthorized {
            reason: "No authentication token provided".into(),
        })
    })?;

    // An empty token would otherwise reach the JWT decoder.
    if token.is_empty() {
        return Err(ApiError(WarrenError::Unauthorized {
            reason: "No authentication token provided".into(),
        }));
    }

    Ok(token)
}

/// Authentication gate for protected routes.
///
/// Fails 401 for a missing/invalid token or a vanished user, 403 for
/// a valid but unverified account — stricter than the session check
/// on `GET /auth/verify`, which admits unverified users.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?.to_string();

    let user = state.auth.verify_session(&token).await.map_err(|e| {
        warn!(error = %e, "Rejected bearer token");
        e
    })?;

    if !user.verified {
        return Err(ApiError(WarrenError::Forbidden {
            reason: "Email not verified".into(),
        }));
    }

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            ApiError(WarrenError::Unauthorized {
                reason: "No authentication token provided".into(),
            })
        })
    }
}
