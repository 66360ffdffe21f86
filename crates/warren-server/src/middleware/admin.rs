//! Admin gate — the composable role predicate for mutating routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use warren_core::error::WarrenError;
use warren_core::models::user::Role;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

/// Requires an already-authenticated admin. Layer inside
/// [`require_auth`](crate::middleware::require_auth) so the user is
/// resolved first.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| {
            ApiError(WarrenError::Unauthorized {
                reason: "No authentication token provided".into(),
            })
        })?;

    if user.0.role != Role::Admin {
        return Err(ApiError(WarrenError::Forbidden {
            reason: "Access denied".into(),
        }));
    }

    Ok(next.run(request).await)
}
