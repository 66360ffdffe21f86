//! User endpoints, all scoped to the authenticated caller's tenant.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;
use warren_core::error::WarrenError;
use warren_core::models::user::{PublicUser, Role};
use warren_core::repository::UserRepository;

use crate::error::ApiError;
use crate::handlers::auth::MessageResponse;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// `GET /users` — every user in the caller's tenant, password hashes
/// stripped by the projection.
///
/// The tenant comes from the authenticated user, never from the
/// request's host.
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = state.users.list_by_tenant(caller.tenant_id).await?;

    Ok(Json(users.iter().map(|u| u.to_public()).collect()))
}

/// `GET /users/profile`
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state.users.get_by_id(caller.id).await?;

    Ok(Json(user.to_public()))
}

/// `PUT /users/{id}/role` — admin only (enforced by the admin gate).
///
/// Scoped by the caller's tenant: a target in another tenant reads
/// as not found.
pub async fn update_role(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let role = Role::parse(&body.role).ok_or_else(|| {
        ApiError(WarrenError::Validation {
            message: "Invalid role".into(),
        })
    })?;

    state.users.update_role(id, caller.tenant_id, role).await?;

    Ok(Json(MessageResponse {
        message: "User role updated successfully".into(),
    }))
}
