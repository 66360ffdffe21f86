//! Tenant endpoints, plus the public host-resolved bootstrap route.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warren_core::models::tenant::{CreateTenant, Tenant};
use warren_core::repository::TenantRepository;

use crate::error::ApiError;
use crate::handlers::auth::MessageResponse;
use crate::middleware::ResolvedTenant;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
    pub subdomain: String,
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub settings: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct CreateTenantResponse {
    pub id: Uuid,
    pub message: String,
}

/// `GET /tenants`
pub async fn list_tenants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tenant>>, ApiError> {
    Ok(Json(state.tenants.list().await?))
}

/// `GET /tenants/{id}`
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(state.tenants.get_by_id(id).await?))
}

/// `POST /tenants` — admin only.
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(body): Json<CreateTenantRequest>,
) -> Result<Json<CreateTenantResponse>, ApiError> {
    let tenant = state
        .tenants
        .create(CreateTenant {
            name: body.name,
            subdomain: body.subdomain,
            settings: body.settings,
        })
        .await?;

    Ok(Json(CreateTenantResponse {
        id: tenant.id,
        message: "Tenant created successfully".into(),
    }))
}

/// `PUT /tenants/{id}/settings` — admin only. Replaces the whole
/// settings blob.
pub async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.tenants.update_settings(id, body.settings).await?;

    Ok(Json(MessageResponse {
        message: "Tenant settings updated successfully".into(),
    }))
}

/// `GET /tenant` — public bootstrap: the tenant matching the
/// request's host subdomain (branding for login screens and the
/// like). Authenticated routes ignore this resolution entirely.
pub async fn current_tenant(
    Extension(ResolvedTenant(tenant)): Extension<ResolvedTenant>,
) -> Json<Tenant> {
    Json(tenant)
}
