//! Feature endpoints — tenant-scoped reads.

use axum::Json;
use axum::extract::State;
use warren_core::models::feature::Feature;
use warren_core::repository::FeatureRepository;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// `GET /features` — features of the caller's tenant.
pub async fn list_features(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<Json<Vec<Feature>>, ApiError> {
    Ok(Json(state.features.list_by_tenant(caller.tenant_id).await?))
}
