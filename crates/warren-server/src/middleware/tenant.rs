//! Host-based tenant resolution.
//!
//! Derives a subdomain from the request's Host header (first label
//! before the first dot) and resolves the matching tenant. This is
//! wired only to the public tenant-bootstrap endpoint; authenticated
//! routes scope by the token's tenant instead, and the two are never
//! merged.

use axum::extract::{Request, State};
use axum::http::header::HOST;
use axum::middleware::Next;
use axum::response::Response;
use warren_core::error::WarrenError;
use warren_core::models::tenant::Tenant;
use warren_core::repository::TenantRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// The tenant matching the request's host, for downstream handlers.
#[derive(Debug, Clone)]
pub struct ResolvedTenant(pub Tenant);

pub async fn resolve_tenant(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            ApiError(WarrenError::NotFound {
                entity: "tenant".into(),
                id: "host".into(),
            })
        })?;

    let subdomain = subdomain_of(host);
    let tenant = state.tenants.get_by_subdomain(subdomain).await?;

    request.extensions_mut().insert(ResolvedTenant(tenant));
    Ok(next.run(request).await)
}

/// First label of the host, with any port stripped.
fn subdomain_of(host: &str) -> &str {
    let host = host.split(':').next().unwrap_or(host);
    host.split('.').next().unwrap_or(host)
}
