//! Route table and middleware composition.

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;

use crate::error::ErrorBody;
use crate::handlers::{auth, features, health, tenants, users};
use crate::middleware::{require_admin, require_auth, resolve_tenant};
use crate::state::AppState;

/// Build the full application router.
///
/// Three tiers: public routes, bearer-authenticated routes (verified
/// users only), and admin routes layered inside the auth gate.
pub fn router(state: AppState) -> Router {
    // Mutations sit behind the composable admin gate; the auth gate
    // wraps them below so the user is resolved first.
    let admin_routes = Router::new()
        .route("/users/{id}/role", put(users::update_role))
        .route("/tenants", post(tenants::create_tenant))
        .route("/tenants/{id}/settings", put(tenants::update_settings))
        .layer(middleware::from_fn(require_admin));

    let protected_routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/profile", get(users::profile))
        .route("/tenants", get(tenants::list_tenants))
        .route("/tenants/{id}", get(tenants::get_tenant))
        .route("/features", get(features::list_features))
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Host-subdomain resolution applies only to the public bootstrap
    // route; it never feeds the authenticated pipeline.
    let host_routes = Router::new()
        .route("/tenant", get(tenants::current_tenant))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_tenant));

    Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/verify", get(auth::verify_session))
        .route("/auth/verify/{token}", get(auth::verify_email))
        .merge(host_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Route not found".into(),
        }),
    )
}
