//! Authentication endpoints: register, login, email verification,
//! and the session check used by frontend bootstrap.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warren_auth::service::RegisterInput;
use warren_core::models::user::PublicUser;

use crate::error::ApiError;
use crate::middleware::bearer_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub tenant_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: PublicUser,
}

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth
        .register(RegisterInput {
            email: body.email,
            password: body.password,
            tenant_id: body.tenant_id,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Registration successful. Please verify your email.".into(),
    }))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let output = state.auth.login(&body.email, &body.password).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: output.user.to_public(),
    }))
}

/// `GET /auth/verify/{token}` — redeem an email verification link.
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.auth.verify_email(&token).await?;

    Ok(Json(MessageResponse {
        message: "Email verified successfully".into(),
    }))
}

/// `GET /auth/verify` — session check for frontend bootstrap.
///
/// Unlike the gatekeeper on protected routes, this succeeds for
/// unverified users: "am I logged in" is a weaker question than "may
/// I call protected APIs".
pub async fn verify_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify_session(token).await?;

    Ok(Json(SessionResponse {
        user: user.to_public(),
    }))
}
