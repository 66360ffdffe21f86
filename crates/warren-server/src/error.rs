//! HTTP error mapping.
//!
//! Every failure leaving the API is a JSON object with a single
//! user-safe `message` field. Internal detail goes to the log, never
//! to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;
use warren_core::error::WarrenError;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API-level error: a taxonomy error plus its HTTP rendering.
#[derive(Debug)]
pub struct ApiError(pub WarrenError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WarrenError::Validation { .. } => StatusCode::BAD_REQUEST,
            // Conflict renders as 400 — the observed surface of the
            // register endpoint, applied uniformly.
            WarrenError::Conflict { .. } => StatusCode::BAD_REQUEST,
            WarrenError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            WarrenError::Forbidden { .. } => StatusCode::FORBIDDEN,
            WarrenError::NotFound { .. } => StatusCode::NOT_FOUND,
            WarrenError::Database(_) | WarrenError::Crypto(_) | WarrenError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            WarrenError::Validation { message } => message.clone(),
            WarrenError::Conflict { entity } => format!("{} already exists", capitalize(entity)),
            WarrenError::Unauthorized { reason } => reason.clone(),
            WarrenError::Forbidden { reason } => reason.clone(),
            WarrenError::NotFound { entity, .. } => format!("{} not found", capitalize(entity)),
            WarrenError::Database(_) | WarrenError::Crypto(_) | WarrenError::Internal(_) => {
                "Something went wrong".into()
            }
        }
    }
}

impl<E: Into<WarrenError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "Internal error while handling request");
        }
        (
            status,
            Json(ErrorBody {
                message: self.message(),
            }),
        )
            .into_response()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_to_status_mapping_is_stable() {
        let cases = [
            (
                WarrenError::Validation {
                    message: "bad".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                WarrenError::Conflict {
                    entity: "user".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                WarrenError::Unauthorized {
                    reason: "no".into(),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (
                WarrenError::Forbidden {
                    reason: "no".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                WarrenError::NotFound {
                    entity: "tenant".into(),
                    id: "x".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                WarrenError::Database("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                WarrenError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn internal_detail_never_reaches_the_message() {
        let err = ApiError(WarrenError::Database("connection refused at 10.0.0.3".into()));
        assert_eq!(err.message(), "Something went wrong");
    }

    #[test]
    fn conflict_message_names_the_entity() {
        let err = ApiError(WarrenError::Conflict {
            entity: "user".into(),
        });
        assert_eq!(err.message(), "User already exists");
    }
}
