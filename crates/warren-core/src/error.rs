//! Error types for the Warren system.
//!
//! Every failure surfaced to a caller falls into one of these kinds;
//! the HTTP layer maps each kind to exactly one status code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarrenError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Entity already exists: {entity}")]
    Conflict { entity: String },

    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type WarrenResult<T> = Result<T, WarrenError>;
