//! Database-specific error types and conversions.

use warren_core::error::WarrenError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Row decode failed: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Unique constraint violated: {entity}")]
    Conflict { entity: String },

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

impl DbError {
    /// Classify a raw SurrealDB error, turning unique-index violations
    /// into `Conflict` so callers see the taxonomy, not the engine.
    pub fn from_query(err: surrealdb::Error, entity: &str) -> DbError {
        if is_index_conflict(&err) {
            DbError::Conflict {
                entity: entity.into(),
            }
        } else {
            DbError::Surreal(err)
        }
    }
}

/// SurrealDB reports unique-index violations as a plain error whose
/// message names the index; there is no structured kind to match on.
fn is_index_conflict(err: &surrealdb::Error) -> bool {
    err.to_string().contains("already contains")
}

impl From<DbError> for WarrenError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => WarrenError::NotFound { entity, id },
            DbError::Conflict { entity } => WarrenError::Conflict { entity },
            DbError::Hash(msg) => WarrenError::Crypto(msg),
            other => WarrenError::Database(other.to_string()),
        }
    }
}
