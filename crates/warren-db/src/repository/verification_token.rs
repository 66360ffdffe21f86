//! SurrealDB implementation of [`VerificationTokenRepository`].
//!
//! Token values are 32 cryptographically random bytes, hex-encoded.
//! Consumption matches and deletes in a single statement so a token
//! can never be redeemed twice, even by concurrent requests.

use chrono::{DateTime, Duration, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;
use warren_core::error::WarrenResult;
use warren_core::repository::VerificationTokenRepository;

use crate::error::DbError;

/// Verification tokens live for 24 hours from issuance.
const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, SurrealValue)]
struct TokenRow {
    #[allow(dead_code)]
    token: String,
    user_id: String,
    #[allow(dead_code)]
    expires: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// Generate a fresh 256-bit token, hex-encoded.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    hex::encode(bytes)
}

/// SurrealDB implementation of the verification-token repository.
pub struct SurrealVerificationTokenRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealVerificationTokenRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealVerificationTokenRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Persist a token row with an explicit expiry.
    ///
    /// Exposed for tests that need to place a token exactly at or
    /// past the expiry boundary.
    pub async fn insert_with_expiry(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> WarrenResult<()> {
        self.db
            .query(
                "CREATE type::record('verification_token', $id) SET \
                 token = $tok, \
                 user_id = $user_id, \
                 expires = $expires",
            )
            .bind(("id", Uuid::new_v4().to_string()))
            .bind(("tok", token.to_string()))
            .bind(("user_id", user_id.to_string()))
            .bind(("expires", expires))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::from_query(e, "verification_token"))?;

        Ok(())
    }
}

impl<C: Connection> VerificationTokenRepository for SurrealVerificationTokenRepository<C> {
    async fn issue(&self, user_id: Uuid) -> WarrenResult<String> {
        let token = generate_token();
        let expires = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

        self.insert_with_expiry(user_id, &token, expires).await?;

        Ok(token)
    }

    async fn consume(&self, token: &str) -> WarrenResult<Uuid> {
        // Match and delete in one statement; RETURN BEFORE hands back
        // the deleted row. A replayed, expired, or unknown token all
        // collapse to the same empty result.
        let mut result = self
            .db
            .query(
                "DELETE verification_token \
                 WHERE token = $token AND expires > time::now() \
                 RETURN BEFORE",
            )
            .bind(("token", token.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TokenRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "verification_token".into(),
            id: "token".into(),
        })?;

        let user_id = Uuid::parse_str(&row.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;

        Ok(user_id)
    }

    async fn sweep(&self) -> WarrenResult<u64> {
        // Count expired tokens first, then delete. A consume racing
        // the delete converges on "not found" either way.
        let mut count_result = self
            .db
            .query(
                "SELECT count() AS total FROM verification_token \
                 WHERE expires < time::now() GROUP ALL",
            )
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        self.db
            .query("DELETE verification_token WHERE expires < time::now()")
            .await
            .map_err(DbError::from)?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
