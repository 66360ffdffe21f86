//! Email verification token domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-time, time-limited secret proving control of an email
/// address. The `token` value is 32 random bytes, hex-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationToken {
    pub token: String,
    pub user_id: Uuid,
    /// Absolute expiry, issuance + 24 hours.
    pub expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
