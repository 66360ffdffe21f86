//! Tenant domain model.
//!
//! A tenant is an isolated customer organization. Every user and
//! feature record is scoped to exactly one tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Unique host label used for request-time tenant resolution
    /// (`acme` in `acme.example.com`).
    pub subdomain: String,
    /// Opaque key-value blob (branding color, logo, ...). Updates
    /// replace the whole blob, they do not merge.
    pub settings: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub subdomain: String,
    pub settings: Option<serde_json::Value>,
}
