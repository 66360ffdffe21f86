//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Tenant-scoped operations take
//! a `tenant_id` parameter to enforce data isolation; user lookup by
//! email is deliberately global because email uniqueness is global.
//! Implementations over a real datastore live in `warren-db`; tests
//! may substitute in-memory implementations.

use uuid::Uuid;

use crate::error::WarrenResult;
use crate::models::{
    feature::{CreateFeature, Feature},
    tenant::{CreateTenant, Tenant},
    user::{CreateUser, Role, User},
};

/// Persistence of user credentials and identity.
pub trait UserRepository: Send + Sync {
    /// Create a user with a freshly hashed password. Fails with
    /// `Conflict` when the email is already taken.
    fn create(&self, input: CreateUser) -> impl Future<Output = WarrenResult<User>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = WarrenResult<User>> + Send;

    /// Global lookup — email uniqueness is not per-tenant.
    fn get_by_email(&self, email: &str) -> impl Future<Output = WarrenResult<User>> + Send;

    /// Flip `verified` to true. Idempotent; verified never reverts.
    fn mark_verified(&self, email: &str) -> impl Future<Output = WarrenResult<()>> + Send;

    fn list_by_tenant(&self, tenant_id: Uuid)
    -> impl Future<Output = WarrenResult<Vec<User>>> + Send;

    /// Change a user's role, scoped by both id and tenant so a caller
    /// can never mutate a row outside its own tenant. Fails with
    /// `NotFound` when the pair matches nothing.
    fn update_role(
        &self,
        id: Uuid,
        tenant_id: Uuid,
        role: Role,
    ) -> impl Future<Output = WarrenResult<()>> + Send;
}

/// Persistence of tenant records.
pub trait TenantRepository: Send + Sync {
    /// Fails with `Conflict` when the subdomain is already taken.
    fn create(&self, input: CreateTenant) -> impl Future<Output = WarrenResult<Tenant>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = WarrenResult<Tenant>> + Send;

    fn get_by_subdomain(&self, subdomain: &str)
    -> impl Future<Output = WarrenResult<Tenant>> + Send;

    fn list(&self) -> impl Future<Output = WarrenResult<Vec<Tenant>>> + Send;

    /// Replace the settings blob wholesale (no merge).
    fn update_settings(
        &self,
        id: Uuid,
        settings: serde_json::Value,
    ) -> impl Future<Output = WarrenResult<Tenant>> + Send;
}

/// Persistence of single-use email verification tokens.
pub trait VerificationTokenRepository: Send + Sync {
    /// Generate and persist a fresh token for the user; returns the
    /// raw token value. Expiry is fixed at 24 hours from issuance.
    fn issue(&self, user_id: Uuid) -> impl Future<Output = WarrenResult<String>> + Send;

    /// Atomically look up and delete a non-expired token, returning
    /// the associated user id. Missing and expired tokens are both
    /// reported as `NotFound` — callers cannot tell which.
    fn consume(&self, token: &str) -> impl Future<Output = WarrenResult<Uuid>> + Send;

    /// Delete every token past its expiry; returns how many were
    /// removed. Safe to run concurrently with `consume`.
    fn sweep(&self) -> impl Future<Output = WarrenResult<u64>> + Send;
}

/// Persistence of tenant-scoped feature records.
pub trait FeatureRepository: Send + Sync {
    fn create(&self, input: CreateFeature) -> impl Future<Output = WarrenResult<Feature>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = WarrenResult<Feature>> + Send;

    fn list_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> impl Future<Output = WarrenResult<Vec<Feature>>> + Send;

    fn update(
        &self,
        id: Uuid,
        name: String,
        description: String,
    ) -> impl Future<Output = WarrenResult<Feature>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = WarrenResult<()>> + Send;
}
