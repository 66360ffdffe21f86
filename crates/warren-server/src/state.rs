//! Shared application state.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use warren_auth::{AuthConfig, AuthService};
use warren_db::repository::{
    SurrealFeatureRepository, SurrealTenantRepository, SurrealUserRepository,
    SurrealVerificationTokenRepository,
};

use crate::mailer::LogMailer;

/// The auth service wired to the production repositories and the
/// logging mailer.
pub type Auth = AuthService<
    SurrealUserRepository<Any>,
    SurrealVerificationTokenRepository<Any>,
    LogMailer,
>;

/// Request-scoped handle to every service the handlers need.
///
/// Stateless apart from the database handles; cheap to clone per
/// request.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Auth>,
    pub users: SurrealUserRepository<Any>,
    pub tenants: SurrealTenantRepository<Any>,
    pub features: SurrealFeatureRepository<Any>,
    pub tokens: SurrealVerificationTokenRepository<Any>,
}

impl AppState {
    pub fn new(db: Surreal<Any>, config: AuthConfig) -> Self {
        let users = SurrealUserRepository::new(db.clone());
        let tokens = SurrealVerificationTokenRepository::new(db.clone());
        let auth = Arc::new(AuthService::new(
            users.clone(),
            tokens.clone(),
            LogMailer,
            config,
        ));
        Self {
            auth,
            users,
            tenants: SurrealTenantRepository::new(db.clone()),
            features: SurrealFeatureRepository::new(db),
            tokens,
        }
    }
}
