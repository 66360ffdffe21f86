//! Request gatekeeper middleware: bearer authentication, the admin
//! gate, and host-based tenant resolution.

pub mod admin;
pub mod auth;
pub mod tenant;

pub use admin::require_admin;
pub use auth::{CurrentUser, bearer_token, require_auth};
pub use tenant::{ResolvedTenant, resolve_tenant};
