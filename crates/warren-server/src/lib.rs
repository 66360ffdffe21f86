//! Warren Server — the HTTP surface over the auth, user, tenant, and
//! feature stores.
//!
//! Exposed as a library so integration tests can build the router
//! against an embedded database.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod router;
pub mod state;
pub mod sweep;

pub use config::ServerConfig;
pub use router::router;
pub use state::AppState;
