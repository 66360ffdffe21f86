//! Server configuration, loaded once at startup from the
//! environment and passed down by value — business logic never reads
//! environment variables itself.

use tracing::warn;
use warren_auth::AuthConfig;
use warren_db::DbConfig;

const DEV_JWT_SECRET: &str = "warren-dev-secret-change-me";

/// Top-level configuration for the server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind (e.g. `0.0.0.0:5000`).
    pub bind_addr: String,
    /// Seconds between expired-verification-token sweeps.
    pub sweep_interval_secs: u64,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Assemble configuration from `WARREN_*` environment variables,
    /// falling back to local-development defaults.
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("WARREN_JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                warn!("WARREN_JWT_SECRET not set; using an insecure development secret");
                DEV_JWT_SECRET.into()
            }
        };

        let db_defaults = DbConfig::default();
        let auth_defaults = AuthConfig::default();

        Self {
            bind_addr: env_or("WARREN_BIND_ADDR", "0.0.0.0:5000"),
            sweep_interval_secs: std::env::var("WARREN_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3_600),
            db: DbConfig {
                endpoint: env_or("WARREN_DB_ENDPOINT", &db_defaults.endpoint),
                namespace: env_or("WARREN_DB_NAMESPACE", &db_defaults.namespace),
                database: env_or("WARREN_DB_NAME", &db_defaults.database),
                username: env_or("WARREN_DB_USER", &db_defaults.username),
                password: env_or("WARREN_DB_PASS", &db_defaults.password),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_issuer: env_or("WARREN_JWT_ISSUER", &auth_defaults.jwt_issuer),
                verification_url_base: env_or(
                    "WARREN_VERIFICATION_URL",
                    &auth_defaults.verification_url_base,
                ),
                ..auth_defaults
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
