//! SurrealDB repository implementations.

mod feature;
mod tenant;
mod user;
mod verification_token;

pub use feature::SurrealFeatureRepository;
pub use tenant::SurrealTenantRepository;
pub use user::SurrealUserRepository;
pub use verification_token::SurrealVerificationTokenRepository;
