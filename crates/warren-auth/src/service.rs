//! Authentication service — registration, login, and email
//! verification orchestration.

use tracing::info;
use uuid::Uuid;
use warren_core::error::{WarrenError, WarrenResult};
use warren_core::models::user::{CreateUser, Role, User};
use warren_core::repository::{UserRepository, VerificationTokenRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::mailer::VerificationMailer;
use crate::password;
use crate::token;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub tenant_id: Uuid,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token.
    pub token: String,
    /// The authenticated user (project before returning to clients).
    pub user: User,
}

/// Authentication service.
///
/// Generic over repository and mailer implementations so the flow
/// logic has no dependency on the database crate or a real mail
/// transport.
pub struct AuthService<U, V, M>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    M: VerificationMailer,
{
    users: U,
    tokens: V,
    mailer: M,
    config: AuthConfig,
}

impl<U, V, M> AuthService<U, V, M>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    M: VerificationMailer,
{
    pub fn new(users: U, tokens: V, mailer: M, config: AuthConfig) -> Self {
        Self {
            users,
            tokens,
            mailer,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new, unverified user and send it a verification
    /// link.
    pub async fn register(&self, input: RegisterInput) -> WarrenResult<()> {
        // 1. Validate input shape.
        if !is_valid_email(&input.email) {
            return Err(AuthError::Validation("Invalid email address".into()).into());
        }
        if input.password.len() < self.config.min_password_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            ))
            .into());
        }

        // 2. Reject known-taken emails up front. The unique index
        //    still backstops the race where two registrations slip
        //    past this check together.
        match self.users.get_by_email(&input.email).await {
            Ok(_) => {
                return Err(WarrenError::Conflict {
                    entity: "user".into(),
                });
            }
            Err(WarrenError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        // 3. Create the user, unverified, with the default role.
        let user = self
            .users
            .create(CreateUser {
                email: input.email.clone(),
                password: input.password,
                tenant_id: input.tenant_id,
                role: Role::User,
            })
            .await?;

        // 4. Issue a verification token and hand the link to the
        //    mail collaborator. There is no transaction spanning the
        //    user and token writes; a crash between them leaves the
        //    user unverifiable until a token is re-issued manually.
        let token = self.tokens.issue(user.id).await?;
        let url = format!("{}?token={}", self.config.verification_url_base, token);
        self.mailer.send_verification(&user.email, &url).await?;

        info!(email = %user.email, "Registered new user");
        Ok(())
    }

    /// Authenticate with email + password and issue a session token.
    pub async fn login(&self, email: &str, password: &str) -> WarrenResult<LoginOutput> {
        // 1. Look up the user. An unknown email reads exactly like a
        //    wrong password.
        let user = match self.users.get_by_email(email).await {
            Ok(u) => u,
            Err(WarrenError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        // 2. Verify the password off the event loop.
        let password = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
            .await
            .map_err(|e| WarrenError::Internal(format!("verify task failed: {e}")))??;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        // 3. A correct password on an unverified account is refused,
        //    not silently tokenized.
        if !user.verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        // 4. Issue the session token.
        let token = token::issue_session_token(&user.email, user.tenant_id, &self.config)?;

        info!(email = %user.email, "User logged in");
        Ok(LoginOutput { token, user })
    }

    /// Redeem a verification token, marking the owning user verified.
    ///
    /// One-way and single-use: the token row is gone after the first
    /// successful redemption, and `verified` never reverts.
    pub async fn verify_email(&self, raw_token: &str) -> WarrenResult<()> {
        // 1. Consume the token. Unknown and expired look identical.
        let user_id = match self.tokens.consume(raw_token).await {
            Ok(id) => id,
            Err(WarrenError::NotFound { .. }) => {
                return Err(AuthError::Validation(
                    "Invalid or expired verification token".into(),
                )
                .into());
            }
            Err(e) => return Err(e),
        };

        // 2. Resolve the user and flip the flag.
        let user = match self.users.get_by_id(user_id).await {
            Ok(u) => u,
            Err(WarrenError::NotFound { .. }) => {
                return Err(AuthError::Validation("User not found".into()).into());
            }
            Err(e) => return Err(e),
        };

        self.users.mark_verified(&user.email).await?;

        info!(email = %user.email, "Email verified");
        Ok(())
    }

    /// Validate a session token and re-resolve its user.
    ///
    /// Deliberately weaker than the request gatekeeper: an unverified
    /// user still passes here, so a frontend can tell "logged in"
    /// apart from "allowed to call protected APIs".
    pub async fn verify_session(&self, raw_token: &str) -> WarrenResult<User> {
        let claims = token::decode_session_token(raw_token, &self.config)?;

        match self.users.get_by_email(&claims.email).await {
            Ok(user) => Ok(user),
            Err(WarrenError::NotFound { .. }) => Err(WarrenError::Unauthorized {
                reason: "User not found".into(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Minimal email shape check: one `@` with a non-empty local part
/// and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|part| !part.is_empty())
}
