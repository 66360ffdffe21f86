//! Logging stand-in for the email-delivery collaborator.

use tracing::info;
use warren_auth::VerificationMailer;
use warren_core::error::WarrenResult;

/// Writes the verification link to the log instead of sending mail.
///
/// Real delivery (SMTP, SendGrid, ...) is outside this service; swap
/// this implementation at the [`VerificationMailer`] seam.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl VerificationMailer for LogMailer {
    async fn send_verification(&self, email: &str, verification_url: &str) -> WarrenResult<()> {
        info!(
            email = %email,
            url = %verification_url,
            "Sending verification email"
        );
        Ok(())
    }
}
