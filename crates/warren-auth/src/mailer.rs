//! Email delivery seam.
//!
//! Actual delivery is an external collaborator; this trait is the
//! boundary. The server installs a logging stub by default, tests
//! install capturing fakes.

use warren_core::error::WarrenResult;

/// Sends a verification link to a freshly registered address.
pub trait VerificationMailer: Send + Sync {
    fn send_verification(
        &self,
        email: &str,
        verification_url: &str,
    ) -> impl Future<Output = WarrenResult<()>> + Send;
}
