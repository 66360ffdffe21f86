//! Background reaper for expired verification tokens.

use std::time::Duration;

use surrealdb::engine::any::Any;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use warren_core::repository::VerificationTokenRepository;
use warren_db::repository::SurrealVerificationTokenRepository;

/// Spawn the periodic sweep.
///
/// Runs until the process exits. A sweep racing a concurrent
/// consumption is harmless — both sides converge on "not found" for
/// an expired token.
pub fn spawn_sweeper(
    tokens: SurrealVerificationTokenRepository<Any>,
    interval_secs: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            match tokens.sweep().await {
                Ok(0) => {}
                Ok(removed) => {
                    info!(removed, "Swept expired verification tokens");
                }
                Err(e) => {
                    warn!(error = %e, "Verification token sweep failed");
                }
            }
        }
    })
}
