use crate::{
    cli::{actions::print_outcome, globals::GlobalArgs},
    mfa::BypassCache,
};
use anyhow::Result;
use std::{fmt, sync::Arc};
use tracing::debug;

pub struct Args {
    pub user_name: String,
    pub otp_code: String,
    pub state: String,
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("user_name", &self.user_name)
            .field("otp_code", &"[REDACTED]")
            .field("state", &self.state)
            .finish()
    }
}

/// Confirm a pending challenge and print the outcome.
/// # Errors
/// Returns an error if the transport cannot be configured or stdout is closed.
pub async fn execute(globals: GlobalArgs, args: Args) -> Result<()> {
    debug!("verify: {:?} {:?}", globals, args);

    let second_factor = globals.second_factor(Arc::new(BypassCache::new()))?;

    let outcome = second_factor
        .verify(&args.user_name, &args.otp_code, &args.state)
        .await;

    print_outcome(&outcome)
}
