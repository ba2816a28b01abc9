use crate::{
    cli::{actions::print_outcome, globals::GlobalArgs},
    mfa::BypassCache,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub user_name: String,
    pub user_phone: Option<String>,
    pub remote_host: Option<String>,
}

/// Run the second factor for one user and print the outcome.
/// # Errors
/// Returns an error if the transport cannot be configured or stdout is closed.
pub async fn execute(globals: GlobalArgs, args: Args) -> Result<()> {
    debug!("begin: {:?} {:?}", globals, args);

    let second_factor = globals.second_factor(Arc::new(BypassCache::new()))?;

    let outcome = second_factor
        .begin(
            args.remote_host.as_deref(),
            &args.user_name,
            args.user_phone.as_deref(),
        )
        .await;

    print_outcome(&outcome)
}
