pub mod begin;
pub mod verify;

// The match over actions lives in `run` so this module stays small.
mod run;

use crate::{cli::globals::GlobalArgs, mfa::Outcome};
use anyhow::Result;
use std::io::Write;

#[derive(Debug)]
pub enum Action {
    Begin(GlobalArgs, begin::Args),
    Verify(GlobalArgs, verify::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action cannot be set up or its outcome cannot be written.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Write the outcome as one JSON line on stdout.
fn print_outcome(outcome: &Outcome) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, outcome)?;
    writeln!(stdout)?;
    Ok(())
}
