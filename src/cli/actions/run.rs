use crate::cli::actions::{Action, begin, verify};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Begin(globals, args) => begin::execute(globals, args).await,
        Action::Verify(globals, args) => verify::execute(globals, args).await,
    }
}
