use crate::cli::Cli;
use crate::cli::output;
use crate::config::app_config::Settings;
use crate::core::errors::Result;
use crate::core::services::reconciler::SyncOutcome;

use super::registry_helpers;

/// Execute the `keysync sync` command.
///
/// Fetches the local public SSH key, checks whether the hosting API
/// already has it, and uploads it when absent. At most one create call
/// is issued; a key the host already has is never re-sent.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;

    if cli.verbose {
        registry_helpers::print_settings(&settings);
    }

    let reconciler = registry_helpers::build_reconciler(&settings)?;

    let sp = output::spinner("Reconciling public SSH key with the registry...");
    let outcome = reconciler.sync()?;

    match outcome {
        SyncOutcome::AlreadyUploaded => {
            output::finish_spinner(sp, "Public SSH key is already uploaded!");
        }
        SyncOutcome::Uploaded => {
            output::finish_spinner(sp, "Public SSH key uploaded!");
        }
    }

    Ok(())
}
