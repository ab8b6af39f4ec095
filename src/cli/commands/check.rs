use crate::cli::Cli;
use crate::cli::output;
use crate::config::app_config::Settings;
use crate::core::errors::Result;

use super::registry_helpers;

/// Execute the `keysync check` command.
///
/// Read-only probe: reports whether the local public SSH key is already
/// registered, and never uploads. Exits non-zero when the key is absent
/// so provisioning scripts can branch on the result.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;

    if cli.verbose {
        registry_helpers::print_settings(&settings);
    }

    let reconciler = registry_helpers::build_reconciler(&settings)?;

    let sp = output::spinner("Checking the registry for your public SSH key...");
    let uploaded = reconciler.is_uploaded()?;

    if uploaded {
        output::finish_spinner(sp, "Public SSH key is already uploaded!");
        return Ok(());
    }

    sp.finish_and_clear();
    output::warning("Public SSH key is not uploaded yet.");
    println!("  Run 'keysync sync' to upload it.");
    std::process::exit(1);
}
