use crate::adapters::key_sources::command_key_source::CommandKeySource;
use crate::adapters::registries::github_registry::{GithubRegistry, KeyLookup};
use crate::cli::output;
use crate::config::app_config::Settings;
use crate::core::errors::Result;
use crate::core::services::reconciler::Reconciler;

/// Wire the reconciler to its production adapters from resolved settings.
pub fn build_reconciler(
    settings: &Settings,
) -> Result<Reconciler<CommandKeySource, GithubRegistry>> {
    let lookup = KeyLookup::parse(&settings.lookup)?;

    Ok(Reconciler {
        source: CommandKeySource::new(settings.key_command.clone()),
        registry: GithubRegistry::new(
            settings.api_url.clone(),
            settings.token.clone(),
            lookup,
            settings.key_title.clone(),
        ),
    })
}

/// Print the resolved connection details (verbose mode).
pub fn print_settings(settings: &Settings) {
    output::detail(&format!("Registry: {}", settings.api_url));
    output::detail(&format!("Lookup mode: {}", settings.lookup));
    output::detail(&format!("Key command: {}", settings.key_command));
}
