use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::core::errors::{KeysyncError, Result};

/// Default hosting API when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const DEFAULT_CONFIG_FILE: &str = "keysync.toml";
const DEFAULT_LOOKUP: &str = "key-list";
const DEFAULT_KEY_TITLE: &str = "keysync";

/// Optional `keysync.toml` dropped next to the binary by the
/// provisioning system.
///
/// Example:
/// ```toml
/// [registry]
/// api_url = "https://git.internal.example.com"
/// token = "wsk_0d9..."
///
/// [local]
/// key_command = "coder publickey"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub local: LocalSection,
}

/// The `[registry]` section.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrySection {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub lookup: Option<String>,
    pub key_title: Option<String>,
}

/// The `[local]` section.
#[derive(Debug, Default, Deserialize)]
pub struct LocalSection {
    pub key_command: Option<String>,
}

impl FileConfig {
    /// Load the config file.
    ///
    /// An explicit `--config` path must exist; the default `keysync.toml`
    /// in the working directory is optional.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !Path::new(p).exists() {
                    return Err(KeysyncError::InvalidConfig {
                        detail: format!("Config file not found: {p}"),
                    });
                }
                Path::new(p).to_path_buf()
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| KeysyncError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }
}

/// Fully resolved runtime settings.
///
/// Precedence per value: CLI flag or environment variable, then config
/// file, then built-in default. The token and the key command have no
/// default and must come from one of the first two.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub token: String,
    pub key_command: String,
    pub lookup: String,
    pub key_title: String,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = FileConfig::load(cli.config.as_deref())?;

        let api_url = cli
            .api_url
            .clone()
            .or(file.registry.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = cli
            .token
            .clone()
            .or(file.registry.token)
            .ok_or_else(|| KeysyncError::InvalidConfig {
                detail: "No session token configured.\n\n  \
                         Pass --token, set KEYSYNC_TOKEN, or add 'token' to the\n  \
                         [registry] section of keysync.toml."
                    .into(),
            })?;

        let key_command = cli
            .key_command
            .clone()
            .or(file.local.key_command)
            .ok_or_else(|| KeysyncError::InvalidConfig {
                detail: "No key command configured.\n\n  \
                         Pass --key-command, set KEYSYNC_KEY_COMMAND, or add\n  \
                         'key_command' to the [local] section of keysync.toml."
                    .into(),
            })?;

        Ok(Self {
            // the provisioning layer often hands over URLs with a trailing slash
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            key_command,
            lookup: cli
                .lookup
                .clone()
                .or(file.registry.lookup)
                .unwrap_or_else(|| DEFAULT_LOOKUP.to_string()),
            key_title: cli
                .key_title
                .clone()
                .or(file.registry.key_title)
                .unwrap_or_else(|| DEFAULT_KEY_TITLE.to_string()),
        })
    }
}
