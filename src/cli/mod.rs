pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Register your public SSH key with your Git host. Exactly once.
#[derive(Parser, Debug)]
#[command(name = "keysync", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the hosting API (e.g. an enterprise instance)
    #[arg(long, global = true, env = "KEYSYNC_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token authorizing API calls for this session
    #[arg(long, global = true, env = "KEYSYNC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Command that prints the local public SSH key on stdout
    #[arg(long, global = true, env = "KEYSYNC_KEY_COMMAND")]
    pub key_command: Option<String>,

    /// Remote lookup mode: 'key-list' or 'current-key'
    #[arg(long, global = true, env = "KEYSYNC_LOOKUP")]
    pub lookup: Option<String>,

    /// Title attached to a newly created key
    #[arg(long, global = true, env = "KEYSYNC_KEY_TITLE")]
    pub key_title: Option<String>,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload the local public SSH key if the host does not have it yet
    Sync,

    /// Report whether the local public SSH key is already uploaded
    Check,
}
