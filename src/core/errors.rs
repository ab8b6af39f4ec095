/// All domain errors for keysync.
///
/// Every failure is terminal for the run: there is no retry and no
/// partial-success state. Each variant carries enough upstream context
/// (command output, HTTP status, response body) to diagnose the issue
/// from the provisioning log alone.
#[derive(Debug, thiserror::Error)]
pub enum KeysyncError {
    #[error(
        "Local public key unavailable: {reason}\n\n  \
         keysync runs the configured key command and reads the public SSH key\n  \
         from its stdout. Check --key-command (or KEYSYNC_KEY_COMMAND) and make\n  \
         sure the command prints a key."
    )]
    LocalKeyUnavailable { reason: String },

    #[error("Remote key lookup failed: {reason}")]
    RemoteQueryFailed { reason: String },

    #[error(
        "Key upload failed: {reason}\n\n  \
         The key was not registered. Re-running is safe: a key the host\n  \
         already has is never created twice."
    )]
    RemoteUploadFailed { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeysyncError>;
