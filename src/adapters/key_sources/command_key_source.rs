use std::process::Command;

use crate::core::errors::{KeysyncError, Result};
use crate::core::models::public_key::LocalKey;
use crate::core::traits::key_source::KeySource;

/// Key source that runs an external command and reads the key from stdout.
///
/// The command string is split on whitespace: the first token is the
/// program, the rest are arguments. A non-zero exit or empty output means
/// there is nothing to reconcile, and the run stops before any remote call.
pub struct CommandKeySource {
    command: String,
}

impl CommandKeySource {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

impl KeySource for CommandKeySource {
    fn public_key(&self) -> Result<LocalKey> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| KeysyncError::LocalKeyUnavailable {
                reason: "key command is empty".into(),
            })?;

        let output = Command::new(program).args(parts).output().map_err(|e| {
            KeysyncError::LocalKeyUnavailable {
                reason: format!("Failed to run '{}': {e}", self.command),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KeysyncError::LocalKeyUnavailable {
                reason: format!(
                    "'{}' exited with {}: {}",
                    self.command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        LocalKey::parse(&stdout).ok_or_else(|| KeysyncError::LocalKeyUnavailable {
            reason: format!("'{}' produced no output", self.command),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_key_from_command_stdout() {
        let source = CommandKeySource::new("echo ssh-ed25519 AAAA".into());
        let key = source.public_key().unwrap();
        assert_eq!(key.material(), "ssh-ed25519 AAAA");
    }

    #[test]
    fn empty_command_fails() {
        let source = CommandKeySource::new("".into());
        assert!(source.public_key().is_err());
    }

    #[test]
    fn missing_program_fails() {
        let source = CommandKeySource::new("keysync-no-such-program-xyz".into());
        let err = source.public_key().unwrap_err();
        assert!(matches!(err, KeysyncError::LocalKeyUnavailable { .. }));
    }

    #[test]
    fn non_zero_exit_fails() {
        let source = CommandKeySource::new("false".into());
        let err = source.public_key().unwrap_err();
        assert!(matches!(err, KeysyncError::LocalKeyUnavailable { .. }));
    }

    #[test]
    fn empty_output_fails() {
        let source = CommandKeySource::new("true".into());
        let err = source.public_key().unwrap_err();
        assert!(matches!(err, KeysyncError::LocalKeyUnavailable { .. }));
    }

    #[test]
    fn whitespace_only_output_fails() {
        // `echo` with no arguments prints a bare newline
        let source = CommandKeySource::new("echo".into());
        assert!(source.public_key().is_err());
    }
}
