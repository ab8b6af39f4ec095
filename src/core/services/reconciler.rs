use crate::core::errors::Result;
use crate::core::traits::key_registry::KeyRegistry;
use crate::core::traits::key_source::KeySource;

/// Terminal outcome of a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The account already has this exact key. Nothing was sent.
    AlreadyUploaded,
    /// The key was missing remotely and has been created.
    Uploaded,
}

/// Converges the local public key and the remote registry.
///
/// One linear pass: fetch the local key, query the remote set, upload if
/// and only if the exact key is absent. Running it again with unchanged
/// external state performs no further mutation.
pub struct Reconciler<S: KeySource, R: KeyRegistry> {
    pub source: S,
    pub registry: R,
}

impl<S: KeySource, R: KeyRegistry> Reconciler<S, R> {
    /// Ensure the local public key is registered remotely.
    ///
    /// Issues at most one create call. A failed local fetch aborts the
    /// run before any remote call is made.
    pub fn sync(&self) -> Result<SyncOutcome> {
        let local = self.source.public_key()?;
        let remote = self.registry.existing_keys()?;

        if remote.contains(&local) {
            return Ok(SyncOutcome::AlreadyUploaded);
        }

        self.registry.upload(&local)?;
        Ok(SyncOutcome::Uploaded)
    }

    /// Report whether the local key is already registered, without mutating.
    pub fn is_uploaded(&self) -> Result<bool> {
        let local = self.source.public_key()?;
        let remote = self.registry.existing_keys()?;
        Ok(remote.contains(&local))
    }
}
