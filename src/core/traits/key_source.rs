use crate::core::errors::Result;
use crate::core::models::public_key::LocalKey;

/// Port for obtaining the caller's public SSH key.
///
/// The production implementation lives in `adapters::key_sources` and
/// shells out to an external command. The core layer only depends on
/// this trait, never on a concrete source.
pub trait KeySource: Send + Sync {
    /// Fetch the current public key. Fails if none is available.
    fn public_key(&self) -> Result<LocalKey>;
}
