use crate::core::errors::Result;
use crate::core::models::public_key::LocalKey;
use crate::core::models::remote_key::RemoteKeySet;

/// Port for the remote key registry of the hosting API.
///
/// Implementations live in `adapters::registries` (e.g. GithubRegistry).
/// Both remote query shapes (single current-key lookup, full listing)
/// are normalized behind `existing_keys`.
pub trait KeyRegistry: Send + Sync {
    /// All keys currently registered for the authenticated account.
    fn existing_keys(&self) -> Result<RemoteKeySet>;

    /// Register the given key with the account.
    fn upload(&self, key: &LocalKey) -> Result<()>;
}
