use serde::{Deserialize, Serialize};

use crate::core::models::public_key::LocalKey;

/// One key record from the listing endpoint.
///
/// The hosting API returns more fields (id, title, timestamps); only the
/// key material matters for reconciliation, the rest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteKey {
    pub key: String,
}

/// Response shape of the single "current key" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentKeyResponse {
    pub public_key: String,
}

/// Body sent to the create-key endpoint.
#[derive(Debug, Serialize)]
pub struct UploadRequest<'a> {
    pub title: &'a str,
    pub key: &'a str,
}

/// The account's existing keys, normalized from either remote shape.
#[derive(Debug, Clone, Default)]
pub struct RemoteKeySet {
    keys: Vec<RemoteKey>,
}

impl RemoteKeySet {
    pub fn new(keys: Vec<RemoteKey>) -> Self {
        Self { keys }
    }

    /// Normalize the single-record "current key" shape.
    pub fn single(key: String) -> Self {
        Self {
            keys: vec![RemoteKey { key }],
        }
    }

    /// Exact byte-for-byte membership check against the local key.
    ///
    /// No fuzzy matching: a remote record differing only by trailing
    /// whitespace is not a match.
    pub fn contains(&self, local: &LocalKey) -> bool {
        self.keys.iter().any(|record| record.key == local.material())
    }
}
