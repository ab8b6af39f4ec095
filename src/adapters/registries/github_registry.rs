use std::time::Duration;

use crate::core::errors::{KeysyncError, Result};
use crate::core::models::public_key::LocalKey;
use crate::core::models::remote_key::{
    CurrentKeyResponse, RemoteKey, RemoteKeySet, UploadRequest,
};
use crate::core::traits::key_registry::KeyRegistry;

/// Timeout for each API call. One best-effort attempt, no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How the registry queries the account's existing key(s).
///
/// Both variants normalize to the same `RemoteKeySet`, so the membership
/// check never branches on the remote shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookup {
    /// Single "current key" endpoint returning at most one record.
    CurrentKey,
    /// Listing endpoint returning zero or more records.
    KeyList,
}

impl KeyLookup {
    /// Parse the configured lookup mode.
    pub fn parse(mode: &str) -> Result<Self> {
        match mode {
            "current-key" => Ok(Self::CurrentKey),
            "key-list" => Ok(Self::KeyList),
            other => Err(KeysyncError::InvalidConfig {
                detail: format!("Unknown lookup mode: '{other}'. Use 'key-list' or 'current-key'."),
            }),
        }
    }
}

/// Adapter for a GitHub-compatible key registry reached over HTTPS.
///
/// Every call carries the session credential as a bearer token. Auth
/// rejections (401/403) are not special-cased: any non-2xx response is a
/// terminal failure for the run, with the response body kept as
/// diagnostic text.
pub struct GithubRegistry {
    base_url: String,
    token: String,
    lookup: KeyLookup,
    key_title: String,
}

impl GithubRegistry {
    pub fn new(base_url: String, token: String, lookup: KeyLookup, key_title: String) -> Self {
        Self {
            base_url,
            token,
            lookup,
            key_title,
        }
    }

    /// Build a reqwest client with the fixed request timeout.
    fn build_client(&self) -> std::result::Result<reqwest::Client, String> {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("keysync/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))
    }

    /// Format a non-2xx response into diagnostic text.
    async fn status_diagnostic(resp: reqwest::Response) -> String {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            format!("registry returned status {status}")
        } else {
            format!("registry returned status {status}: {}", body.trim())
        }
    }
}

/// Single-threaded runtime for driving the async client to completion.
fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

impl KeyRegistry for GithubRegistry {
    fn existing_keys(&self) -> Result<RemoteKeySet> {
        let rt = runtime().map_err(|e| KeysyncError::RemoteQueryFailed {
            reason: format!("Failed to create async runtime: {e}"),
        })?;

        rt.block_on(async {
            let client =
                self.build_client()
                    .map_err(|reason| KeysyncError::RemoteQueryFailed { reason })?;

            match self.lookup {
                KeyLookup::CurrentKey => {
                    let resp = client
                        .get(format!("{}/api/v2/users/me/gitsshkey", self.base_url))
                        .bearer_auth(&self.token)
                        .header("Accept", "application/json")
                        .send()
                        .await
                        .map_err(|e| KeysyncError::RemoteQueryFailed {
                            reason: format!("Key lookup request failed: {e}"),
                        })?;

                    if !resp.status().is_success() {
                        return Err(KeysyncError::RemoteQueryFailed {
                            reason: Self::status_diagnostic(resp).await,
                        });
                    }

                    let current: CurrentKeyResponse =
                        resp.json()
                            .await
                            .map_err(|e| KeysyncError::RemoteQueryFailed {
                                reason: format!("Failed to parse key lookup response: {e}"),
                            })?;

                    Ok(RemoteKeySet::single(current.public_key))
                }
                KeyLookup::KeyList => {
                    let resp = client
                        .get(format!("{}/user/keys", self.base_url))
                        .bearer_auth(&self.token)
                        .header("Accept", "application/vnd.github+json")
                        .send()
                        .await
                        .map_err(|e| KeysyncError::RemoteQueryFailed {
                            reason: format!("Key listing request failed: {e}"),
                        })?;

                    if !resp.status().is_success() {
                        return Err(KeysyncError::RemoteQueryFailed {
                            reason: Self::status_diagnostic(resp).await,
                        });
                    }

                    let records: Vec<RemoteKey> =
                        resp.json()
                            .await
                            .map_err(|e| KeysyncError::RemoteQueryFailed {
                                reason: format!("Failed to parse key listing: {e}"),
                            })?;

                    Ok(RemoteKeySet::new(records))
                }
            }
        })
    }

    fn upload(&self, key: &LocalKey) -> Result<()> {
        let rt = runtime().map_err(|e| KeysyncError::RemoteUploadFailed {
            reason: format!("Failed to create async runtime: {e}"),
        })?;

        rt.block_on(async {
            let client =
                self.build_client()
                    .map_err(|reason| KeysyncError::RemoteUploadFailed { reason })?;

            let resp = client
                .post(format!("{}/user/keys", self.base_url))
                .bearer_auth(&self.token)
                .header("Accept", "application/vnd.github+json")
                .json(&UploadRequest {
                    title: &self.key_title,
                    key: key.material(),
                })
                .send()
                .await
                .map_err(|e| KeysyncError::RemoteUploadFailed {
                    reason: format!("Create-key request failed: {e}"),
                })?;

            if !resp.status().is_success() {
                return Err(KeysyncError::RemoteUploadFailed {
                    reason: Self::status_diagnostic(resp).await,
                });
            }

            Ok(())
        })
    }
}
