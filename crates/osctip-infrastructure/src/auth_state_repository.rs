//! JSON blob-backed AuthStateRepository implementation.

use async_trait::async_trait;

use osctip_core::auth::{AuthState, AuthStateRepository};
use osctip_core::error::{OsctipError, Result};

use crate::atomic_json::{AtomicJsonError, AtomicJsonFile};
use crate::paths::OsctipPaths;

/// File-backed auth state store (`copilot_auth.json`).
pub struct JsonAuthStateRepository {
    paths: OsctipPaths,
}

impl JsonAuthStateRepository {
    /// Creates a repository over the given storage paths.
    pub fn new(paths: OsctipPaths) -> Self {
        Self { paths }
    }

    fn blob(&self) -> AtomicJsonFile<AuthState> {
        AtomicJsonFile::new(self.paths.auth_file())
    }
}

#[async_trait]
impl AuthStateRepository for JsonAuthStateRepository {
    async fn load(&self) -> Result<Option<AuthState>> {
        let blob = self.blob();

        let loaded = tokio::task::spawn_blocking(move || {
            match blob.load() {
                // A malformed snapshot is removed on the spot so the next
                // load starts clean.
                Err(AtomicJsonError::Json(e)) => {
                    tracing::warn!(error = %e, "Discarding malformed auth blob");
                    blob.remove()?;
                    Ok(None)
                }
                other => other,
            }
        })
        .await
        .map_err(|e| OsctipError::internal(format!("Failed to join task: {}", e)))?;

        loaded.map_err(|e| OsctipError::io(e.to_string()))
    }

    async fn save(&self, state: &AuthState) -> Result<()> {
        let blob = self.blob();
        let state = state.clone();

        tokio::task::spawn_blocking(move || blob.save(&state))
            .await
            .map_err(|e| OsctipError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| OsctipError::io(e.to_string()))
    }

    async fn clear(&self) -> Result<()> {
        let blob = self.blob();

        tokio::task::spawn_blocking(move || blob.remove())
            .await
            .map_err(|e| OsctipError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| OsctipError::io(e.to_string()))
    }
}
