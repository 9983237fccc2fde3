//! Auth state repository trait.

use async_trait::async_trait;

use super::model::AuthState;
use crate::error::Result;

/// Persistence boundary for the authentication snapshot.
///
/// The snapshot is one blob, overwritten wholesale on every change.
#[async_trait]
pub trait AuthStateRepository: Send + Sync {
    /// Loads the persisted snapshot.
    ///
    /// A malformed blob is discarded (the stored file is removed) and
    /// reported as absent rather than surfacing an error.
    async fn load(&self) -> Result<Option<AuthState>>;

    /// Overwrites the persisted snapshot.
    async fn save(&self, state: &AuthState) -> Result<()>;

    /// Removes the persisted snapshot, if any.
    async fn clear(&self) -> Result<()>;
}
