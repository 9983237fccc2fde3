//! JSON blob-backed ConversationRepository implementation.
//!
//! Each user's conversation list is one JSON file, rewritten wholesale on
//! every save. The active conversation id lives in a separate raw-string
//! file next to it.

use async_trait::async_trait;
use tokio::fs;

use osctip_core::conversation::{Conversation, ConversationRepository};
use osctip_core::error::{OsctipError, Result};

use crate::atomic_json::{AtomicJsonError, AtomicJsonFile};
use crate::paths::OsctipPaths;

/// File-backed conversation repository.
pub struct JsonConversationRepository {
    paths: OsctipPaths,
}

impl JsonConversationRepository {
    /// Creates a repository over the given storage paths.
    pub fn new(paths: OsctipPaths) -> Self {
        Self { paths }
    }
}

fn map_storage_error(err: AtomicJsonError) -> OsctipError {
    match err {
        AtomicJsonError::Io(e) => e.into(),
        AtomicJsonError::Json(e) => e.into(),
        AtomicJsonError::Lock(message) => OsctipError::internal(message),
    }
}

#[async_trait]
impl ConversationRepository for JsonConversationRepository {
    async fn load(&self, user_id: &str) -> Result<Option<Vec<Conversation>>> {
        let path = self.paths.conversations_file(user_id);

        let loaded = tokio::task::spawn_blocking(move || {
            AtomicJsonFile::<Vec<Conversation>>::new(path).load()
        })
        .await
        .map_err(|e| OsctipError::internal(format!("Failed to join task: {}", e)))?;

        match loaded {
            Ok(list) => Ok(list),
            // Malformed data fails closed: discard and report absent so the
            // caller reseeds instead of erroring.
            Err(AtomicJsonError::Json(e)) => {
                tracing::warn!(
                    user_id,
                    error = %e,
                    "Discarding malformed conversation blob"
                );
                Ok(None)
            }
            Err(e) => Err(map_storage_error(e)),
        }
    }

    async fn save(&self, user_id: &str, conversations: &[Conversation]) -> Result<()> {
        let path = self.paths.conversations_file(user_id);
        let list = conversations.to_vec();

        tokio::task::spawn_blocking(move || {
            AtomicJsonFile::<Vec<Conversation>>::new(path).save(&list)
        })
        .await
        .map_err(|e| OsctipError::internal(format!("Failed to join task: {}", e)))?
        .map_err(map_storage_error)
    }

    async fn get_active_conversation_id(&self, user_id: &str) -> Result<Option<String>> {
        let active_file = self.paths.active_conversation_file(user_id);

        if !fs::try_exists(&active_file).await? {
            return Ok(None);
        }

        let conversation_id = fs::read_to_string(&active_file).await?;
        let conversation_id = conversation_id.trim();
        if conversation_id.is_empty() {
            return Ok(None);
        }

        Ok(Some(conversation_id.to_string()))
    }

    async fn set_active_conversation_id(&self, user_id: &str, conversation_id: &str) -> Result<()> {
        let active_file = self.paths.active_conversation_file(user_id);

        if let Some(parent) = active_file.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&active_file, conversation_id).await?;
        Ok(())
    }
}
