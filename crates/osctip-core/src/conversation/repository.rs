//! Conversation repository trait.
//!
//! Defines the interface for per-user conversation persistence.

use async_trait::async_trait;

use super::model::Conversation;
use crate::error::Result;

/// An abstract repository for per-user conversation persistence.
///
/// The persisted unit is the user's entire conversation list: every save
/// overwrites the whole blob and the last writer wins. The active
/// conversation id is tracked separately from the list itself, with no
/// referential integrity enforced; callers must ensure the id still exists.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Loads the persisted conversation list for a user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(list))`: a well-formed list was found
    /// - `Ok(None)`: nothing persisted, or the persisted data was malformed
    ///   (malformed data is logged and treated as absent; it never
    ///   surfaces as an error)
    /// - `Err(_)`: storage access failed
    async fn load(&self, user_id: &str) -> Result<Option<Vec<Conversation>>>;

    /// Overwrites the persisted conversation list for a user.
    async fn save(&self, user_id: &str, conversations: &[Conversation]) -> Result<()>;

    /// Gets the active conversation id for a user, if one is set.
    async fn get_active_conversation_id(&self, user_id: &str) -> Result<Option<String>>;

    /// Sets the active conversation id for a user.
    async fn set_active_conversation_id(&self, user_id: &str, conversation_id: &str) -> Result<()>;
}
